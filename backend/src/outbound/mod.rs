//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user registry guarded by a mutex
//!
//! Adapters are thin translators between domain types and their backing
//! store. They contain no business logic beyond the port contract.

pub mod memory;

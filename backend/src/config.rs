//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_REGISTRY_*` environment variables, or a
//! configuration file, in that order of precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Failure to turn loaded settings into a bindable address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid bind host `{host}`: expected an IP address")]
    InvalidHost { host: String },
}

/// Network settings for the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServerSettings {
    /// Interface address to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address the server should bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.trim();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-registry")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_8080() {
        let _guard = lock_env([
            ("USER_REGISTRY_HOST", None::<String>),
            ("USER_REGISTRY_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_REGISTRY_HOST", Some("127.0.0.1".to_owned())),
            ("USER_REGISTRY_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("overridden address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn port_override_keeps_default_host() {
        let _guard = lock_env([
            ("USER_REGISTRY_HOST", None::<String>),
            ("USER_REGISTRY_PORT", Some("18089".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("partially overridden address"),
            SocketAddr::from(([0, 0, 0, 0], 18089))
        );
    }

    #[rstest]
    #[case("::1", "[::1]:8080")]
    #[case(" 10.0.0.5 ", "10.0.0.5:8080")]
    fn bind_addr_accepts_ip_literals(#[case] host: &str, #[case] expected: &str) {
        let settings = ServerSettings {
            host: host.to_owned(),
            port: DEFAULT_PORT,
        };

        assert_eq!(
            settings.bind_addr().expect("valid address").to_string(),
            expected
        );
    }

    #[rstest]
    fn bind_addr_rejects_hostnames() {
        let settings = ServerSettings {
            host: "localhost".to_owned(),
            port: DEFAULT_PORT,
        };

        assert_eq!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost {
                host: "localhost".to_owned()
            })
        );
    }
}

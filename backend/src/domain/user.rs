//! User data model.
//!
//! Constructors on [`Username`] and [`Age`] are the request-validation
//! layer: once a [`User`] exists its fields satisfy the documented bounds,
//! so the registry never re-validates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum allowed length for a username, in characters.
pub const USERNAME_MIN: usize = 5;
/// Maximum allowed length for a username, in characters.
pub const USERNAME_MAX: usize = 20;
/// Youngest accepted age.
pub const AGE_MIN: i64 = 18;
/// Oldest accepted age.
pub const AGE_MAX: i64 = 120;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("username must be at least {min} characters")]
    UsernameTooShort { min: usize },
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: i64, max: i64 },
}

/// Caller-chosen user identifier.
///
/// The registry does not generate identifiers; clients pick them and the
/// registry rejects collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Username between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::Username;
    ///
    /// assert!(Username::new("UrbanUser").is_ok());
    /// assert!(Username::new("abc").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        let length = username.chars().count();
        if length < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Age in whole years between [`AGE_MIN`] and [`AGE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Age(u8);

impl Age {
    /// Validate and construct an [`Age`].
    pub fn new(years: i64) -> Result<Self, UserValidationError> {
        if !(AGE_MIN..=AGE_MAX).contains(&years) {
            return Err(UserValidationError::AgeOutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            });
        }
        u8::try_from(years)
            .map(Self)
            .map_err(|_| UserValidationError::AgeOutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            })
    }

    /// Age in years.
    #[must_use]
    pub const fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Age> for i64 {
    fn from(value: Age) -> Self {
        Self::from(value.0)
    }
}

impl TryFrom<i64> for Age {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registry record.
///
/// ## Invariants
/// - `username` holds 5–20 characters.
/// - `age` lies within 18–120.
/// - `id` never changes once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: Username,
    age: Age,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub fn new(id: UserId, username: Username, age: Age) -> Self {
        Self { id, username, age }
    }

    /// Fallible constructor enforcing username and age bounds.
    ///
    /// Prefer [`User::new`] when components are already validated.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::User;
    ///
    /// let user = User::try_from_parts(1, "UrbanUser", 24).expect("valid user");
    /// assert_eq!(user.id().get(), 1);
    /// assert!(User::try_from_parts(1, "UrbanUser", 17).is_err());
    /// ```
    pub fn try_from_parts(
        id: i64,
        username: impl Into<String>,
        age: i64,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        let age = Age::new(age)?;
        Ok(Self::new(UserId::new(id), username, age))
    }

    /// Caller-chosen identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Current age.
    pub fn age(&self) -> Age {
        self.age
    }

    /// Replace the mutable profile fields, keeping the identifier.
    pub fn update_profile(&mut self, username: Username, age: Age) {
        self.username = username;
        self.age = age;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i64,
    username: String,
    age: i64,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, username, age } = value;
        Self {
            id: id.get(),
            username: username.into(),
            age: age.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.username, value.age)
    }
}

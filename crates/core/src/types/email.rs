//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Ways an email address can fail to parse.
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// Input was empty.
    #[error("email must not be empty")]
    Empty,
    /// The input exceeds the RFC 5321 length limit.
    #[error("email exceeds {0} characters")]
    TooLong(usize),
    /// No @ separator anywhere in the input.
    #[error("email is missing the @ separator")]
    MissingAt,
    /// Nothing before the @.
    #[error("email has an empty local part")]
    EmptyLocal,
    /// Nothing after the @.
    #[error("email has an empty domain")]
    EmptyDomain,
}

/// An owner's email address.
///
/// Validation is structural only: a non-empty local part and domain
/// separated by an @, within the RFC 5321 length limit. Whether the
/// address actually receives mail is a different problem.
///
/// ## Examples
///
/// ```
/// use prime_villa_core::Email;
///
/// assert!(Email::parse("owner@example.com").is_ok());
/// assert!(Email::parse("name+tag@villas.co.uk").is_ok());
///
/// assert!(Email::parse("").is_err());
/// assert!(Email::parse("no-at-symbol").is_err());
/// assert!(Email::parse("@primevilla.com").is_err());
/// assert!(Email::parse("owner@").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// RFC 5321 upper bound on total address length.
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email`, checking structure but not deliverability.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the input is empty, longer than
    /// [`Self::MAX_LENGTH`], has no @, or has an empty side around it.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong(Self::MAX_LENGTH));
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAt)?;
        if local.is_empty() {
            return Err(EmailError::EmptyLocal);
        }
        if domain.is_empty() {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the `Email`, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The domain part, after the @.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

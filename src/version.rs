use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use atoi::FromRadix10Checked;

use crate::error::{BoxDynError, Error};

/// Answers whether the server a session is connected to is at least a given version.
///
/// Supplied by the connection layer to gate charsets that only exist on newer servers.
/// The catalog never constructs or caches one.
pub trait VersionContext {
    fn version_meets_minimum(&self, major: u16, minor: u16, patch: u16) -> Result<bool, BoxDynError>;
}

/// A `major.minor.patch` server version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ServerVersion {
    /// The oldest server any charset can require; charsets without a declared
    /// minimum version have existed since 4.1.
    pub const BASELINE: Self = Self::new(4, 1, 0);

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for ServerVersion {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl From<(u16, u16, u16)> for ServerVersion {
    fn from((major, minor, patch): (u16, u16, u16)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ServerVersion {
    type Err = Error;

    /// Parses the version string a server reports in its initial handshake,
    /// e.g. `8.0.33-0ubuntu0.22.04.2`.
    ///
    /// MariaDB 10+ prefixes its version with `5.5.5-` for the sake of old replication
    /// clients; that prefix is skipped.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut version = s.trim();

        if version.contains("MariaDB") {
            if let Some(rest) = version.strip_prefix("5.5.5-") {
                version = rest;
            }
        }

        let mut components = [0_u16; 3];
        let mut rest = version.as_bytes();

        for (i, slot) in components.iter_mut().enumerate() {
            let (value, len) = u16::from_radix_10_checked(rest);

            if len == 0 {
                if i == 0 {
                    return Err(Error::config(format!("invalid server version: {s:?}")));
                }

                break;
            }

            *slot = value
                .ok_or_else(|| Error::config(format!("server version out of range: {s:?}")))?;

            rest = &rest[len..];

            match rest.split_first() {
                Some((b'.', tail)) => rest = tail,
                _ => break,
            }
        }

        let [major, minor, patch] = components;

        Ok(Self::new(major, minor, patch))
    }
}

impl VersionContext for ServerVersion {
    fn version_meets_minimum(&self, major: u16, minor: u16, patch: u16) -> Result<bool, BoxDynError> {
        Ok(*self >= Self::new(major, minor, patch))
    }
}

impl VersionContext for (u16, u16, u16) {
    fn version_meets_minimum(&self, major: u16, minor: u16, patch: u16) -> Result<bool, BoxDynError> {
        Ok(*self >= (major, minor, patch))
    }
}

impl<T: VersionContext + ?Sized> VersionContext for &T {
    fn version_meets_minimum(&self, major: u16, minor: u16, patch: u16) -> Result<bool, BoxDynError> {
        (**self).version_meets_minimum(major, minor, patch)
    }
}

/// Asks `version`, passing errors of this crate through and wrapping any other as
/// [`Error::DataAccess`].
pub(crate) fn meets_minimum(
    version: &dyn VersionContext,
    major: u16,
    minor: u16,
    patch: u16,
) -> Result<bool, Error> {
    version
        .version_meets_minimum(major, minor, patch)
        .map_err(|err| match err.downcast::<Error>() {
            Ok(err) => *err,
            Err(err) => Error::data_access(err),
        })
}

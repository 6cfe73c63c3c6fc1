//! Types for working with errors produced by charset lookups.

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::result::Result as StdResult;

/// A specialized `Result` type for charset lookups.
pub type Result<T, E = Error> = StdResult<T, E>;

/// A boxed error as returned by a [`VersionContext`](crate::VersionContext).
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// The SQLSTATE reported with a [`Error::DataAccess`].
///
/// These are the driver-side states a MySQL client reports for failures that did not
/// come from the server itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SqlState {
    /// `S1000`: general error.
    GeneralError,

    /// `S1009`: invalid argument value.
    IllegalArgument,
}

impl SqlState {
    pub const fn as_str(self) -> &'static str {
        match self {
            SqlState::GeneralError => "S1000",
            SqlState::IllegalArgument => "S1009",
        }
    }
}

impl Display for SqlState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all the ways a charset lookup can fail.
///
/// A lookup that simply finds nothing is *not* an error; those return `None`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The server version check failed, or a lookup was given an argument it cannot use.
    #[error("error occurred while resolving a character set ({sql_state}): {source}")]
    DataAccess {
        sql_state: SqlState,

        #[source]
        source: BoxDynError,
    },

    /// Charset options could not be parsed or do not name a known charset or collation.
    #[error("error occurred while parsing charset options: {0}")]
    Configuration(#[source] BoxDynError),

    /// A literal charset or collation table failed its consistency check.
    ///
    /// This indicates a bug in the table data, not a runtime condition.
    #[error("charset table is inconsistent: {0}")]
    Integrity(String),
}

impl Error {
    /// A failure of a collaborator, such as a [`VersionContext`](crate::VersionContext)
    /// that lost its connection (`S1000`).
    #[inline]
    pub fn data_access(err: impl Into<BoxDynError>) -> Self {
        Error::DataAccess {
            sql_state: SqlState::GeneralError,
            source: err.into(),
        }
    }

    /// An argument a collaborator cannot use (`S1009`).
    ///
    /// Returned from a [`VersionContext`](crate::VersionContext), it reaches the caller of a
    /// lookup unchanged.
    #[inline]
    pub fn illegal_argument(err: impl Into<BoxDynError>) -> Self {
        Error::DataAccess {
            sql_state: SqlState::IllegalArgument,
            source: err.into(),
        }
    }

    #[inline]
    pub(crate) fn config(err: impl Into<BoxDynError>) -> Self {
        Error::Configuration(err.into())
    }

    /// The SQLSTATE of a [`Error::DataAccess`], if this is one.
    pub fn sql_state(&self) -> Option<SqlState> {
        match self {
            Error::DataAccess { sql_state, .. } => Some(*sql_state),
            _ => None,
        }
    }

    /// Returns `true` if this error was caused by an argument the lookup cannot use.
    pub fn is_illegal_argument(&self) -> bool {
        self.sql_state() == Some(SqlState::IllegalArgument)
    }
}

// Format an error message as an `Integrity` error
macro_rules! err_integrity {
    ($expr:expr) => {
        $crate::error::Error::Integrity($expr.into())
    };

    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::Integrity(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::{Error, SqlState};

    #[test]
    fn test_data_access_states() {
        let err = Error::data_access("version check failed");
        assert_eq!(err.sql_state(), Some(SqlState::GeneralError));
        assert!(!err.is_illegal_argument());

        let err = Error::illegal_argument("empty encoding name");
        assert_eq!(err.sql_state(), Some(SqlState::IllegalArgument));
        assert!(err.is_illegal_argument());
        assert_eq!(
            err.to_string(),
            "error occurred while resolving a character set (S1009): empty encoding name"
        );
    }

    #[test]
    fn test_integrity_has_no_state() {
        let err = err_integrity!("no collation at index {}", 17);

        assert_eq!(err.sql_state(), None);
        assert_eq!(
            err.to_string(),
            "charset table is inconsistent: no collation at index 17"
        );
    }
}

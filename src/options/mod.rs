use std::fmt::{self, Display, Formatter};

use crate::catalog::CharsetCatalog;
use crate::collation::Collation;
use crate::error::{Error, Result};
use crate::version::{self, VersionContext};

mod parse;

/// Options that decide the charset and collation of a session.
///
/// The fields mirror the connection properties a MySQL client accepts; all of them are
/// optional and [`resolve`](Self::resolve) picks a charset for the server being connected to.
///
/// Options can be built with the setters or parsed from a connection URL:
///
/// ```rust
/// use sqlx_mysql_charset::{CharsetCatalog, MySqlCharsetOptions, ServerVersion};
///
/// let options: MySqlCharsetOptions = "mysql://root@localhost/db?characterEncoding=GB18030".parse()?;
/// let session = options.resolve(CharsetCatalog::global(), &ServerVersion::new(8, 0, 33))?;
///
/// assert_eq!(session.charset(), "gb18030");
/// assert_eq!(session.set_names(), "NAMES gb18030 COLLATE gb18030_chinese_ci");
/// # Ok::<(), sqlx_mysql_charset::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MySqlCharsetOptions {
    pub(crate) charset: Option<String>,
    pub(crate) collation: Option<String>,
    pub(crate) character_encoding: Option<String>,
}

impl MySqlCharsetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character set for the connection.
    ///
    /// If unset, the charset is derived from the collation or the character encoding, and
    /// defaults to `utf8mb4`, or `utf8` on servers older than 5.5.3.
    pub fn charset(mut self, charset: &str) -> Self {
        self.charset = Some(charset.to_owned());
        self
    }

    /// Sets the collation for the connection.
    ///
    /// The collation implies the charset. Normally, you should only have to set the `charset`.
    pub fn collation(mut self, collation: &str) -> Self {
        self.collation = Some(collation.to_owned());
        self
    }

    /// Sets the client encoding used to encode and decode text.
    ///
    /// Without an explicit charset or collation, the charset is derived from this encoding.
    pub fn character_encoding(mut self, encoding: &str) -> Self {
        self.character_encoding = Some(encoding.to_owned());
        self
    }

    pub fn get_charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn get_collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }

    pub fn get_character_encoding(&self) -> Option<&str> {
        self.character_encoding.as_deref()
    }

    /// Picks the charset, collation and client encoding of a session.
    ///
    /// In order of precedence:
    ///
    /// 1. An explicit collation and its charset. If a charset is set as well, it must be
    ///    the charset of the collation.
    /// 2. An explicit charset and its default collation.
    /// 3. The charset for the character encoding on this server.
    /// 4. `utf8mb4` on servers since 5.5.3, `utf8` before.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if a name is unknown to `catalog`, and
    /// [`Error::DataAccess`] if asking `version` fails.
    pub fn resolve(
        &self,
        catalog: &CharsetCatalog,
        version: &dyn VersionContext,
    ) -> Result<SessionCharset> {
        let encoding = self.character_encoding.as_deref();

        if let Some(name) = &self.collation {
            let collation = catalog
                .collation_by_name(name)
                .ok_or_else(|| Error::config(format!("unknown collation: {name:?}")))?;

            let session = SessionCharset::new(catalog, collation, encoding)?;

            if let Some(charset) = &self.charset {
                if !session.charset.eq_ignore_ascii_case(charset) {
                    return Err(Error::config(format!(
                        "collation {name:?} is not valid for charset {charset:?}"
                    )));
                }
            }

            return Ok(session);
        }

        let charset = match (&self.charset, encoding) {
            // charset names are case-insensitive, like collation names
            (Some(name), _) => catalog
                .charsets()
                .find(|charset| charset.name().eq_ignore_ascii_case(name))
                .map_or(name.as_str(), |charset| charset.name()),

            (None, Some(encoding)) => catalog
                .charset_for_encoding(encoding, Some(version))?
                .ok_or_else(|| {
                    Error::config(format!("no charset supports character encoding {encoding:?}"))
                })?,

            (None, None) => default_charset(version)?,
        };

        let collation = catalog
            .default_collation(charset)
            .ok_or_else(|| Error::config(format!("unknown charset: {charset:?}")))?;

        SessionCharset::new(catalog, collation, encoding)
    }
}

fn default_charset(version: &dyn VersionContext) -> Result<&'static str> {
    // utf8mb4 was added in 5.5.3
    let utf8mb4 = version::meets_minimum(version, 5, 5, 3)?;

    Ok(if utf8mb4 { "utf8mb4" } else { "utf8" })
}

/// The charset, collation and client encoding picked for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCharset {
    charset: &'static str,
    collation: Collation,
    collation_name: &'static str,
    encoding: String,
}

impl SessionCharset {
    fn new(catalog: &CharsetCatalog, collation: Collation, preferred: Option<&str>) -> Result<Self> {
        let entry = catalog
            .collation(collation)
            .ok_or_else(|| Error::config(format!("unknown collation ID {collation}")))?;

        let charset = catalog.charset_of(entry);

        Ok(Self {
            charset: charset.name(),
            collation,
            collation_name: entry.name(),
            encoding: charset.matching_encoding(preferred).to_owned(),
        })
    }

    pub fn charset(&self) -> &'static str {
        self.charset
    }

    pub fn collation(&self) -> Collation {
        self.collation
    }

    pub fn collation_name(&self) -> &'static str {
        self.collation_name
    }

    /// The client encoding used to encode and decode text in this session.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Formats the `NAMES .. COLLATE ..` clause for this charset and collation.
    ///
    /// Only formats text; sending it to a server is up to the caller.
    pub fn set_names(&self) -> String {
        format!("NAMES {} COLLATE {}", self.charset, self.collation_name)
    }
}

impl Display for SessionCharset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) as {}",
            self.charset, self.collation_name, self.collation, self.encoding
        )
    }
}

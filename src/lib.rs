//! Mapping between [MySQL] character sets, collations and client text encodings.
//!
//! A MySQL server speaks in charsets (`utf8mb4`, `latin1`, `sjis`) and identifies the collation
//! of every connection and column by a numeric ID. A client decodes text with encodings
//! (`UTF-8`, `Cp1252`, `Shift_JIS`). The [`CharsetCatalog`] answers the questions a driver asks
//! while negotiating a session and decoding results:
//!
//! * which charset to request for a client encoding, taking the server version into account,
//! * which charset and client encoding a collation ID reported by the server belongs to,
//! * whether an encoding is multi-byte, and how many bytes a character can take.
//!
//! ```rust
//! use sqlx_mysql_charset::{catalog, Collation, ServerVersion};
//!
//! let catalog = catalog();
//!
//! assert_eq!(catalog.charset_for_encoding("MS932", None)?, Some("sjis"));
//! assert_eq!(catalog.charset_for_encoding("MS932", Some(&ServerVersion::new(8, 0, 33)))?, Some("cp932"));
//!
//! assert_eq!(catalog.charset_for_collation(Collation::UTF8MB4_GENERAL_CI), Some("utf8mb4"));
//! assert_eq!(catalog.client_encoding_for_collation(Collation(8), None), Some("WINDOWS-1252"));
//! # Ok::<(), sqlx_mysql_charset::Error>(())
//! ```
//!
//! [MySQL]: https://www.mysql.com/
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]
#![warn(clippy::pedantic)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::use_self)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod error;

mod catalog;
mod charset;
mod codec;
mod collation;
mod options;
mod version;

pub use catalog::{catalog, table, CatalogBuilder, CharsetCatalog};
pub use charset::{CharsetDef, MySqlCharset};
pub use codec::{Codec, CodecRegistry, StandardCodecs};
pub use collation::{Collation, CollationDef, MySqlCollation};
pub use error::{BoxDynError, Error, Result, SqlState};
pub use options::{MySqlCharsetOptions, SessionCharset};
pub use version::{ServerVersion, VersionContext};

pub use encoding_rs;
pub use url::Url;

use std::fmt::{self, Display, Formatter};

use encoding_rs::Encoding;

use crate::codec::CodecRegistry;
use crate::error::Result;
use crate::version::{self, ServerVersion, VersionContext};

/// A literal entry of a charset table.
///
/// Tables are written as `static` slices of these; see [`CharsetDef::new`].
#[derive(Debug, Copy, Clone)]
pub struct CharsetDef {
    pub(crate) name: &'static str,
    pub(crate) max_len: u8,
    pub(crate) priority: u8,
    pub(crate) encodings: &'static [&'static str],
    pub(crate) min_version: ServerVersion,
}

impl CharsetDef {
    /// Declares a MySQL charset.
    ///
    /// * `max_len`: the maximum number of bytes per character.
    /// * `priority`: when several charsets map to the same client encoding, the one with the
    ///   highest priority is used to convert from that encoding to a charset.
    /// * `encodings`: client encodings equivalent to this charset; the first is the default
    ///   used to decode data sent in this charset.
    pub const fn new(
        name: &'static str,
        max_len: u8,
        priority: u8,
        encodings: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            max_len,
            priority,
            encodings,
            min_version: ServerVersion::BASELINE,
        }
    }

    /// Declares the first server version that has this charset.
    pub const fn since(mut self, major: u16, minor: u16, patch: u16) -> Self {
        self.min_version = ServerVersion::new(major, minor, patch);
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// A MySQL charset and the client encodings equivalent to it.
#[derive(Debug, Clone)]
pub struct MySqlCharset {
    name: &'static str,
    max_len: u8,
    priority: u8,
    min_version: ServerVersion,
    // upper-cased, never empty
    encodings: Vec<String>,
    text_encoding: Option<&'static Encoding>,
}

impl MySqlCharset {
    /// Resolves the encodings of `def` through `registry`.
    ///
    /// Every name the registry knows contributes its canonical name and all of its aliases.
    /// A name the registry doesn't know is kept as-is for a single-byte charset, since those
    /// can still be decoded with a table of our own, and dropped for a multi-byte charset.
    pub(crate) fn new(def: &CharsetDef, registry: &dyn CodecRegistry) -> Self {
        let mut charset = Self {
            name: def.name,
            max_len: def.max_len,
            priority: def.priority,
            min_version: def.min_version,
            encodings: Vec::with_capacity(def.encodings.len()),
            text_encoding: None,
        };

        for &encoding in def.encodings {
            match registry.resolve(encoding) {
                Some(codec) => {
                    charset.text_encoding = charset.text_encoding.or(codec.encoding());
                    charset.add_encoding(codec.name());

                    for alias in codec.aliases() {
                        charset.add_encoding(alias);
                    }
                }

                None if charset.max_len == 1 => {
                    tracing::trace!(
                        charset = charset.name,
                        encoding,
                        "keeping unresolved encoding for single-byte charset"
                    );

                    charset.add_encoding(encoding);
                }

                None => {
                    log::warn!(
                        "no codec for encoding {:?} of multi-byte charset {:?}",
                        encoding,
                        charset.name
                    );
                }
            }
        }

        if charset.encodings.is_empty() {
            charset.add_encoding(if charset.max_len > 1 { "UTF-8" } else { "Cp1252" });
        }

        charset
    }

    fn add_encoding(&mut self, encoding: &str) {
        let encoding = encoding.to_ascii_uppercase();

        if !self.encodings.contains(&encoding) {
            self.encodings.push(encoding);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The maximum number of bytes per character.
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// The first server version that has this charset.
    pub fn min_version(&self) -> ServerVersion {
        self.min_version
    }

    pub fn is_multibyte(&self) -> bool {
        self.max_len > 1
    }

    /// Upper-cased names of all client encodings equivalent to this charset.
    pub fn encodings(&self) -> &[String] {
        &self.encodings
    }

    /// The client encoding used to decode data sent in this charset.
    pub fn default_encoding(&self) -> &str {
        &self.encodings[0]
    }

    /// The `encoding_rs` encoding that decodes data sent in this charset, if there is one.
    pub fn text_encoding(&self) -> Option<&'static Encoding> {
        self.text_encoding
    }

    pub fn has_encoding(&self, encoding: &str) -> bool {
        self.encodings
            .iter()
            .any(|known| known.eq_ignore_ascii_case(encoding))
    }

    /// Returns `preferred` if it names one of the encodings of this charset, keeping the
    /// caller's spelling, and the default encoding otherwise.
    ///
    /// Keeping the spelling matters when the result is compared against the connection
    /// encoding: a connection using `Cp943` must not get `SHIFT_JIS` back for `sjis`.
    pub fn matching_encoding<'a>(&'a self, preferred: Option<&'a str>) -> &'a str {
        match preferred {
            Some(preferred) if self.has_encoding(preferred) => preferred,
            _ => self.default_encoding(),
        }
    }

    pub(crate) fn is_okay_for_version(&self, version: &dyn VersionContext) -> Result<bool> {
        let ServerVersion {
            major,
            minor,
            patch,
        } = self.min_version;

        version::meets_minimum(version, major, minor, patch)
    }
}

impl Display for MySqlCharset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[charsetName={},mblen={}]", self.name, self.max_len)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{CharsetDef, MySqlCharset};
    use crate::codec::{Codec, StandardCodecs};
    use crate::error::{BoxDynError, Error, SqlState};
    use crate::version::{ServerVersion, VersionContext};

    fn unresolved(_: &str) -> Option<Codec> {
        None
    }

    #[test]
    fn test_collects_canonical_names_and_aliases() {
        let def = CharsetDef::new("latin1", 1, 1, &["Cp1252", "ISO8859_1"]);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        assert_eq!(charset.default_encoding(), "WINDOWS-1252");
        assert!(charset.has_encoding("cp1252"));
        assert!(charset.has_encoding("ISO-8859-1"));
        assert!(charset.has_encoding("latin1"));
        assert_eq!(charset.text_encoding(), Some(encoding_rs::WINDOWS_1252));

        // all upper-case, no duplicates
        for (i, encoding) in charset.encodings().iter().enumerate() {
            assert_eq!(*encoding, encoding.to_ascii_uppercase());
            assert!(!charset.encodings()[i + 1..].contains(encoding));
        }
    }

    #[test]
    fn test_shared_codec_is_recorded_once() {
        let def = CharsetDef::new("greek", 1, 0, &["ISO8859_7", "greek"]);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        let greek = charset.encodings().iter().filter(|e| *e == "GREEK").count();
        assert_eq!(greek, 1);
        assert_eq!(charset.default_encoding(), "ISO-8859-7");
    }

    #[test]
    fn test_unresolved_single_byte_encoding_is_kept() {
        let def = CharsetDef::new("keybcs2", 1, 0, &["Cp895"]);
        let charset = MySqlCharset::new(&def, &unresolved);

        assert_eq!(charset.encodings(), ["CP895"]);
        assert_eq!(charset.text_encoding(), None);
    }

    #[test]
    fn test_unresolved_multi_byte_encoding_falls_back_to_utf8() {
        let def = CharsetDef::new("utf8mb4", 4, 0, &["UTF-8"]);
        let charset = MySqlCharset::new(&def, &unresolved);

        assert_eq!(charset.encodings(), ["UTF-8"]);
    }

    #[test]
    fn test_empty_single_byte_charset_falls_back_to_cp1252() {
        let def = CharsetDef::new("dec8", 1, 0, &[]);
        let charset = MySqlCharset::new(&def, &unresolved);

        assert_eq!(charset.encodings(), ["CP1252"]);
    }

    #[test]
    fn test_matching_encoding_keeps_caller_spelling() {
        let def = CharsetDef::new("sjis", 2, 0, &["SHIFT_JIS", "Cp943", "WINDOWS-31J"]);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        assert_eq!(charset.matching_encoding(Some("Cp943")), "Cp943");
        assert_eq!(charset.matching_encoding(Some("sjis")), "sjis");
        assert_eq!(charset.matching_encoding(Some("UTF-8")), "SHIFT_JIS");
        assert_eq!(charset.matching_encoding(None), "SHIFT_JIS");
    }

    #[test]
    fn test_min_version() {
        let def = CharsetDef::new("gb18030", 4, 0, &["GB18030"]).since(5, 7, 4);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        assert_eq!(charset.min_version(), ServerVersion::new(5, 7, 4));
        assert!(charset.is_okay_for_version(&ServerVersion::new(5, 7, 4)).unwrap());
        assert!(!charset.is_okay_for_version(&ServerVersion::new(5, 6, 51)).unwrap());
    }

    struct Disconnected;

    impl VersionContext for Disconnected {
        fn version_meets_minimum(&self, _: u16, _: u16, _: u16) -> Result<bool, BoxDynError> {
            Err(io::Error::from(io::ErrorKind::ConnectionReset).into())
        }
    }

    #[test]
    fn test_version_check_failure_is_data_access() {
        let def = CharsetDef::new("utf8", 3, 1, &["UTF-8"]);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        let err = charset.is_okay_for_version(&Disconnected).unwrap_err();
        assert_eq!(err.sql_state(), Some(SqlState::GeneralError));
        assert!(matches!(err, Error::DataAccess { .. }));
    }

    #[test]
    fn test_display() {
        let def = CharsetDef::new("utf8mb4", 4, 0, &["UTF-8"]);
        let charset = MySqlCharset::new(&def, &StandardCodecs);

        assert_eq!(charset.to_string(), "[charsetName=utf8mb4,mblen=4]");
    }
}

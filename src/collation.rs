// MySQL identifies collations, not charsets, by number: the handshake response and every
// column definition carry a collation ID, and the charset is implied by it.
//
// IDs below 256 are assigned mostly sequentially with unexplained gaps. A few slots were never
// given a collation in the servers this table describes; those are still present, as
// `not_implemented` placeholders mapped to `latin1`, so that every ID a server can send in the
// single-byte handshake field resolves to *something*.
//
// Newer servers also use IDs of 256 and above (e.g. `utf8mb4_0900_ai_ci` is 255, the last
// slot, and its siblings live above it); those are outside this table and look up as unknown.

use std::fmt::{self, Display, Formatter};

use crate::charset::MySqlCharset;

/// A MySQL collation ID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "offline", derive(serde::Deserialize, serde::Serialize))]
pub struct Collation(pub u16);

impl Collation {
    /// Default collation of the 3-byte `utf8` charset.
    pub const UTF8_GENERAL_CI: Self = Collation(33);

    /// Most broadly supported UTF-8 collation.
    pub const UTF8MB4_GENERAL_CI: Self = Collation(45);

    /// Collation used for all non-string data.
    pub const BINARY: Self = Collation(63);

    /// Number of collation slots in the catalog; valid IDs are `1..MAP_SIZE`.
    pub const MAP_SIZE: u16 = 255;

    /// Returns `true` if this ID falls into the catalog, i.e. `1..MAP_SIZE`.
    pub const fn is_mapped(self) -> bool {
        self.0 > 0 && self.0 < Self::MAP_SIZE
    }
}

impl From<u16> for Collation {
    fn from(id: u16) -> Self {
        Collation(id)
    }
}

impl Display for Collation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A literal entry of a collation table.
#[derive(Debug, Copy, Clone)]
pub struct CollationDef {
    pub(crate) id: u16,
    pub(crate) name: &'static str,
    pub(crate) priority: u8,
    pub(crate) charset: &'static str,
}

impl CollationDef {
    /// Declares collation `id` of `charset`.
    ///
    /// The collation with the highest `priority` becomes the default collation of its charset;
    /// on a tie the one declared first wins.
    pub const fn new(id: u16, name: &'static str, priority: u8, charset: &'static str) -> Self {
        Self {
            id,
            name,
            priority,
            charset,
        }
    }

    /// Declares an ID that has no collation but must still resolve to a charset.
    pub const fn not_implemented(id: u16) -> Self {
        Self::new(id, "not_implemented", 0, "latin1")
    }
}

/// A MySQL collation and the charset it belongs to.
#[derive(Debug, Clone)]
pub struct MySqlCollation {
    collation: Collation,
    name: &'static str,
    priority: u8,
    // index into `CharsetCatalog::charsets`
    pub(crate) charset: usize,
}

impl MySqlCollation {
    pub(crate) fn new(def: &CollationDef, charset: usize) -> Self {
        Self {
            collation: Collation(def.id),
            name: def.name,
            priority: def.priority,
            charset,
        }
    }

    pub fn id(&self) -> Collation {
        self.collation
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn is_implemented(&self) -> bool {
        self.name != "not_implemented"
    }

    /// Renders this collation together with its charset, e.g.
    /// `[index=45,collationName=utf8mb4_general_ci,charsetName=utf8mb4,clientEncoding=UTF-8]`.
    pub fn display<'a>(&'a self, charset: &'a MySqlCharset) -> impl Display + 'a {
        DisplayCollation {
            collation: self,
            charset,
        }
    }
}

struct DisplayCollation<'a> {
    collation: &'a MySqlCollation,
    charset: &'a MySqlCharset,
}

impl Display for DisplayCollation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[index={},collationName={},charsetName={},clientEncoding={}]",
            self.collation.collation,
            self.collation.name,
            self.charset.name(),
            self.charset.default_encoding()
        )
    }
}

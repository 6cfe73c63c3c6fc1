use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::charset::MySqlCharset;
use crate::collation::{Collation, MySqlCollation};
use crate::error::Result;
use crate::version::VersionContext;

mod builder;
pub mod table;

pub use builder::CatalogBuilder;

static CATALOG: Lazy<CharsetCatalog> = Lazy::new(|| {
    CatalogBuilder::new()
        .build()
        .unwrap_or_else(|err| panic!("BUG: built-in charset table is invalid: {err}"))
});

/// Returns the process-wide catalog built from the built-in tables.
///
/// Shorthand for [`CharsetCatalog::global`].
pub fn catalog() -> &'static CharsetCatalog {
    &CATALOG
}

/// The mapping between MySQL charsets and collations and client encodings.
///
/// A catalog is immutable once built; every lookup is a pure function of its arguments.
#[derive(Debug)]
pub struct CharsetCatalog {
    // in declaration order
    charsets: Vec<MySqlCharset>,
    by_name: HashMap<&'static str, usize>,

    // upper-cased encoding -> charsets, in declaration order
    by_encoding: HashMap<String, SmallVec<[usize; 2]>>,
    multibyte: HashSet<String>,

    // indexed by collation ID, `MAP_SIZE` slots; slot 0 is always `None`
    collations: Vec<Option<MySqlCollation>>,
    default_collations: HashMap<&'static str, Collation>,
    utf8mb4: Vec<Collation>,

    encodings_configured: usize,
}

impl CharsetCatalog {
    /// Returns the process-wide catalog built from the built-in tables.
    ///
    /// The catalog is built on first access.
    ///
    /// # Panics
    ///
    /// On first access, if the built-in tables fail their consistency check.
    pub fn global() -> &'static Self {
        &CATALOG
    }

    pub fn builder() -> CatalogBuilder<'static> {
        CatalogBuilder::new()
    }

    /// Looks up a charset by its MySQL name.
    pub fn charset(&self, name: &str) -> Option<&MySqlCharset> {
        self.by_name.get(name).map(|&index| &self.charsets[index])
    }

    /// All charsets, in declaration order.
    pub fn charsets(&self) -> impl ExactSizeIterator<Item = &MySqlCharset> + '_ {
        self.charsets.iter()
    }

    /// Looks up a collation by ID.
    ///
    /// Returns `None` for `None`, `0`, and IDs of `MAP_SIZE` and above.
    pub fn collation(&self, collation: impl Into<Option<Collation>>) -> Option<&MySqlCollation> {
        let collation = collation.into().filter(|collation| collation.is_mapped())?;

        self.collations.get(usize::from(collation.0))?.as_ref()
    }

    /// Looks up a collation ID by collation name.
    ///
    /// `not_implemented` placeholders are never found.
    pub fn collation_by_name(&self, name: &str) -> Option<Collation> {
        self.collations
            .iter()
            .flatten()
            .find(|collation| collation.is_implemented() && collation.name().eq_ignore_ascii_case(name))
            .map(MySqlCollation::id)
    }

    /// The charset a collation belongs to.
    pub fn charset_of(&self, collation: &MySqlCollation) -> &MySqlCharset {
        &self.charsets[collation.charset]
    }

    /// Finds the MySQL charset to use for a client encoding.
    ///
    /// The encoding name is matched case-insensitively against the canonical names and
    /// aliases of every charset. An encoding that matches nothing is not an error: custom
    /// encodings have no static mapping.
    ///
    /// Without a server version the charset declared first wins. With one, candidates the
    /// server doesn't have are skipped and the remaining ones are compared by minimum version
    /// and priority.
    ///
    /// # Errors
    ///
    /// [`Error::DataAccess`](crate::Error::DataAccess) if the version check fails.
    pub fn charset_for_encoding(
        &self,
        encoding: &str,
        version: Option<&dyn VersionContext>,
    ) -> Result<Option<&str>> {
        let Some(candidates) = self.by_encoding.get(&encoding.to_ascii_uppercase()) else {
            return Ok(None);
        };

        let Some(version) = version else {
            return Ok(candidates.first().map(|&index| self.charsets[index].name()));
        };

        let mut best: Option<&MySqlCharset> = None;

        for &index in candidates {
            let charset = &self.charsets[index];

            // the server is only asked about candidates that would replace the best so far
            if best.map_or(true, |best| supersedes(charset, best))
                && charset.is_okay_for_version(version)?
            {
                best = Some(charset);
            }
        }

        Ok(best.map(MySqlCharset::name))
    }

    /// Finds the default collation of the charset to use for a client encoding.
    ///
    /// Returns `None` if no charset matches or the lookup fails; failures are logged.
    pub fn collation_for_encoding(
        &self,
        encoding: &str,
        version: Option<&dyn VersionContext>,
    ) -> Option<Collation> {
        match self.charset_for_encoding(encoding, version) {
            Ok(charset) => self.default_collation(charset?),

            Err(error) => {
                tracing::debug!(encoding, %error, "unable to resolve a charset for client encoding");

                None
            }
        }
    }

    /// The collation with the highest priority of `charset`.
    pub fn default_collation(&self, charset: &str) -> Option<Collation> {
        self.default_collations.get(charset).copied()
    }

    /// The name of the charset of a collation.
    pub fn charset_for_collation(&self, collation: impl Into<Option<Collation>>) -> Option<&str> {
        self.collation(collation)
            .map(|collation| self.charset_of(collation).name())
    }

    pub fn collation_name(&self, collation: impl Into<Option<Collation>>) -> Option<&str> {
        self.collation(collation).map(MySqlCollation::name)
    }

    /// The client encoding for data in a collation.
    ///
    /// See [`client_encoding_for_charset`](Self::client_encoding_for_charset) for how
    /// `preferred` is used.
    pub fn client_encoding_for_collation<'a>(
        &'a self,
        collation: impl Into<Option<Collation>>,
        preferred: Option<&'a str>,
    ) -> Option<&'a str> {
        self.collation(collation)
            .map(|collation| self.charset_of(collation).matching_encoding(preferred))
    }

    /// The client encoding for data in a MySQL charset.
    ///
    /// * If the charset is unknown, `preferred` is returned as-is; it may be a custom charset.
    /// * If `preferred` names one of the encodings of the charset it is returned as-is,
    ///   keeping the caller's spelling.
    /// * Otherwise the default encoding of the charset is returned.
    pub fn client_encoding_for_charset<'a>(
        &'a self,
        charset: &str,
        preferred: Option<&'a str>,
    ) -> Option<&'a str> {
        match self.charset(charset) {
            Some(charset) => Some(charset.matching_encoding(preferred)),
            None => preferred,
        }
    }

    /// Returns `true` if `encoding` belongs to a charset with more than one byte per character.
    pub fn is_multibyte(&self, encoding: &str) -> bool {
        self.multibyte.contains(&encoding.to_ascii_uppercase())
    }

    /// The maximum number of bytes per character of a charset.
    pub fn max_len(&self, charset: &str) -> Option<u8> {
        self.charset(charset).map(MySqlCharset::max_len)
    }

    /// The client encoding for error messages sent by the server.
    ///
    /// Since 5.5 the server composes error messages in UTF-8 and sends them in the charset
    /// named by `character_set_results`. Until that is known, or if it is unknown to the
    /// catalog, this is `UTF-8`.
    pub fn error_message_encoding<'a>(&'a self, results_charset: Option<&str>) -> &'a str {
        results_charset
            .and_then(|charset| self.client_encoding_for_charset(charset, None))
            .unwrap_or("UTF-8")
    }

    /// IDs of all collations of the `utf8mb4` charset, in ascending order.
    pub fn utf8mb4_collations(&self) -> &[Collation] {
        &self.utf8mb4
    }

    pub fn is_utf8mb4(&self, collation: Collation) -> bool {
        self.utf8mb4.binary_search(&collation).is_ok()
    }

    /// The number of (charset, encoding) pairs in this catalog.
    pub fn encodings_configured(&self) -> usize {
        self.encodings_configured
    }
}

// Not lexicographic: a candidate replaces the best so far if any one of its fields is greater.
fn supersedes(candidate: &MySqlCharset, best: &MySqlCharset) -> bool {
    let (c, b) = (candidate.min_version(), best.min_version());

    b.major < c.major || b.minor < c.minor || b.patch < c.patch || best.priority() < candidate.priority()
}

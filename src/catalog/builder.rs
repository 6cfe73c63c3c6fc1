use std::collections::HashMap;

use crate::catalog::{table, CharsetCatalog};
use crate::charset::{CharsetDef, MySqlCharset};
use crate::codec::{CodecRegistry, StandardCodecs};
use crate::collation::{Collation, CollationDef, MySqlCollation};
use crate::error::Result;

/// Builds a [`CharsetCatalog`] from literal tables.
///
/// The process-wide catalog ([`CharsetCatalog::global`]) is built from the tables in
/// [`table`](crate::table) with [`StandardCodecs`]. Use a builder to describe a server with
/// a different catalog or to resolve encodings through another registry.
///
/// ```rust
/// use sqlx_mysql_charset::CharsetCatalog;
///
/// let catalog = CharsetCatalog::builder().build()?;
/// assert_eq!(catalog.charset_for_encoding("Cp1251", None)?, Some("cp1251"));
/// # Ok::<(), sqlx_mysql_charset::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct CatalogBuilder<'a> {
    charsets: &'a [CharsetDef],
    collations: &'a [CollationDef],
    registry: &'a dyn CodecRegistry,
}

impl Default for CatalogBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder<'static> {
    pub fn new() -> Self {
        Self {
            charsets: table::CHARSETS,
            collations: table::COLLATIONS,
            registry: &StandardCodecs,
        }
    }
}

impl<'a> CatalogBuilder<'a> {
    /// Sets the charset table.
    ///
    /// Declaration order decides which charset an encoding resolves to when no server
    /// version is known.
    pub fn charsets(mut self, charsets: &'a [CharsetDef]) -> Self {
        self.charsets = charsets;
        self
    }

    /// Sets the collation table.
    ///
    /// Every ID in `1..MAP_SIZE` must be declared exactly once and must refer to a charset
    /// of the charset table.
    pub fn collations(mut self, collations: &'a [CollationDef]) -> Self {
        self.collations = collations;
        self
    }

    /// Sets the registry used to resolve the encodings of each charset.
    pub fn registry(mut self, registry: &'a dyn CodecRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Resolves all encodings and derives the lookup structures of the catalog.
    ///
    /// Fails with [`Error::Integrity`](crate::Error::Integrity) if a charset is declared twice,
    /// a collation ID is out of range, declared twice or missing, or a collation refers to
    /// an unknown charset.
    pub fn build(self) -> Result<CharsetCatalog> {
        let mut catalog = CharsetCatalog {
            charsets: Vec::with_capacity(self.charsets.len()),
            by_name: HashMap::with_capacity(self.charsets.len()),
            by_encoding: HashMap::new(),
            multibyte: Default::default(),
            collations: vec![None; usize::from(Collation::MAP_SIZE)],
            default_collations: HashMap::new(),
            utf8mb4: Vec::new(),
            encodings_configured: 0,
        };

        for def in self.charsets {
            let charset = MySqlCharset::new(def, self.registry);
            let index = catalog.charsets.len();

            if catalog.by_name.insert(charset.name(), index).is_some() {
                return Err(err_integrity!(
                    "charset {:?} is declared more than once",
                    charset.name()
                ));
            }

            catalog.encodings_configured += charset.encodings().len();

            for encoding in charset.encodings() {
                catalog
                    .by_encoding
                    .entry(encoding.clone())
                    .or_default()
                    .push(index);

                if charset.is_multibyte() {
                    catalog.multibyte.insert(encoding.clone());
                }
            }

            catalog.charsets.push(charset);
        }

        for def in self.collations {
            if !Collation(def.id).is_mapped() {
                return Err(err_integrity!(
                    "collation {:?} has ID {}, outside of 1..{}",
                    def.name,
                    def.id,
                    Collation::MAP_SIZE
                ));
            }

            let &charset = catalog.by_name.get(def.charset).ok_or_else(|| {
                err_integrity!(
                    "collation {:?} ({}) refers to unknown charset {:?}",
                    def.name,
                    def.id,
                    def.charset
                )
            })?;

            let slot = &mut catalog.collations[usize::from(def.id)];

            if slot.is_some() {
                return Err(err_integrity!("collation ID {} is declared more than once", def.id));
            }

            *slot = Some(MySqlCollation::new(def, charset));
        }

        let mut default_priorities: HashMap<&'static str, u8> = HashMap::new();

        for (id, slot) in catalog.collations.iter().enumerate().skip(1) {
            let Some(collation) = slot else {
                return Err(err_integrity!("no collation is declared for ID {}", id));
            };

            let charset = catalog.charsets[collation.charset].name();

            // ties go to the collation with the lower ID
            match default_priorities.get(charset) {
                Some(&priority) if priority >= collation.priority() => {}

                _ => {
                    default_priorities.insert(charset, collation.priority());
                    catalog.default_collations.insert(charset, collation.id());
                }
            }

            if charset == "utf8mb4" {
                catalog.utf8mb4.push(collation.id());
            }
        }

        tracing::debug!(
            charsets = catalog.charsets.len(),
            encodings = catalog.encodings_configured,
            multibyte_encodings = catalog.multibyte.len(),
            "built charset catalog"
        );

        Ok(catalog)
    }
}

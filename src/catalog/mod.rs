//! The 64-category catalog and the trigram-pair → category lookup.
//!
//! # Canonical table
//!
//! [`lookup`] is the one table every scorer in this crate uses. It consults a
//! sparse dictionary of well-known pairs (the eight doubled trigrams plus
//! 泰/否/既済/未済) and otherwise falls back to
//! `(rank(upper) − 1) · 8 + rank(lower)`. The fallback is total but ignores
//! the catalog's own trigram attribution: `get_category(lookup(u, l))` may
//! carry a different (upper, lower) pair. The separately declared
//! [`AUTHENTIC_MATRIX`] disagrees with both and is read only by the
//! energy-balance optimizer.
//!
//! # Invariants
//!
//! - `lookup` is total over all 64 ordered pairs and always returns 1..=64.
//! - A [`Catalog`] always holds exactly 64 records, ids 1..=64.
//! - Catalogs are immutable once built. Reloading goes through
//!   [`ReferenceHandle::swap`], which replaces the whole value.

mod data;
mod reference;

pub use data::AUTHENTIC_MATRIX;
pub use reference::{ReferenceData, ReferenceHandle};
#[cfg(feature = "serde")]
pub(crate) use reference::keywords_from_list_or_csv;

use tracing::warn;

use crate::error::ScoringError;
use crate::trigram::Trigram;

/// Number of categories.
pub const CATEGORY_COUNT: usize = 64;

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Hand-authored entries checked before the arithmetic fallback.
fn sparse_entry(upper: Trigram, lower: Trigram) -> Option<u8> {
    use Trigram::*;
    let id = match (upper, lower) {
        (Qian, Qian) => 1,
        (Kun, Kun) => 2,
        (Kan, Kan) => 29,
        (Li, Li) => 30,
        (Zhen, Zhen) => 51,
        (Gen, Gen) => 52,
        (Xun, Xun) => 57,
        (Dui, Dui) => 58,
        (Kun, Qian) => 11,
        (Qian, Kun) => 12,
        (Kan, Li) => 63,
        (Li, Kan) => 64,
        _ => return None,
    };
    Some(id)
}

/// Arithmetic fallback: `(rank(upper) − 1) · 8 + rank(lower)`.
#[inline]
pub const fn fallback_id(upper: Trigram, lower: Trigram) -> u8 {
    (upper.rank() - 1) * 8 + lower.rank()
}

/// Map an ordered (upper, lower) trigram pair to a category id in 1..=64.
pub fn lookup(upper: Trigram, lower: Trigram) -> u8 {
    sparse_entry(upper, lower).unwrap_or_else(|| fallback_id(upper, lower))
}

/// Category id from the optimizer's [`AUTHENTIC_MATRIX`].
pub fn authentic_id(upper: Trigram, lower: Trigram) -> u8 {
    AUTHENTIC_MATRIX[upper.index()][lower.index()]
}

// ─── Category ────────────────────────────────────────────────────────────────

/// One catalog record ("hexagram").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    /// Id in 1..=64.
    pub id: u8,
    /// Japanese name, e.g. `"乾為天"`.
    pub name: String,
    /// Kana reading.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reading: Option<String>,
    /// Upper trigram of the record itself.
    pub upper: Trigram,
    /// Lower trigram of the record itself.
    pub lower: Trigram,
    /// Keywords. Accepts either a list or a comma-joined string when loaded from JSON.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "reference::keywords_from_list_or_csv")
    )]
    pub keywords: Vec<String>,
    /// One-line catchphrase.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tagline: Option<String>,
    /// Longer description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl From<&data::CategoryRow> for Category {
    fn from(row: &data::CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name.to_owned(),
            reading: Some(row.reading.to_owned()),
            upper: row.upper,
            lower: row.lower,
            keywords: row.keywords.iter().map(|k| (*k).to_owned()).collect(),
            tagline: Some(row.tagline.to_owned()),
            description: Some(row.description.to_owned()),
        }
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The complete, immutable set of 64 categories.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    // Index is id − 1.
    records: Vec<Category>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            records: data::CATEGORY_ROWS.iter().map(Category::from).collect(),
        }
    }

    /// Build a catalog from arbitrary records.
    ///
    /// Every id 1..=64 must appear exactly once; out-of-range ids are rejected.
    pub fn from_records(records: Vec<Category>) -> Result<Self, ScoringError> {
        let mut slots: Vec<Option<Category>> = vec![None; CATEGORY_COUNT];
        for record in records {
            let id = record.id;
            if !(1..=CATEGORY_COUNT as u8).contains(&id) {
                return Err(ScoringError::InvalidCategoryId(id));
            }
            let slot = &mut slots[usize::from(id - 1)];
            if slot.is_some() {
                return Err(ScoringError::DuplicateCategory(id));
            }
            *slot = Some(record);
        }
        let found = slots.iter().filter(|s| s.is_some()).count();
        if found != CATEGORY_COUNT {
            return Err(ScoringError::IncompleteCatalog { found });
        }
        Ok(Self {
            records: slots.into_iter().flatten().collect(),
        })
    }

    /// Parse a JSON array of categories.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let records: Vec<Category> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Strict accessor.
    pub fn try_get(&self, id: u8) -> Result<&Category, ScoringError> {
        match id {
            1..=64 => self
                .records
                .get(usize::from(id - 1))
                .ok_or(ScoringError::InvalidCategoryId(id)),
            _ => Err(ScoringError::InvalidCategoryId(id)),
        }
    }

    /// Record for `id`, defaulting to record #1 if the id is unknown.
    pub fn get_category(&self, id: u8) -> &Category {
        match self.try_get(id) {
            Ok(c) => c,
            Err(_) => {
                warn!(category_id = id, "unknown category id, using #1");
                &self.records[0]
            }
        }
    }

    /// Record whose own trigrams are (upper, lower), if any.
    pub fn find_by_trigrams(&self, upper: Trigram, lower: Trigram) -> Option<&Category> {
        self.records.iter().find(|c| c.upper == upper && c.lower == lower)
    }

    /// All records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.records.iter()
    }

    /// Always 64.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_64_ordered_records() {
        let c = Catalog::builtin();
        assert_eq!(c.len(), 64);
        for (i, rec) in c.iter().enumerate() {
            assert_eq!(usize::from(rec.id), i + 1);
            assert_eq!(rec.keywords.len(), 3, "category {}", rec.id);
        }
    }

    #[test]
    fn test_sparse_entries_agree_with_catalog() {
        let c = Catalog::builtin();
        for u in Trigram::ALL {
            for l in Trigram::ALL {
                if let Some(id) = sparse_entry(u, l) {
                    let rec = c.get_category(id);
                    assert_eq!((rec.upper, rec.lower), (u, l), "sparse entry {}", id);
                }
            }
        }
    }

    #[test]
    fn test_fallback_formula() {
        assert_eq!(fallback_id(Trigram::Qian, Trigram::Qian), 1);
        assert_eq!(fallback_id(Trigram::Kun, Trigram::Kun), 64);
        assert_eq!(lookup(Trigram::Qian, Trigram::Dui), 2);
        assert_eq!(lookup(Trigram::Kun, Trigram::Kun), 2, "dictionary wins");
    }

    #[test]
    fn test_unknown_id_defaults_to_first() {
        let c = Catalog::builtin();
        assert_eq!(c.get_category(0).id, 1);
        assert_eq!(c.get_category(65).id, 1);
        assert_eq!(c.try_get(65), Err(ScoringError::InvalidCategoryId(65)));
    }

    #[test]
    fn test_from_records_rejects_incomplete() {
        let mut recs: Vec<Category> = Catalog::builtin().iter().cloned().collect();
        recs.pop();
        assert_eq!(
            Catalog::from_records(recs.clone()),
            Err(ScoringError::IncompleteCatalog { found: 63 })
        );
        recs.push(Category { id: 99, ..recs[0].clone() });
        assert_eq!(Catalog::from_records(recs), Err(ScoringError::InvalidCategoryId(99)));
    }

    #[test]
    fn test_from_records_rejects_duplicate_id() {
        let mut recs: Vec<Category> = Catalog::builtin().iter().cloned().collect();
        let copy = Category { name: "重複".to_owned(), ..recs[9].clone() };
        recs.push(copy);
        assert_eq!(recs.len(), 65);
        assert_eq!(Catalog::from_records(recs), Err(ScoringError::DuplicateCategory(10)));
    }

    #[test]
    fn test_catalog_trigram_pairs_are_a_bijection() {
        let c = Catalog::builtin();
        for u in Trigram::ALL {
            for l in Trigram::ALL {
                assert!(c.find_by_trigrams(u, l).is_some(), "{u}{l}");
            }
        }
    }
}

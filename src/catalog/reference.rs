//! Shared immutable reference data and its reload handle.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::Catalog;
use crate::analytics::AnalyticsStore;
#[cfg(feature = "serde")]
use crate::error::ScoringError;

/// Everything the scorers read besides their direct inputs.
///
/// Built once at start-up and shared by `Arc`. Never mutated.
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    /// The 64-category catalog.
    pub catalog: Catalog,
    /// Optional per-category analytics; may be empty.
    pub analytics: AnalyticsStore,
}

impl ReferenceData {
    /// Built-in catalog with no analytics.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in catalog plus the given analytics.
    pub fn with_analytics(analytics: AnalyticsStore) -> Self {
        Self {
            catalog: Catalog::builtin(),
            analytics,
        }
    }

    /// Wrap for sharing.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Swappable pointer to the current [`ReferenceData`].
///
/// Readers take a cheap `Arc` snapshot with [`ReferenceHandle::load`] and keep
/// using it for a whole computation even if a reload lands mid-way. Writers
/// replace the whole value; entries are never edited in place.
#[derive(Debug)]
pub struct ReferenceHandle {
    current: RwLock<Arc<ReferenceData>>,
}

impl ReferenceHandle {
    /// Handle pointing at `data`.
    pub fn new(data: ReferenceData) -> Self {
        Self {
            current: RwLock::new(Arc::new(data)),
        }
    }

    /// Snapshot of the current data.
    pub fn load(&self) -> Arc<ReferenceData> {
        // A poisoned lock still holds a complete Arc; the swap is a single store.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the current data, returning the previous snapshot.
    pub fn swap(&self, next: ReferenceData) -> Arc<ReferenceData> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        debug!(
            analytics_categories = next.analytics.len(),
            "reference data swapped"
        );
        core::mem::replace(&mut *guard, Arc::new(next))
    }

    /// Parse and swap in a new catalog from JSON, keeping current analytics.
    ///
    /// On error the current data stays in place.
    #[cfg(feature = "serde")]
    pub fn reload_catalog_json(&self, json: &str) -> Result<(), ScoringError> {
        match Catalog::from_json(json) {
            Ok(catalog) => {
                let analytics = self.load().analytics.clone();
                self.swap(ReferenceData { catalog, analytics });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog reload rejected");
                Err(e)
            }
        }
    }
}

impl Default for ReferenceHandle {
    fn default() -> Self {
        Self::new(ReferenceData::builtin())
    }
}

/// Accept keywords as either a JSON list or one comma-joined string.
#[cfg(feature = "serde")]
pub(crate) fn keywords_from_list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match <Repr as serde::Deserialize>::deserialize(deserializer)? {
        Repr::List(v) => v,
        Repr::Joined(s) => s
            .split([',', '、'])
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_owned)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_replaces_whole_value() {
        let handle = ReferenceHandle::default();
        let before = handle.load();
        assert!(before.analytics.is_empty());

        let analytics = AnalyticsStore::from_records(vec![crate::analytics::LineRecord {
            category_id: 1,
            position: 1,
            keywords: vec![],
            interpretation: String::new(),
            basic: 50.0,
            potential: 50.0,
            stability: 50.0,
            risk: 0.0,
            stance: crate::analytics::Stance::Neutral,
            variability: 50.0,
            overall: 50.0,
        }])
        .unwrap();
        let old = handle.swap(ReferenceData::with_analytics(analytics));

        assert!(Arc::ptr_eq(&before, &old), "swap returns the old snapshot");
        assert!(before.analytics.is_empty(), "old snapshot is untouched");
        assert_eq!(handle.load().analytics.len(), 1);
    }
}

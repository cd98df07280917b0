use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Synthetic asset-class label the backend uses for "every asset class".
///
/// It appears as the first key of the totals map (holding the grand total)
/// and, as a filter, means "no filter".
pub const ALL_ASSET_CLASSES: &str = "All";

/// Summed commitment amount per asset class for one investor.
///
/// Keys are unique. Iteration follows the order the backend sent them in,
/// so rendering is deterministic. If a payload repeats a key, the last value
/// wins and the key keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetClassTotals(IndexMap<String, f64>);

impl AssetClassTotals {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert or replace the total for `asset_class`.
    pub fn insert(&mut self, asset_class: impl Into<String>, total: f64) {
        self.0.insert(asset_class.into(), total);
    }

    #[must_use]
    pub fn get(&self, asset_class: &str) -> Option<f64> {
        self.0.get(asset_class).copied()
    }

    #[must_use]
    pub fn contains(&self, asset_class: &str) -> bool {
        self.0.contains_key(asset_class)
    }

    /// `(label, total)` pairs in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Asset-class labels in backend order, including `"All"` if present.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The grand total: the `"All"` entry when the backend sent one,
    /// otherwise the sum of every class.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.get(ALL_ASSET_CLASSES).unwrap_or_else(|| {
            self.0
                .iter()
                .filter(|(k, _)| k.as_str() != ALL_ASSET_CLASSES)
                .map(|(_, v)| v)
                .sum()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AssetClassTotals {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (k, v) in iter {
            totals.insert(k, v);
        }
        totals
    }
}

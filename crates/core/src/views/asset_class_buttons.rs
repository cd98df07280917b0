use std::fmt;

use crate::formatting::format_number;
use crate::models::asset_class::{AssetClassTotals, ALL_ASSET_CLASSES};

/// One filter button: the asset class and its formatted total.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetClassButton {
    pub label: String,
    pub caption: String,
    pub active: bool,
}

/// One button per asset class, in the order the backend sent the totals.
pub struct AssetClassButtons {
    buttons: Vec<AssetClassButton>,
}

impl AssetClassButtons {
    /// `active_asset_class` is the current filter; `None` marks the
    /// `"All"` button (if present) as active.
    pub fn new(totals: &AssetClassTotals, active_asset_class: Option<&str>) -> Self {
        let active = active_asset_class.unwrap_or(ALL_ASSET_CLASSES);
        let buttons = totals
            .iter()
            .map(|(label, total)| AssetClassButton {
                label: label.to_string(),
                caption: format_number(total),
                active: label == active,
            })
            .collect();
        Self { buttons }
    }

    pub fn buttons(&self) -> &[AssetClassButton] {
        &self.buttons
    }

    /// The label a click on button `index` filters by.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.buttons.get(index).map(|b| b.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl fmt::Display for AssetClassButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .buttons
            .iter()
            .map(|b| {
                let marker = if b.active { "*" } else { "" };
                format!("[{marker}{} {}]", b.label, b.caption)
            })
            .collect();
        writeln!(f, "{}", rendered.join(" "))
    }
}

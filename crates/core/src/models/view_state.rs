use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset_class::AssetClassTotals;
use super::commitment::Commitment;
use super::investor::{Investor, InvestorId};

/// A fetched value tagged with the investor it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loaded<T> {
    pub investor_id: InvestorId,
    pub data: T,
}

/// Which backend call a recorded failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchKind {
    Investors,
    AssetClassTotals,
    Commitments,
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchKind::Investors => write!(f, "investors"),
            FetchKind::AssetClassTotals => write!(f, "asset class totals"),
            FetchKind::Commitments => write!(f, "commitments"),
        }
    }
}

/// A swallowed fetch error, kept so callers can observe what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: FetchKind,
    /// Investor the request was made for (`None` for the investor list).
    pub investor_id: Option<InvestorId>,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Everything the views render from.
///
/// `commitments` and `asset_class_totals` are independent slots. A failed
/// fetch leaves its slot untouched, so a slot may still hold data for a
/// previously selected investor; the `current_*` accessors hide such data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub investors: Vec<Investor>,
    pub selected_investor: Option<Investor>,
    /// Active asset-class filter; `None` means all classes.
    pub active_asset_class: Option<String>,
    pub commitments: Option<Loaded<Vec<Commitment>>>,
    pub asset_class_totals: Option<Loaded<AssetClassTotals>>,
    pub failures: Vec<FetchFailure>,
}

impl ViewState {
    #[must_use]
    pub fn selected_investor_id(&self) -> Option<InvestorId> {
        self.selected_investor.as_ref().map(|i| i.id)
    }

    /// Commitments for the selected investor, if they have been loaded.
    #[must_use]
    pub fn current_commitments(&self) -> Option<&[Commitment]> {
        let selected = self.selected_investor_id()?;
        self.commitments
            .as_ref()
            .filter(|loaded| loaded.investor_id == selected)
            .map(|loaded| loaded.data.as_slice())
    }

    /// Asset-class totals for the selected investor, if they have been loaded.
    #[must_use]
    pub fn current_asset_class_totals(&self) -> Option<&AssetClassTotals> {
        let selected = self.selected_investor_id()?;
        self.asset_class_totals
            .as_ref()
            .filter(|loaded| loaded.investor_id == selected)
            .map(|loaded| &loaded.data)
    }

    #[must_use]
    pub fn is_selected(&self, investor: &Investor) -> bool {
        self.selected_investor_id() == Some(investor.id)
    }
}

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset_class::AssetClassTotals;
use crate::models::commitment::Commitment;
use crate::models::investor::{Investor, InvestorId};

/// Read-only access to the commitments backend.
///
/// Implemented by [`HttpCommitmentsApi`](super::http::HttpCommitmentsApi).
/// Every call is a fresh round trip: no retries, no caching.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CommitmentsApi: Send + Sync {
    /// Human-readable name of this backend (for logs).
    fn name(&self) -> &str;

    /// All investors known to the backend.
    async fn list_investors(&self) -> Result<Vec<Investor>, CoreError>;

    /// Summed commitment amount per asset class for one investor.
    async fn get_asset_class_totals(
        &self,
        investor_id: InvestorId,
    ) -> Result<AssetClassTotals, CoreError>;

    /// Commitments for one investor. With `asset_class`, only commitments
    /// whose label equals it exactly (case-sensitive) are returned.
    async fn get_commitments(
        &self,
        investor_id: InvestorId,
        asset_class: Option<&str>,
    ) -> Result<Vec<Commitment>, CoreError>;
}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::asset_class::AssetClassTotals;
use crate::models::commitment::Commitment;
use crate::models::investor::{Investor, InvestorId};
use crate::models::settings::ClientSettings;
use super::traits::CommitmentsApi;

/// Query parameter carrying the asset-class filter.
pub const ASSET_CLASS_PARAM: &str = "asset_class";

/// JSON-over-HTTP client for the commitments backend.
///
/// - `GET /investors`
/// - `GET /investors/{id}/commitments/total_by_asset_class`
/// - `GET /investors/{id}/commitments?asset_class={label}`
///
/// A 404 becomes [`CoreError::NotFound`], any other non-2xx status or
/// transport failure [`CoreError::Network`], and a body of the wrong shape
/// [`CoreError::Decode`].
pub struct HttpCommitmentsApi {
    client: Client,
    base_url: String,
}

impl HttpCommitmentsApi {
    /// Build a client for the backend described by `settings`.
    pub fn new(settings: &ClientSettings) -> Result<Self, CoreError> {
        let base_url = settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        Ok(Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url,
        })
    }

    /// Normalised base address (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn investors_url(&self) -> String {
        format!("{}/investors", self.base_url)
    }

    pub fn asset_class_totals_url(&self, investor_id: InvestorId) -> String {
        format!(
            "{}/investors/{investor_id}/commitments/total_by_asset_class",
            self.base_url
        )
    }

    /// Commitments endpoint without the query string; the filter is
    /// attached (URL-encoded) by reqwest.
    pub fn commitments_url(&self, investor_id: InvestorId) -> String {
        format!("{}/investors/{investor_id}/commitments", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Option<(&str, &str)>,
        what: &str,
    ) -> Result<T, CoreError> {
        log::debug!("GET {url} {query:?}");

        let mut request = self.client.get(url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(format!("{what} at {url}")));
        }
        if !status.is_success() {
            return Err(CoreError::Network(format!(
                "{what}: backend answered {status} for {url}"
            )));
        }

        let body = response.text().await?;
        decode(&body, what)
    }
}

// ── Backend response envelopes ──────────────────────────────────────

#[derive(Deserialize)]
struct InvestorsResponse {
    investors: Vec<Investor>,
}

#[derive(Deserialize)]
struct AssetClassTotalsResponse {
    total_by_asset_class: AssetClassTotals,
}

#[derive(Deserialize)]
struct CommitmentsResponse {
    commitments: Vec<Commitment>,
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, CoreError> {
    serde_json::from_str(body)
        .map_err(|e| CoreError::Decode(format!("Failed to parse {what}: {e}")))
}

/// Decode a `GET /investors` body.
pub fn parse_investors(body: &str) -> Result<Vec<Investor>, CoreError> {
    decode::<InvestorsResponse>(body, "investors").map(|r| r.investors)
}

/// Decode a `GET /investors/{id}/commitments/total_by_asset_class` body.
pub fn parse_asset_class_totals(body: &str) -> Result<AssetClassTotals, CoreError> {
    decode::<AssetClassTotalsResponse>(body, "asset class totals").map(|r| r.total_by_asset_class)
}

/// Decode a `GET /investors/{id}/commitments` body.
pub fn parse_commitments(body: &str) -> Result<Vec<Commitment>, CoreError> {
    decode::<CommitmentsResponse>(body, "commitments").map(|r| r.commitments)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CommitmentsApi for HttpCommitmentsApi {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn list_investors(&self) -> Result<Vec<Investor>, CoreError> {
        let url = self.investors_url();
        let resp: InvestorsResponse = self.fetch(&url, None, "investors").await?;
        Ok(resp.investors)
    }

    async fn get_asset_class_totals(
        &self,
        investor_id: InvestorId,
    ) -> Result<AssetClassTotals, CoreError> {
        let url = self.asset_class_totals_url(investor_id);
        let what = format!("asset class totals for investor {investor_id}");
        let resp: AssetClassTotalsResponse = self.fetch(&url, None, &what).await?;
        Ok(resp.total_by_asset_class)
    }

    async fn get_commitments(
        &self,
        investor_id: InvestorId,
        asset_class: Option<&str>,
    ) -> Result<Vec<Commitment>, CoreError> {
        let url = self.commitments_url(investor_id);
        let what = match asset_class {
            Some(label) => format!("{label} commitments for investor {investor_id}"),
            None => format!("commitments for investor {investor_id}"),
        };
        let query = asset_class.map(|label| (ASSET_CLASS_PARAM, label));
        let resp: CommitmentsResponse = self.fetch(&url, query, &what).await?;
        Ok(resp.commitments)
    }
}

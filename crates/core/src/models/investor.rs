use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format of `date_added` as stored by the backend.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d";

/// Backend-assigned investor identifier.
pub type InvestorId = i64;

/// An investor as returned by `GET /investors`.
///
/// Immutable once fetched. `total_commitment` is precomputed by the backend
/// as the sum of all the investor's commitments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: InvestorId,

    pub name: String,

    /// Investor category (e.g. "fund manager", "bank"). Sent as `type` on the wire.
    #[serde(rename = "type")]
    pub investor_type: String,

    /// Date the investor was added, kept verbatim from the backend.
    pub date_added: String,

    pub country: String,

    pub total_commitment: f64,
}

impl Investor {
    /// Parse `date_added` as a calendar date.
    /// Returns `None` when the backend sent something other than `YYYY-MM-DD`.
    #[must_use]
    pub fn date_added_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_added.trim(), DATE_ADDED_FORMAT).ok()
    }
}

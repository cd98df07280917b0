use serde::{Deserialize, Serialize};

/// A single capital allocation by an investor to an asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    pub id: i64,

    /// Asset-class label, e.g. "Infrastructure" or "Private Equity".
    pub asset_class: String,

    pub amount: f64,

    /// ISO currency code (e.g. "GBP").
    pub currency: String,
}

use std::fmt;

use crate::formatting::format_number;
use crate::models::commitment::Commitment;

pub const COMMITMENT_HEADERS: [&str; 4] = ["Id", "Asset Class", "Amount", "Currency"];

#[derive(Debug, Clone, PartialEq)]
pub struct CommitmentRow {
    pub id: i64,
    pub asset_class: String,
    pub amount: String,
    pub currency: String,
}

/// Commitments of the selected investor. Renders headers only when nothing
/// has been loaded yet.
pub struct CommitmentsTable {
    rows: Vec<CommitmentRow>,
}

impl CommitmentsTable {
    pub fn new(commitments: Option<&[Commitment]>) -> Self {
        let rows = commitments
            .unwrap_or_default()
            .iter()
            .map(|c| CommitmentRow {
                id: c.id,
                asset_class: c.asset_class.clone(),
                amount: format_number(c.amount),
                currency: c.currency.clone(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[CommitmentRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for CommitmentsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<(bool, Vec<String>)> = self
            .rows
            .iter()
            .map(|r| {
                (
                    false,
                    vec![
                        r.id.to_string(),
                        r.asset_class.clone(),
                        r.amount.clone(),
                        r.currency.clone(),
                    ],
                )
            })
            .collect();
        super::write_table(f, &COMMITMENT_HEADERS, &rows)
    }
}

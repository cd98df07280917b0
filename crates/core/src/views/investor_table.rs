use std::fmt;

use crate::formatting::{capitalize_words, format_number};
use crate::models::investor::{Investor, InvestorId};
use crate::models::view_state::ViewState;

pub const INVESTOR_HEADERS: [&str; 6] = [
    "Id",
    "Name",
    "Type",
    "Date Added",
    "Country",
    "Total Commitment",
];

/// One displayed investor.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorRow {
    pub id: InvestorId,
    pub name: String,
    pub investor_type: String,
    pub date_added: String,
    pub country: String,
    pub total_commitment: String,
    pub selected: bool,
}

impl InvestorRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.investor_type.clone(),
            self.date_added.clone(),
            self.country.clone(),
            self.total_commitment.clone(),
        ]
    }
}

/// The investor list, with the selected investor highlighted.
pub struct InvestorTable<'a> {
    investors: &'a [Investor],
    rows: Vec<InvestorRow>,
}

impl<'a> InvestorTable<'a> {
    pub fn new(state: &'a ViewState) -> Self {
        let rows = state
            .investors
            .iter()
            .map(|investor| InvestorRow {
                id: investor.id,
                name: capitalize_words(&investor.name),
                investor_type: capitalize_words(&investor.investor_type),
                date_added: investor.date_added.clone(),
                country: investor.country.clone(),
                total_commitment: format_number(investor.total_commitment),
                selected: state.is_selected(investor),
            })
            .collect();
        Self {
            investors: &state.investors,
            rows,
        }
    }

    pub fn rows(&self) -> &[InvestorRow] {
        &self.rows
    }

    /// The investor a click on row `row` selects.
    pub fn investor_at(&self, row: usize) -> Option<&'a Investor> {
        self.investors.get(row)
    }
}

impl fmt::Display for InvestorTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<(bool, Vec<String>)> =
            self.rows.iter().map(|r| (r.selected, r.cells())).collect();
        super::write_table(f, &INVESTOR_HEADERS, &rows)
    }
}

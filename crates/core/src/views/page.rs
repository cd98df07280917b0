use std::fmt;

use crate::formatting::capitalize_words;
use crate::models::investor::Investor;
use crate::models::view_state::ViewState;

use super::asset_class_buttons::AssetClassButtons;
use super::commitments_table::CommitmentsTable;
use super::investor_table::InvestorTable;

pub const PAGE_TITLE: &str = "Investors";

/// The commitments panel, shown once an investor is selected and its
/// asset-class totals have arrived.
pub struct CommitmentsSection<'a> {
    pub investor: &'a Investor,
    pub buttons: AssetClassButtons,
    pub table: CommitmentsTable,
}

impl CommitmentsSection<'_> {
    /// Uses the same capitalised name as the investor table.
    pub fn heading(&self) -> String {
        format!("Commitments for {}", capitalize_words(&self.investor.name))
    }
}

/// The whole screen: investor list plus the optional commitments panel.
pub struct Page<'a> {
    pub investors: InvestorTable<'a>,
    pub commitments: Option<CommitmentsSection<'a>>,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a ViewState) -> Self {
        let commitments = match (
            state.selected_investor.as_ref(),
            state.current_asset_class_totals(),
        ) {
            (Some(investor), Some(totals)) => Some(CommitmentsSection {
                investor,
                buttons: AssetClassButtons::new(totals, state.active_asset_class.as_deref()),
                table: CommitmentsTable::new(state.current_commitments()),
            }),
            _ => None,
        };
        Self {
            investors: InvestorTable::new(state),
            commitments,
        }
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PAGE_TITLE}")?;
        writeln!(f)?;
        write!(f, "{}", self.investors)?;
        if let Some(section) = &self.commitments {
            writeln!(f)?;
            writeln!(f, "{}", section.heading())?;
            writeln!(f)?;
            write!(f, "{}", section.buttons)?;
            writeln!(f)?;
            write!(f, "{}", section.table)?;
        }
        Ok(())
    }
}

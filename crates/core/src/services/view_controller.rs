use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::api::traits::CommitmentsApi;
use crate::errors::CoreError;
use crate::models::asset_class::{AssetClassTotals, ALL_ASSET_CLASSES};
use crate::models::commitment::Commitment;
use crate::models::investor::{Investor, InvestorId};
use crate::models::view_state::{FetchFailure, FetchKind, Loaded, ViewState};

/// Upper bound on [`ViewState::failures`]; the oldest entries are evicted first.
pub const MAX_RECORDED_FAILURES: usize = 50;

/// Owns the view state and drives the backend in response to user actions.
///
/// Transitions take `&self`, so a new selection can start while an older one
/// is still waiting on the network. The state lock is only held for
/// synchronous reads and writes, never across an `.await`.
///
/// Commitments and asset-class totals are independent slots, each with its
/// own request generation. A response is applied only if no newer request
/// for the same slot was issued after it; older ones are dropped. Once the
/// network settles, both slots therefore reflect the latest selection.
///
/// Fetch errors never escape a transition: they are logged, recorded as
/// [`FetchFailure`]s, and the affected slot keeps its previous value.
pub struct ViewController<A: CommitmentsApi> {
    api: A,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    state: ViewState,
    totals_generation: u64,
    commitments_generation: u64,
}

impl<A: CommitmentsApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// The backend this controller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Initial load: fetch the investor list.
    /// On failure the list is left as it was (empty on first load).
    pub async fn load_investors(&self) {
        match self.api.list_investors().await {
            Ok(investors) => {
                log::info!("Loaded {} investors from {}", investors.len(), self.api.name());
                self.lock().state.investors = investors;
            }
            Err(e) => self.record_failure(FetchKind::Investors, None, &e),
        }
    }

    /// Select `investor`, clear the asset-class filter, and fetch its
    /// totals and unfiltered commitments concurrently.
    pub async fn select_investor(&self, investor: Investor) {
        let investor_id = investor.id;
        let (totals_generation, commitments_generation) = {
            let mut inner = self.lock();
            inner.state.selected_investor = Some(investor);
            inner.state.active_asset_class = None;
            inner.totals_generation += 1;
            inner.commitments_generation += 1;
            (inner.totals_generation, inner.commitments_generation)
        };

        let totals = async {
            let result = self.api.get_asset_class_totals(investor_id).await;
            self.apply_totals(investor_id, totals_generation, result);
        };
        let commitments = async {
            let result = self.api.get_commitments(investor_id, None).await;
            self.apply_commitments(investor_id, commitments_generation, None, result);
        };
        futures::join!(totals, commitments);
    }

    /// Select the investor with `investor_id` from the loaded list.
    /// Returns `NotFound` without touching the state if it is not listed.
    pub async fn select_investor_by_id(&self, investor_id: InvestorId) -> Result<(), CoreError> {
        let investor = self
            .find_investor(investor_id)
            .ok_or_else(|| CoreError::NotFound(format!("investor {investor_id}")))?;
        self.select_investor(investor).await;
        Ok(())
    }

    /// Re-fetch the selected investor's commitments filtered by `label`.
    ///
    /// Does nothing when no investor is selected. `"All"` requests the
    /// unfiltered list and clears the filter. The active filter only changes
    /// together with the commitments it describes, so a failed request keeps
    /// both as they were.
    pub async fn select_asset_class(&self, label: &str) {
        let filter = (label != ALL_ASSET_CLASSES).then_some(label);
        let (investor_id, generation) = {
            let mut inner = self.lock();
            let Some(investor_id) = inner.state.selected_investor_id() else {
                log::debug!("Ignoring asset class '{label}': no investor selected");
                return;
            };
            inner.commitments_generation += 1;
            (investor_id, inner.commitments_generation)
        };

        let result = self.api.get_commitments(investor_id, filter).await;
        self.apply_commitments(investor_id, generation, filter, result);
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// A copy of the whole state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn investors(&self) -> Vec<Investor> {
        self.lock().state.investors.clone()
    }

    #[must_use]
    pub fn find_investor(&self, investor_id: InvestorId) -> Option<Investor> {
        self.lock()
            .state
            .investors
            .iter()
            .find(|i| i.id == investor_id)
            .cloned()
    }

    #[must_use]
    pub fn selected_investor(&self) -> Option<Investor> {
        self.lock().state.selected_investor.clone()
    }

    #[must_use]
    pub fn active_asset_class(&self) -> Option<String> {
        self.lock().state.active_asset_class.clone()
    }

    /// Commitments for the selected investor, once loaded.
    #[must_use]
    pub fn commitments(&self) -> Option<Vec<Commitment>> {
        self.lock().state.current_commitments().map(<[Commitment]>::to_vec)
    }

    /// Asset-class totals for the selected investor, once loaded.
    #[must_use]
    pub fn asset_class_totals(&self) -> Option<AssetClassTotals> {
        self.lock().state.current_asset_class_totals().cloned()
    }

    /// The most recent failures, oldest first. At most
    /// [`MAX_RECORDED_FAILURES`] are kept; older ones are dropped.
    #[must_use]
    pub fn failures(&self) -> Vec<FetchFailure> {
        self.lock().state.failures.clone()
    }

    /// Drain the recorded failures.
    pub fn take_failures(&self) -> Vec<FetchFailure> {
        std::mem::take(&mut self.lock().state.failures)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn apply_totals(
        &self,
        investor_id: InvestorId,
        generation: u64,
        result: Result<AssetClassTotals, CoreError>,
    ) {
        match result {
            Ok(totals) => {
                let mut inner = self.lock();
                if inner.totals_generation != generation {
                    log::debug!("Discarding stale asset class totals for investor {investor_id}");
                    return;
                }
                log::info!(
                    "Loaded {} asset class totals for investor {investor_id}",
                    totals.len()
                );
                inner.state.asset_class_totals = Some(Loaded {
                    investor_id,
                    data: totals,
                });
            }
            Err(e) => self.record_failure(FetchKind::AssetClassTotals, Some(investor_id), &e),
        }
    }

    fn apply_commitments(
        &self,
        investor_id: InvestorId,
        generation: u64,
        filter: Option<&str>,
        result: Result<Vec<Commitment>, CoreError>,
    ) {
        match result {
            Ok(commitments) => {
                let mut inner = self.lock();
                if inner.commitments_generation != generation {
                    log::debug!("Discarding stale commitments for investor {investor_id}");
                    return;
                }
                log::info!(
                    "Loaded {} commitments for investor {investor_id}",
                    commitments.len()
                );
                inner.state.commitments = Some(Loaded {
                    investor_id,
                    data: commitments,
                });
                inner.state.active_asset_class = filter.map(str::to_string);
            }
            Err(e) => self.record_failure(FetchKind::Commitments, Some(investor_id), &e),
        }
    }

    fn record_failure(&self, kind: FetchKind, investor_id: Option<InvestorId>, error: &CoreError) {
        match investor_id {
            Some(id) => log::error!("Error fetching {kind} for investor {id}: {error}"),
            None => log::error!("Error fetching {kind}: {error}"),
        }
        let mut inner = self.lock();
        let failures = &mut inner.state.failures;
        if failures.len() >= MAX_RECORDED_FAILURES {
            let excess = failures.len() + 1 - MAX_RECORDED_FAILURES;
            failures.drain(..excess);
        }
        failures.push(FetchFailure {
            kind,
            investor_id,
            message: error.to_string(),
            at: Utc::now(),
        });
    }
}

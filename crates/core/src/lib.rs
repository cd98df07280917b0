pub mod api;
pub mod errors;
pub mod formatting;
pub mod models;
pub mod services;
pub mod views;

use api::http::HttpCommitmentsApi;
use api::traits::CommitmentsApi;
use models::investor::Investor;
use models::settings::ClientSettings;
use models::view_state::ViewState;
use services::view_controller::ViewController;
use views::asset_class_buttons::AssetClassButtons;
use views::page::Page;

use errors::CoreError;

/// Main entry point for the Commitments Viewer core library.
///
/// Wires a backend client to a [`ViewController`] and exposes the user
/// actions of the screen (row clicks, button clicks) plus rendering.
#[must_use]
pub struct CommitmentsViewer<A: CommitmentsApi = HttpCommitmentsApi> {
    controller: ViewController<A>,
}

impl<A: CommitmentsApi> std::fmt::Debug for CommitmentsViewer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.controller.snapshot();
        f.debug_struct("CommitmentsViewer")
            .field("backend", &self.controller.api().name())
            .field("investors", &state.investors.len())
            .field("selected", &state.selected_investor_id())
            .field("active_asset_class", &state.active_asset_class)
            .field("failures", &state.failures.len())
            .finish()
    }
}

impl CommitmentsViewer<HttpCommitmentsApi> {
    /// Build a viewer talking HTTP to the backend in `settings`.
    /// Nothing is fetched until [`CommitmentsViewer::load`] is called.
    pub fn new(settings: &ClientSettings) -> Result<Self, CoreError> {
        Ok(Self::with_api(HttpCommitmentsApi::new(settings)?))
    }

    /// Build a viewer for `COMMITMENTS_API_BASE_URL` (default `http://localhost:8000`).
    pub fn from_env() -> Result<Self, CoreError> {
        Self::new(&ClientSettings::from_env())
    }

    /// Build a viewer and run the initial investor load.
    pub async fn start(settings: &ClientSettings) -> Result<Self, CoreError> {
        let viewer = Self::new(settings)?;
        viewer.load().await;
        Ok(viewer)
    }
}

impl<A: CommitmentsApi> CommitmentsViewer<A> {
    /// Build a viewer over any backend implementation.
    pub fn with_api(api: A) -> Self {
        Self {
            controller: ViewController::new(api),
        }
    }

    pub fn controller(&self) -> &ViewController<A> {
        &self.controller
    }

    // ── User actions ────────────────────────────────────────────────

    /// Initial load of the investor list. Failures are recorded, not returned.
    pub async fn load(&self) {
        self.controller.load_investors().await;
    }

    pub async fn select_investor(&self, investor: Investor) {
        self.controller.select_investor(investor).await;
    }

    /// Click on investor row `row`. Returns `false` if there is no such row.
    pub async fn click_investor_row(&self, row: usize) -> bool {
        let Some(investor) = self.controller.snapshot().investors.get(row).cloned() else {
            return false;
        };
        self.controller.select_investor(investor).await;
        true
    }

    pub async fn select_asset_class(&self, label: &str) {
        self.controller.select_asset_class(label).await;
    }

    /// Click on asset-class button `index` of the current panel.
    /// Returns `false` if no such button is on screen.
    pub async fn click_asset_class_button(&self, index: usize) -> bool {
        let state = self.controller.snapshot();
        let Some(totals) = state.current_asset_class_totals() else {
            return false;
        };
        let buttons = AssetClassButtons::new(totals, state.active_asset_class.as_deref());
        let Some(label) = buttons.label_at(index).map(str::to_string) else {
            return false;
        };
        self.controller.select_asset_class(&label).await;
        true
    }

    // ── Rendering ───────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.controller.snapshot()
    }

    /// Render the current screen as plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let state = self.controller.snapshot();
        Page::new(&state).to_string()
    }
}

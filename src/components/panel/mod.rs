//! Field Panel Module
//!
//! Tabbed browser for a user's field cards with a search overlay.
//!
//! # Components
//! - `FieldsPanel` - Main panel wiring tabs, search, and the card list
//! - `CategoryTabs` - Category tab strip; switching tabs reloads the list
//! - `SearchBar` - Free-text search that temporarily overrides the list
//! - `FieldList` - Renders the cards (or loading/empty/error placeholders)
//!
//! The panel keeps one visible region governed by a display mode: the active
//! category's default list, or a transient search override. The last
//! successfully loaded default list is cached so leaving search mode restores
//! it without another request. Fetch completions carry an epoch token and are
//! discarded when a newer request has taken over the region.

mod category_tabs;
mod field_list;
mod search_bar;

pub use category_tabs::{load_category, CategoryTabs};
pub use field_list::{FieldList, EMPTY_TEXT, ERROR_TEXT, LOADING_TEXT, NO_DESCRIPTION_TEXT};
pub use search_bar::{submit_search, SearchBar};

use leptos::prelude::*;

use crate::api::{ApiError, FieldSummary};
use crate::config::PanelConfig;

// ============================================================================
// Types
// ============================================================================

/// Category of fields shown in one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mine,
    Liked,
    Favorites,
}

impl Category {
    /// Wire value used in the listing endpoint's `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mine => "mine",
            Category::Liked => "liked",
            Category::Favorites => "favorites",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mine => "My Fields",
            Category::Liked => "Liked",
            Category::Favorites => "Favorites",
        }
    }

    /// All categories in tab order. The first one is the initial tab.
    pub fn all() -> &'static [Category] {
        &[Category::Mine, Category::Liked, Category::Favorites]
    }

    /// Parse a wire value. Unknown strings yield `None`: selecting a tab the
    /// panel does not know about is silently ignored, never a crash.
    pub fn from_str(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "mine" => Some(Category::Mine),
            "liked" => Some(Category::Liked),
            "favorites" => Some(Category::Favorites),
            _ => None,
        }
    }
}

/// Which content currently governs the panel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// The active category's default list.
    Default,
    /// Transient search results shown in place of the default list.
    SearchOverride,
}

/// What the list region should render.
///
/// `Ready(vec![])` and an "empty" outcome are the same thing; both render the
/// fixed nothing-to-show placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Loading,
    Ready(Vec<FieldSummary>),
    Failed(String),
}

// ============================================================================
// Panel State
// ============================================================================

/// Shared panel state provided to child components via context.
///
/// All mutation goes through the methods below so the request-epoch
/// discipline cannot be bypassed: every new request bumps the epoch, and a
/// completion is only applied while its token is still current.
#[derive(Clone, Copy)]
pub struct PanelState {
    pub active_category: RwSignal<Category>,
    pub display_mode: RwSignal<DisplayMode>,
    pub content: RwSignal<ListOutcome>,
    /// The most recently successfully loaded default list. A failed refresh
    /// never overwrites it; leaving search mode restores it as-is.
    pub last_default_content: RwSignal<Vec<FieldSummary>>,
    pub query: RwSignal<String>,
    request_epoch: RwSignal<u64>,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            active_category: RwSignal::new(Category::all()[0]),
            display_mode: RwSignal::new(DisplayMode::Default),
            content: RwSignal::new(ListOutcome::Loading),
            last_default_content: RwSignal::new(Vec::new()),
            query: RwSignal::new(String::new()),
            request_epoch: RwSignal::new(0),
        }
    }

    fn bump_epoch(&self) -> u64 {
        let token = self.request_epoch.get_untracked() + 1;
        self.request_epoch.set(token);
        token
    }

    /// Whether a completion token still owns the panel region.
    pub fn is_current(&self, token: u64) -> bool {
        self.request_epoch.get_untracked() == token
    }

    /// Whether a search request is in flight. Scopes the search button's
    /// spinner to its own operation; a category load does not light it up.
    pub fn is_search_loading(&self) -> bool {
        self.display_mode.get() == DisplayMode::SearchOverride
            && matches!(self.content.get(), ListOutcome::Loading)
    }

    /// Start loading a category's default list. Marks the tab active, shows
    /// the loading placeholder, and returns the token the completion must
    /// present to [`apply_default_result`](Self::apply_default_result).
    pub fn begin_activate(&self, category: Category) -> u64 {
        self.active_category.set(category);
        self.display_mode.set(DisplayMode::Default);
        self.content.set(ListOutcome::Loading);
        self.bump_epoch()
    }

    /// Start a search request; the result will override the default list.
    pub fn begin_search(&self) -> u64 {
        self.display_mode.set(DisplayMode::SearchOverride);
        self.content.set(ListOutcome::Loading);
        self.bump_epoch()
    }

    /// Leave search mode and restore the cached default list without a
    /// network call. Also invalidates any in-flight request so a late search
    /// completion cannot clobber the restored list.
    pub fn exit_search(&self) {
        self.bump_epoch();
        self.display_mode.set(DisplayMode::Default);
        self.content
            .set(ListOutcome::Ready(self.last_default_content.get_untracked()));
    }

    /// Apply a category fetch completion. Stale completions are discarded;
    /// a failure renders the error placeholder but leaves the cached default
    /// list untouched (stale-but-valid beats empty).
    pub fn apply_default_result(&self, token: u64, result: Result<Vec<FieldSummary>, ApiError>) {
        if !self.is_current(token) {
            log::warn!("discarding stale field list for an inactive request");
            return;
        }
        match result {
            Ok(fields) => {
                self.last_default_content.set(fields.clone());
                self.content.set(ListOutcome::Ready(fields));
            }
            Err(err) => {
                report_fetch_failure(&err);
                self.content.set(ListOutcome::Failed(err.to_string()));
            }
        }
    }

    /// Apply a search fetch completion. Never touches the cached default
    /// list: search results are not the category default.
    pub fn apply_search_result(&self, token: u64, result: Result<Vec<FieldSummary>, ApiError>) {
        if !self.is_current(token) {
            log::warn!("discarding stale search results");
            return;
        }
        match result {
            Ok(results) => self.content.set(ListOutcome::Ready(results)),
            Err(err) => {
                report_fetch_failure(&err);
                self.content.set(ListOutcome::Failed(err.to_string()));
            }
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Operator-visible diagnostic; the user only ever sees the fixed message.
fn report_fetch_failure(err: &ApiError) {
    web_sys::console::error_1(&format!("field panel fetch failed: {err}").into());
}

/// Get panel state from context
pub fn use_panel_state() -> PanelState {
    expect_context::<PanelState>()
}

/// Get panel configuration from context
pub fn use_panel_config() -> PanelConfig {
    expect_context::<PanelConfig>()
}

// ============================================================================
// Main Panel Component
// ============================================================================

/// Tabbed field browser with search overlay.
#[component]
pub fn FieldsPanel(
    /// Configuration; falls back to document-provided values when omitted
    #[prop(optional)]
    config: Option<PanelConfig>,
    /// Initial tab as a wire value (e.g. "liked"); unknown values fall back
    /// to the first tab
    #[prop(into, optional)]
    initial_category: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_else(PanelConfig::from_document);

    let state = PanelState::new();
    if let Some(initial) = initial_category.as_deref().and_then(Category::from_str) {
        state.active_category.set(initial);
    }
    provide_context(state);
    provide_context(config.clone());

    // Load the initial tab's list on mount.
    Effect::new({
        let config = config.clone();
        move |_| {
            load_category(state, &config, state.active_category.get_untracked());
        }
    });

    view! {
        <section id="fields-panel" class="space-y-4">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <CategoryTabs />
                <SearchBar />
            </div>
            <FieldList />
        </section>
    }
}

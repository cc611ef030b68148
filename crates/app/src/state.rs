use dioxus::prelude::*;
use search_engine::{FilterStore, SearchView};
use shared_types::FilterState;

/// How hits are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultLayout {
    #[default]
    List,
    Grid,
}

impl ResultLayout {
    pub fn label(&self) -> &'static str {
        match self {
            ResultLayout::List => "List View",
            ResultLayout::Grid => "Grid View",
        }
    }
}

/// Search page state shared with every widget on the page.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub filters: Signal<FilterStore>,
    pub view: Signal<SearchView>,
    pub layout: Signal<ResultLayout>,
    /// Filter sidebar visibility on narrow screens.
    pub filter_panel_open: Signal<bool>,
}

impl SearchContext {
    pub fn new(initial: FilterState) -> Self {
        Self {
            filters: Signal::new(FilterStore::new(initial)),
            view: Signal::new(SearchView::default()),
            layout: Signal::new(ResultLayout::default()),
            filter_panel_open: Signal::new(false),
        }
    }
}

/// Get the search page context. Must be called below `SearchPage`.
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}

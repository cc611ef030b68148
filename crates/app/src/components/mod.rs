mod display_toggle;
mod facet_selector;
mod filter_header;
mod result_grid;
mod result_list;
mod search_header;
mod status_selector;

#[cfg(test)]
mod dom_harness;

pub use display_toggle::DisplayToggle;
pub use facet_selector::FacetSelector;
pub use filter_header::FilterHeader;
pub use result_grid::ResultGrid;
pub use result_list::ResultList;
pub use search_header::SearchHeader;
pub use status_selector::StatusSelector;

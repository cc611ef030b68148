//! Search-state synchronization for the trademark search page.
//!
//! Everything here is UI-framework agnostic: the Dioxus app owns the signals
//! and routing, and drives these types from its handlers and effects.

pub mod backend;
pub mod cache;
pub mod config;
pub mod debounce;
pub mod orchestrator;
pub mod selectors;
pub mod store;
pub mod url_sync;
pub mod view;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use cache::ResponseCache;
pub use config::{config, parse_config};
pub use debounce::{sleep, DebounceTicket, DebouncedEmitter, Debouncer};
pub use orchestrator::{Resolution, SearchOrchestrator, SearchOutcome};
pub use selectors::{
    filter_options, normalize_submission, wildcard_suggestions, FacetPicker, StatusChip,
    StatusToggle, STATUS_CHIPS,
};
pub use store::FilterStore;
pub use url_sync::{Bootstrap, UrlChange, UrlSynchronizer};
pub use view::{BootPhase, SearchView};

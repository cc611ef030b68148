pub mod not_found;
pub mod search;

use dioxus::prelude::*;
use shared_types::SearchParams;

use not_found::NotFound;
use search::SearchPage;

/// Application routes.
///
/// The whole search state lives in the query string of `/`, so history
/// navigation and shared links restore the same search.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:..params")]
    SearchPage { params: SearchParams },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn search(params: SearchParams) -> Self {
        Route::SearchPage { params }
    }
}

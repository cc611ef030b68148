use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use dioxus::prelude::*;
use search_engine::{
    normalize_submission, Debouncer, FilterStore, HttpSearchBackend, SearchOrchestrator,
    UrlChange, UrlSynchronizer,
};
use shared_types::{FacetSelections, SearchError, SearchParams, StatusLabel};
use shared_ui::SkeletonRows;

use crate::components::{
    DisplayToggle, FacetSelector, FilterHeader, ResultGrid, ResultList, SearchHeader,
    StatusSelector,
};
use crate::routes::Route;
use crate::state::{ResultLayout, SearchContext};

type SharedSync = Rc<RefCell<UrlSynchronizer>>;

/// Write pending filter changes to the address bar without adding history.
fn flush_url(mut filters: Signal<FilterStore>, sync: &SharedSync) {
    let mut store = filters.write();
    if !store.take_url_update() {
        return;
    }
    let published = sync.borrow_mut().publish(store.state());
    let revision = store.revision();
    drop(store);
    if let Some(params) = published {
        tracing::info!(url = %params, revision, "Replacing URL with updated filters");
        navigator().replace(Route::search(params));
    }
}

/// Result panes with the layout each one shows. The chosen layout applies on
/// wide screens; narrow screens always get the grid. CSS hides one of the two.
fn result_panes(chosen: ResultLayout) -> [(&'static str, ResultLayout); 2] {
    [
        ("results-wide", chosen),
        ("results-narrow", ResultLayout::Grid),
    ]
}

/// The trademark search page. Its props are the parsed query string.
#[component]
pub fn SearchPage(params: SearchParams) -> Element {
    let settings = &search_engine::config().search;

    let (sync, boot) = use_hook(|| {
        let mut sync = UrlSynchronizer::from_settings(settings);
        let boot = sync.bootstrap(&params);
        (Rc::new(RefCell::new(sync)), boot)
    });
    let ctx = use_context_provider(|| SearchContext::new(boot.state.clone()));
    let orchestrator = use_hook(|| {
        Rc::new(SearchOrchestrator::new(
            HttpSearchBackend::new(&settings.endpoint),
            settings,
        ))
    });
    let fetch_debouncer = use_hook(|| Debouncer::from_millis(settings.fetch_debounce_ms));

    // Correct a landing URL that lacks query or country.
    {
        let redirect = boot.redirect.clone();
        use_effect(move || {
            if let Some(params) = redirect.clone() {
                navigator().replace(Route::search(params));
            }
        });
    }

    // Route changes: our own writes, history navigation, and new queries.
    {
        let sync = sync.clone();
        let mut filters = ctx.filters;
        use_effect(use_reactive((&params,), move |(params,)| {
            let current = filters.peek().state().clone();
            let change = sync.borrow_mut().observe(&params, &current);
            match change {
                UrlChange::Unchanged => {}
                UrlChange::QueryChanged { state, redirect } => {
                    filters.write().reset_search(state.query, state.country);
                    if let Some(params) = redirect {
                        navigator().replace(Route::search(params));
                    }
                }
                UrlChange::FiltersChanged(state) => {
                    filters.write().adopt(state);
                }
            }
        }));
    }

    // Fetch whenever the filter tuple changes, debounced.
    let filter_state = use_memo(move || ctx.filters.read().state().clone());
    {
        let orchestrator = orchestrator.clone();
        let debouncer = fetch_debouncer.clone();
        let mut view = ctx.view;
        use_effect(move || {
            let filters = filter_state();
            view.write().begin_loading();
            let ticket = debouncer.arm();
            let debouncer = debouncer.clone();
            let orchestrator = orchestrator.clone();
            spawn(async move {
                if !debouncer.settle(ticket).await {
                    return;
                }
                let outcome = orchestrator.execute(&filters).await;
                if debouncer.is_current(ticket) {
                    view.write().apply(outcome);
                }
            });
        });
    }

    {
        let orchestrator = orchestrator.clone();
        let debouncer = fetch_debouncer.clone();
        use_drop(move || {
            debouncer.teardown();
            orchestrator.cancel_inflight();
        });
    }

    let on_status_change = {
        let sync = sync.clone();
        let mut filters = ctx.filters;
        move |status: BTreeSet<StatusLabel>| {
            if filters.write().set_status(status) {
                flush_url(filters, &sync);
            }
        }
    };

    let on_facets_change = {
        let sync = sync.clone();
        let mut filters = ctx.filters;
        move |facets: FacetSelections| {
            if filters.write().set_facets(facets) {
                flush_url(filters, &sync);
            }
        }
    };

    let on_search = {
        let sync = sync.clone();
        move |query: String| {
            let current = ctx.filters.peek().state().query.clone();
            let Some(query) = normalize_submission(&query, &current) else {
                return;
            };
            let params = sync.borrow().search_for(&query);
            tracing::info!(query = %query, "Submitting new search");
            navigator().push(Route::search(params));
        }
    };

    let view = ctx.view.read();
    let store = ctx.filters.read();
    let state = store.state();
    let panel_open = *ctx.filter_panel_open.read();
    let layout = *ctx.layout.read();
    let error_message = view.error.as_ref().map(SearchError::user_message);

    if !view.phase.is_ready() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./search.css") }
            div { class: "search-page",
                SearchHeader {
                    query: state.query.clone(),
                    total: None,
                    on_search: on_search,
                }
                div { class: "search-boot", SkeletonRows { rows: 5 } }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        div { class: "search-page",
            SearchHeader {
                query: state.query.clone(),
                total: view.total,
                on_search: on_search,
            }
            FilterHeader {}
            div { class: "search-body",
                section { class: "search-results",
                    if let Some(message) = error_message {
                        div { class: "search-error", role: "alert", "{message}" }
                    } else {
                        for (class, pane) in result_panes(layout) {
                            div { key: "{class}", class,
                                if pane == ResultLayout::Grid {
                                    ResultGrid { hits: view.hits.clone(), loading: view.loading }
                                } else {
                                    ResultList { hits: view.hits.clone(), loading: view.loading }
                                }
                            }
                        }
                    }
                }
                aside {
                    class: "search-filters",
                    "data-open": if panel_open { "true" } else { "false" },
                    StatusSelector {
                        selected: state.status.clone(),
                        on_change: on_status_change,
                    }
                    FacetSelector {
                        snapshot: view.snapshot.clone(),
                        loading: view.loading,
                        selected: state.facets.clone(),
                        on_change: on_facets_change,
                    }
                    DisplayToggle {}
                }
            }
        }
    }
}

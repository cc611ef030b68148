use std::time::Duration;

use dioxus::prelude::*;
use search_engine::{DebouncedEmitter, FacetPicker};
use shared_types::{AggregationSnapshot, FacetSelections, ALL_FACETS};
use shared_ui::{Card, CheckOption, Input, TabStrip};

use crate::format_helpers::capitalize_first;

/// Tabbed multi-select over owners, law firms and attorneys.
///
/// Options come from the unfiltered aggregation snapshot so the lists do not
/// shrink as filters narrow the results. Selections are reported 250 ms after
/// the last toggle.
#[component]
pub fn FacetSelector(
    snapshot: AggregationSnapshot,
    loading: bool,
    selected: FacetSelections,
    on_change: EventHandler<FacetSelections>,
) -> Element {
    let mut picker = use_signal(|| FacetPicker::new(selected.clone()));
    let emitter = use_hook(|| {
        let delay = Duration::from_millis(search_engine::config().search.selector_debounce_ms);
        DebouncedEmitter::new(delay, move |selections: FacetSelections| {
            on_change.call(selections)
        })
        .skip_initial()
    });

    use_effect(use_reactive((&selected,), move |(selected,)| {
        if picker.peek().selections() != &selected {
            picker.write().sync_selections(&selected);
        }
    }));

    // Only selection changes are emitted; typing in the search box is local.
    let selections = use_memo(move || picker.read().selections().clone());
    {
        let emitter = emitter.clone();
        use_effect(move || {
            let pending = emitter.emit(selections());
            spawn(async move {
                pending.await;
            });
        });
    }

    {
        let emitter = emitter.clone();
        use_drop(move || emitter.teardown());
    }

    let current = picker.read();
    let active = current.active_tab();
    let active_index = ALL_FACETS.iter().position(|f| *f == active).unwrap_or(0);
    let search_text = current.search_text().to_string();
    let options: Vec<(String, bool)> = current
        .visible_options(&snapshot)
        .into_iter()
        .map(|key| (key.to_string(), current.is_selected(key)))
        .collect();
    let empty_message = current.empty_message();
    drop(current);

    rsx! {
        Card { class: "facet-selector",
            TabStrip {
                tabs: ALL_FACETS.iter().map(|f| f.label().to_string()).collect::<Vec<_>>(),
                active: active_index,
                on_select: move |index: usize| {
                    if let Some(facet) = ALL_FACETS.get(index) {
                        picker.write().switch_tab(*facet);
                    }
                },
            }
            Input {
                class: "facet-search",
                value: search_text,
                placeholder: format!("Search {}", active.label()),
                on_input: move |text: String| picker.write().set_search_text(text),
                on_clear: move |_: ()| picker.write().set_search_text(String::new()),
            }
            div { class: "facet-options",
                if loading {
                    p { class: "facet-status", "Loading ..." }
                } else if options.is_empty() {
                    p { class: "facet-status", "{empty_message}" }
                } else {
                    for (key, checked) in options {
                        CheckOption {
                            key: "{key}",
                            label: capitalize_first(&key),
                            checked,
                            on_toggle: {
                                let key = key.clone();
                                move |_: ()| {
                                    picker.write().toggle(&key);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

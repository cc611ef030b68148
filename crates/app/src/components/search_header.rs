use dioxus::prelude::*;
use search_engine::wildcard_suggestions;
use shared_ui::{Button, ButtonVariant, SearchBar};

use crate::use_feature_flags;

/// `About 1,234 Trademarks found for "nike"`.
pub fn counts_line(total: u64, query: &str) -> String {
    format!("About {total} Trademarks found for \"{query}\"")
}

/// Search box, result count and wildcard suggestions.
///
/// `on_search` receives the raw input; the page trims it and ignores
/// unchanged queries.
#[component]
pub fn SearchHeader(query: String, total: Option<u64>, on_search: EventHandler<String>) -> Element {
    let flags = use_feature_flags();
    let mut input = use_signal(|| query.clone());

    // Follow the URL when the query changes from outside the box.
    use_effect(use_reactive((&query,), move |(query,)| {
        if *input.peek() != query {
            input.set(query);
        }
    }));

    let suggestions = if flags.suggestions {
        wildcard_suggestions(&query)
    } else {
        Vec::new()
    };

    rsx! {
        header { class: "search-header",
            SearchBar {
                value: input.read().clone(),
                on_input: move |text: String| input.set(text),
                on_submit: move |_: ()| on_search.call(input.peek().clone()),
            }
            if let Some(total) = total {
                p { class: "search-counts", "{counts_line(total, &query)}" }
            }
            if !suggestions.is_empty() {
                div { class: "search-suggestions",
                    span { class: "search-suggestions-label", "Also try searching for" }
                    for suggestion in suggestions {
                        Button {
                            key: "{suggestion}",
                            variant: ButtonVariant::Chip,
                            onclick: {
                                let suggestion = suggestion.clone();
                                move |_| on_search.call(suggestion.clone())
                            },
                            "{suggestion}"
                        }
                    }
                }
            }
        }
    }
}

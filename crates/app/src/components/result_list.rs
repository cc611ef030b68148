use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdRefreshCw, LdTag};
use dioxus_free_icons::Icon;
use shared_types::Hit;
use shared_ui::{Badge, SkeletonRows};

use crate::format_helpers::HitSummary;

/// Loading and empty placeholders shared by both layouts. `None` means there
/// are hits to show.
pub(crate) fn placeholder(hits: &[Hit], loading: bool) -> Option<Element> {
    if loading {
        Some(rsx! {
            div { class: "results-placeholder",
                p { "Loading..." }
                SkeletonRows { rows: 3 }
            }
        })
    } else if hits.is_empty() {
        Some(rsx! {
            div { class: "results-placeholder",
                p { "No results found. Try adjusting your search criteria." }
            }
        })
    } else {
        None
    }
}

#[component]
pub(crate) fn ClassTags(classes: Vec<String>, more: bool) -> Element {
    rsx! {
        div { class: "hit-classes",
            if classes.is_empty() {
                span { class: "hit-class hit-class-empty", "No class information" }
            }
            for class in classes {
                span { key: "{class}", class: "hit-class",
                    Icon { icon: LdTag, width: 14, height: 14 }
                    "Class {class}"
                }
            }
            if more {
                span { class: "hit-class-more", "..." }
            }
        }
    }
}

/// Table-like list of hits: mark, owner/serial, status, and classes.
#[component]
pub fn ResultList(hits: Vec<Hit>, loading: bool) -> Element {
    if let Some(placeholder) = placeholder(&hits, loading) {
        return placeholder;
    }

    rsx! {
        div { class: "result-list",
            div { class: "result-list-head",
                span { "Mark" }
                span { "Details" }
                span { "Status" }
                span { "Class/Description" }
            }
            for hit in hits {
                ResultRow { key: "{hit.id}", summary: HitSummary::new(&hit.id, &hit.source) }
            }
        }
    }
}

#[component]
fn ResultRow(summary: HitSummary) -> Element {
    let (variant, status_label) = summary.status;
    let initial = summary.mark.chars().next().unwrap_or('?');
    let registered = summary
        .registration_date
        .clone()
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div { class: "result-row",
            div { class: "hit-mark-image", "aria-hidden": "true", "{initial}" }
            div { class: "hit-identity",
                p { class: "hit-mark", "{summary.mark}" }
                p { class: "hit-owner", "{summary.owner}" }
                p { class: "hit-serial", "{summary.serial}" }
                if let Some(filed) = summary.filing_date.as_ref() {
                    p { class: "hit-date", "{filed}" }
                }
            }
            div { class: "hit-status",
                Badge { variant, "{status_label}" }
                p { class: "hit-date",
                    "on "
                    span { class: "hit-date-strong", "{registered}" }
                }
                if let Some(renewal) = summary.renewal_date.as_ref() {
                    p { class: "hit-renewal",
                        Icon { icon: LdRefreshCw, width: 14, height: 14 }
                        "{renewal}"
                    }
                }
            }
            div { class: "hit-detail",
                p { class: "hit-description", title: "{summary.description}", "{summary.description}" }
                ClassTags { classes: summary.classes.clone(), more: summary.more_classes }
            }
        }
    }
}

use dioxus::prelude::*;

/// Loading placeholder with animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of row-shaped skeletons standing in for a result list.
#[component]
pub fn SkeletonRows(#[props(default = 4)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows", "aria-busy": "true",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}

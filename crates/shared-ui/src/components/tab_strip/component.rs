use dioxus::prelude::*;

/// A row of text tabs with one active entry.
///
/// `tabs` holds the labels; `active` is the index of the selected one.
#[component]
pub fn TabStrip(
    tabs: Vec<String>,
    active: usize,
    on_select: EventHandler<usize>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "tab-strip", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "tablist",
            ..merged,
            for (index, label) in tabs.into_iter().enumerate() {
                TabLabel {
                    key: "{index}",
                    label,
                    selected: index == active,
                    on_click: move |_: ()| on_select.call(index),
                }
            }
        }
    }
}

#[component]
fn TabLabel(label: String, selected: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "tab-strip-item",
            r#type: "button",
            role: "tab",
            "aria-selected": selected,
            "data-active": if selected { "true" } else { "false" },
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}

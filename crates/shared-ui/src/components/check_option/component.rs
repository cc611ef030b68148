use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;

/// One selectable row of a multi-select list: a check box and a label.
#[component]
pub fn CheckOption(
    label: String,
    checked: bool,
    on_toggle: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "check-option", None, false),
        Attribute::new(
            "data-checked",
            if checked { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "checkbox",
            "aria-checked": checked,
            onclick: move |_| on_toggle.call(()),
            ..merged,
            CheckBox { checked }
            span { class: "check-option-label", "{label}" }
        }
    }
}

#[component]
fn CheckBox(checked: bool) -> Element {
    rsx! {
        span { class: "check-option-box",
            if checked {
                Icon { icon: FaCheck, width: 10, height: 10 }
            }
        }
    }
}

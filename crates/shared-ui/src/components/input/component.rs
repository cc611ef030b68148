use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Text input with optional Enter handling and a clear button.
///
/// The clear button only shows while `value` is non-empty and `on_clear` is set.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
    #[props(default)] on_clear: Option<EventHandler<()>>,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let show_clear = !value.is_empty() && on_clear.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "text",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if matches!(evt.key(), Key::Enter) {
                        if let Some(handler) = &on_enter {
                            evt.prevent_default();
                            handler.call(());
                        }
                    }
                },
                ..merged,
            }
            if show_clear {
                button {
                    class: "input-clear",
                    r#type: "button",
                    "aria-label": "Clear",
                    onclick: move |_| {
                        if let Some(handler) = &on_clear {
                            handler.call(());
                        }
                    },
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}

use dioxus::prelude::*;

/// Color of a badge, keyed to trademark status families.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    Live,
    Pending,
    Dead,
    #[default]
    Neutral,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Live => "live",
            BadgeVariant::Pending => "pending",
            BadgeVariant::Dead => "dead",
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline status label with a leading dot.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            StatusDot { variant }
            {children}
        }
    }
}

/// The colored dot used by badges and status chips.
#[component]
pub fn StatusDot(#[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        span { class: "status-dot", "data-style": variant.class() }
    }
}

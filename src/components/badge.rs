use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Solid => "bg-primary text-primary-foreground border-transparent",
            BadgeVariant::Secondary => "bg-secondary text-secondary-foreground border-transparent",
            BadgeVariant::Outline => "text-foreground border-border",
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default = "text-xs")] class: &'static str,
    children: Element
) -> Element {
    let variant_class = variant.class();

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2.5 py-0.5 font-semibold transition-colors {variant_class} {class}",
            {children}
        }
    }
}

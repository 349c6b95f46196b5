use dioxus::prelude::*;

#[component]
pub fn ProgressBar(value: u8) -> Element {
    let value = value.min(100);

    rsx! {
        div {
            class: "relative h-2 w-full overflow-hidden rounded-full bg-secondary",
            role: "progressbar",
            div {
                class: "h-full bg-primary transition-all duration-500",
                style: "width: {value}%",
            }
        }
    }
}

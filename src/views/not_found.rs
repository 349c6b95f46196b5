use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        div {
            class: "container mx-auto p-4 pt-32 text-center",
            h1 { class: "text-2xl font-bold mb-4", "Page not found" }
            p { class: "text-muted-foreground mb-6", "Nothing lives at /{path}." }
            Link { class: "text-primary hover:underline", to: Route::Home {}, "Back to the homepage" }
        }
    }
}

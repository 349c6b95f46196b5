use dioxus::prelude::*;
use portfolio::contact::{ DeliveryHandle, NoticeQueue };
use portfolio::theme::ThemeContext;
use portfolio::utils::ThemeState;
use portfolio::views::Toaster;
use portfolio::{ Route, SiteConfig };

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_env);
    let theme_ctx = use_context_provider(|| ThemeContext::for_platform(&config));
    use_context_provider(|| DeliveryHandle::from_config(&config));

    let theme = use_signal(|| ThemeState::from(theme_ctx.resolve_initial()));
    use_context_provider(|| theme);
    let notices = use_signal(|| NoticeQueue::new(config.notice_limit));
    use_context_provider(|| notices);
    let root_class = theme().root_class();

    rsx! {
        div {
            class: "{root_class}",
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Router::<Route> {}
            Toaster {}
        }
    }
}

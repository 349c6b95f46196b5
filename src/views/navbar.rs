use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::content::PROFILE;
use crate::routes::Route;
use crate::theme::ThemeContext;
use crate::utils::{ scroll_to, scroll_to_top, Section, ThemeState };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);
    let menu_icon = if menu_open() { IconKind::Close } else { IconKind::Menu };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                id: "navbar",
                class: "fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-sm border-b border-border transition-colors duration-300",
                div {
                    class: "container mx-auto px-4 py-4 flex justify-between items-center",
                    a {
                        class: "text-xl font-bold brand",
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            scroll_to_top();
                        },
                        {PROFILE.name}
                    }
                    div {
                        class: "hidden md:flex space-x-6 items-center",
                        for section in Section::ALL {
                            SectionLink { key: "{section:?}", section }
                        }
                        ThemeToggle {}
                    }
                    div {
                        class: "flex items-center space-x-2 md:hidden",
                        ThemeToggle { icon_class: "h-4 w-4" }
                        button {
                            class: "p-2",
                            onclick: move |_| menu_open.set(!menu_open()),
                            Icon { kind: menu_icon, class: "h-6 w-6" }
                        }
                    }
                }
                if menu_open() {
                    div {
                        class: "md:hidden border-t border-border px-4 py-3 flex flex-col space-y-3",
                        onclick: move |_| menu_open.set(false),
                        for section in Section::ALL {
                            SectionLink { key: "{section:?}", section }
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn SectionLink(section: Section) -> Element {
    rsx! {
        a {
            class: "nav-link hover:text-primary transition-colors",
            href: section.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to(section);
            },
            {section.label()}
        }
    }
}

#[component]
fn ThemeToggle(#[props(default = "h-5 w-5")] icon_class: &'static str) -> Element {
    let theme_ctx = use_context::<ThemeContext>();
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-muted transition-colors",
            title: if theme().is_dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let next = theme_ctx.toggle(theme().is_dark);
                theme.set(ThemeState::new(next));
            },
            if theme().is_dark {
                Icon { kind: IconKind::Sun, class: icon_class }
            } else {
                Icon { kind: IconKind::Moon, class: icon_class }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::content::{ Profile, PROFILE };
use crate::utils::{ scroll_to, Section };

#[component]
pub fn HeroSection(#[props(default = PROFILE)] profile: Profile) -> Element {
    let socials = profile.socials;
    let avatar_alt = format!("{}'s profile", profile.name);

    rsx! {
        div {
            class: "min-h-screen flex flex-col justify-center items-center px-4 py-20 bg-background relative",
            div {
                class: "container mx-auto max-w-6xl",
                div {
                    class: "flex flex-col md:flex-row items-center justify-between gap-12",
                    div {
                        class: "flex-1 text-center md:text-left slide-up",
                        h1 {
                            class: "text-4xl md:text-6xl font-bold mb-4",
                            "Hi, I'm "
                            span { class: "text-primary", {profile.name} }
                        }
                        h2 { class: "text-2xl md:text-3xl font-medium text-muted-foreground mb-6", {profile.title} }
                        p { class: "text-lg mb-8 max-w-lg mx-auto md:mx-0", {profile.tagline} }

                        div {
                            class: "flex flex-col items-center md:items-start",
                            div {
                                id: "cta-buttons-row",
                                class: "flex flex-col sm:flex-row gap-4 justify-center md:justify-start w-full max-w-md",
                                button {
                                    class: "btn btn-primary flex-1",
                                    onclick: move |_| scroll_to(Section::Projects),
                                    "View My Work"
                                    Icon { kind: IconKind::ArrowDown, class: "ml-2 h-4 w-4" }
                                }
                                a {
                                    class: "btn btn-primary flex-1",
                                    href: profile.cv_url,
                                    download: "",
                                    Icon { kind: IconKind::Download, class: "inline-block mr-2 h-5 w-5" }
                                    "Download CV"
                                }
                            }
                            a {
                                class: "mt-6 px-8 py-4 text-lg bg-green-600 hover:bg-green-700 text-white font-bold rounded-lg shadow-lg flex items-center justify-center w-full max-w-md",
                                href: profile.whatsapp_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { kind: IconKind::WhatsApp, class: "inline-block mr-2 h-6 w-6" }
                                "Message Me"
                            }
                        }

                        div {
                            class: "mt-8 flex gap-4 justify-center md:justify-start",
                            if let Some(href) = socials.github {
                                SocialLink { href, label: "GitHub", kind: IconKind::Github }
                            }
                            if let Some(href) = socials.linkedin {
                                SocialLink { href, label: "LinkedIn", kind: IconKind::Linkedin }
                            }
                            if let Some(href) = socials.email {
                                SocialLink { href, label: "Email", kind: IconKind::Mail }
                            }
                            if let Some(href) = socials.facebook {
                                SocialLink { href, label: "Facebook", kind: IconKind::Facebook }
                            }
                        }
                    }

                    div {
                        class: "flex-1 flex justify-center md:justify-end scale-in",
                        div {
                            class: "relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-primary/20 shadow-xl",
                            img { class: "w-full h-full object-cover", src: profile.avatar_url, alt: avatar_alt }
                        }
                    }
                }

                div {
                    class: "absolute bottom-10 left-1/2 transform -translate-x-1/2 hidden md:flex flex-col items-center bounce",
                    span { class: "text-sm text-muted-foreground mb-2", "Scroll Down" }
                    Icon { kind: IconKind::ArrowDown, class: "h-4 w-4 text-muted-foreground" }
                }
            }
        }
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, kind: IconKind) -> Element {
    let external = !href.starts_with("mailto:");

    rsx! {
        a {
            class: "p-2 rounded-full bg-muted hover:bg-muted/80 transition-colors",
            href,
            target: if external { "_blank" } else { "_self" },
            rel: "noopener noreferrer",
            Icon { kind }
            span { class: "sr-only", {label} }
        }
    }
}

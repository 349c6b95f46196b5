use chrono::Datelike;
use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::content::{ SocialLinks, PROFILE };
use crate::utils::scroll_to_top;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let name = PROFILE.name;
    let socials = PROFILE.socials;

    rsx! {
        footer {
            class: "section-muted py-8 transition-colors duration-300",
            div {
                class: "container mx-auto px-4 text-center",
                p { class: "text-sm text-muted-foreground", "© {year} {name}. All rights reserved." }
                div {
                    class: "mt-4 flex justify-center space-x-4",
                    for (href, kind) in footer_links(&socials) {
                        a {
                            key: "{href}",
                            class: "text-muted-foreground hover:text-primary transition-colors",
                            href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { kind }
                        }
                    }
                }
            }
        }
    }
}

/// Profile links shown in the footer, in display order.
pub fn footer_links(socials: &SocialLinks) -> Vec<(&'static str, IconKind)> {
    [
        (socials.github, IconKind::Github),
        (socials.linkedin, IconKind::Linkedin),
        (socials.twitter, IconKind::Twitter),
        (socials.facebook, IconKind::Facebook),
    ]
        .into_iter()
        .filter_map(|(href, kind)| href.map(|href| (href, kind)))
        .collect()
}

#[component]
pub fn ScrollToTop() -> Element {
    rsx! {
        button {
            class: "fixed bottom-8 right-8 p-2 rounded-full bg-primary text-primary-foreground shadow-lg hover:bg-primary/90 transition-colors delayed-fade-in",
            title: "Back to top",
            onclick: move |_| scroll_to_top(),
            Icon { kind: IconKind::ChevronUp, class: "h-6 w-6" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_include_twitter() {
        let links = footer_links(&PROFILE.socials);
        assert!(links.contains(&("https://twitter.com", IconKind::Twitter)));
        assert_eq!(links.len(), 4);
    }

    #[test]
    fn test_footer_links_skip_missing() {
        let socials = SocialLinks {
            github: Some("https://github.com/someone"),
            linkedin: None,
            facebook: None,
            twitter: None,
            email: None,
        };
        assert_eq!(footer_links(&socials), vec![("https://github.com/someone", IconKind::Github)]);
    }
}

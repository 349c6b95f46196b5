use dioxus::prelude::*;
use crate::components::{ Badge, BadgeVariant, Icon, IconKind };
use crate::content::{ Project, GITHUB_PROFILE, PROJECTS };

#[component]
pub fn ProjectsSection(#[props(default = PROJECTS)] projects: &'static [Project]) -> Element {
    rsx! {
        div {
            class: "px-4 md:px-8 lg:px-16 transition-colors duration-300",
            div {
                class: "max-w-6xl mx-auto space-y-12",
                div {
                    class: "text-center mb-12",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4", "My Projects" }
                    div { class: "w-20 h-1 bg-primary mx-auto mb-6" }
                    p {
                        class: "text-lg text-muted-foreground max-w-2xl mx-auto",
                        "Here are some of my recent projects that showcase my skills in Laravel and React development."
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for project in projects.iter().copied() {
                        ProjectCard { key: "{project.id}", project }
                    }
                }

                div {
                    class: "text-center mt-12",
                    a {
                        class: "inline-flex items-center px-6 py-3 bg-primary hover:bg-primary/90 text-primary-foreground font-medium rounded-lg transition-colors duration-300",
                        href: GITHUB_PROFILE,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::Github, class: "w-5 h-5 mr-2" }
                        "View More Projects"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "card overflow-hidden flex flex-col h-full transition-all duration-300 hover:shadow-lg",
            div {
                class: "aspect-video w-full overflow-hidden",
                img {
                    class: "w-full h-full object-cover transition-transform duration-300 hover:scale-105",
                    src: project.image,
                    alt: project.title,
                }
            }
            div {
                class: "p-6 pb-2",
                h3 { class: "text-xl font-semibold", {project.title} }
                div {
                    class: "flex flex-wrap gap-2 mt-2",
                    for tech in project.technologies.iter().copied() {
                        Badge { key: "{tech}", variant: BadgeVariant::Secondary, {tech} }
                    }
                }
            }
            div {
                class: "px-6 flex-grow",
                p { class: "text-sm text-muted-foreground", {project.description} }
            }
            div {
                class: "p-6 pt-2 flex justify-between",
                if let Some(href) = project.demo_url {
                    a {
                        class: "btn btn-outline btn-sm flex items-center gap-1",
                        href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::ExternalLink, class: "h-3.5 w-3.5" }
                        "View Project"
                    }
                }
                if let Some(href) = project.github_url {
                    a {
                        class: "btn btn-outline btn-sm flex items-center gap-1",
                        href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::Github, class: "h-3.5 w-3.5" }
                        "Source Code"
                    }
                }
            }
        }
    }
}

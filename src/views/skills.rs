use dioxus::prelude::*;
use crate::components::{ Badge, BadgeVariant, Icon, IconKind, ProgressBar };
use crate::content::{ SkillCategory, SkillIcon, ADDITIONAL_SKILLS, SKILL_CATEGORIES };

fn category_icon(icon: SkillIcon) -> IconKind {
    match icon {
        SkillIcon::Laptop => IconKind::Laptop,
        SkillIcon::Server => IconKind::Server,
        SkillIcon::Database => IconKind::Database,
        SkillIcon::Wrench => IconKind::Wrench,
    }
}

#[component]
pub fn SkillsSection(
    #[props(default = SKILL_CATEGORIES)] categories: &'static [SkillCategory],
    #[props(default = ADDITIONAL_SKILLS)] additional: &'static [&'static str]
) -> Element {
    rsx! {
        div {
            class: "container mx-auto px-4",
            div {
                class: "text-center mb-16",
                h2 { class: "text-3xl font-bold mb-4", "Skills & Expertise" }
                p {
                    class: "text-muted-foreground max-w-2xl mx-auto",
                    "My technical skills as an amateur full-stack developer, focusing on Laravel and React development."
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                for category in categories.iter().copied() {
                    SkillCard { key: "{category.name}", category }
                }
            }

            div {
                class: "mt-16 text-center",
                h3 { class: "text-xl font-semibold mb-6", "Additional Skills" }
                div {
                    class: "flex flex-wrap justify-center gap-3",
                    for skill in additional.iter().copied() {
                        Badge { key: "{skill}", class: "px-3 py-1 text-sm", {skill} }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> Element {
    let last = category.skills.len().saturating_sub(1);

    rsx! {
        div {
            class: "card overflow-hidden p-6",
            div {
                class: "flex items-center gap-3 mb-6",
                div {
                    class: "p-2 rounded-full bg-primary/10 text-primary",
                    Icon { kind: category_icon(category.icon), class: "h-6 w-6" }
                }
                h3 { class: "text-xl font-semibold", {category.name} }
            }
            div {
                class: "space-y-5",
                for (index, skill) in category.skills.iter().enumerate() {
                    div {
                        key: "{skill.name}",
                        div {
                            class: "flex justify-between items-center mb-2",
                            span { class: "font-medium", {skill.name} }
                            span { class: "text-sm text-muted-foreground", "{skill.level}%" }
                        }
                        div {
                            class: "space-y-2",
                            ProgressBar { value: skill.level }
                            if !skill.tags.is_empty() {
                                div {
                                    class: "flex flex-wrap gap-2 mt-1",
                                    for tag in skill.tags.iter().copied() {
                                        Badge { key: "{tag}", variant: BadgeVariant::Outline, {tag} }
                                    }
                                }
                            }
                        }
                        if index < last {
                            hr { class: "mt-4 border-border" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::utils::Section;
use super::{ ContactSection, Footer, HeroSection, ProjectsSection, ScrollToTop, SkillsSection };

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen transition-colors duration-300",
            main {
                section { id: Section::Hero.anchor(), class: "pt-20 fade-in", HeroSection {} }
                section { id: Section::Projects.anchor(), class: "py-20 fade-in", ProjectsSection {} }
                section {
                    id: Section::Skills.anchor(),
                    class: "py-20 section-muted transition-colors duration-300 fade-in",
                    SkillsSection {}
                }
                section { id: Section::Contact.anchor(), class: "py-20 fade-in", ContactSection {} }
            }
            Footer {}
            ScrollToTop {}
        }
    }
}

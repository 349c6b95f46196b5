use std::fmt::{ Display, Formatter };
use std::str::FromStr;

/// In-page anchors the navigation can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Projects, Section::Skills, Section::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| format!("unknown section: {}", s))
    }
}

/// Smoothly scroll the viewport to `section`. Missing anchors are ignored.
pub fn scroll_to(section: Section) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ ScrollBehavior, ScrollIntoViewOptions };

        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(section.anchor()));
        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => log::warn!("No element with id {:?} to scroll to", section.anchor()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("Scroll to #{} requested outside the browser", section.anchor());
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ ScrollBehavior, ScrollToOptions };

        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("Scroll to top requested outside the browser");
}

pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    /// Encoding used in the preference store.
    pub fn as_str(self) -> &'static str {
        if self.is_dark { DARK } else { LIGHT }
    }

    /// Anything but `"dark"` reads as light: a stored value always wins over
    /// the system signal, even when it is not one we wrote.
    pub fn from_stored(value: &str) -> Self {
        Self { is_dark: value == DARK }
    }

    /// Classes for the root element. `app-root` paints the page from the theme
    /// variables in `main.css`; `dark` swaps those variables.
    pub fn root_class(self) -> &'static str {
        if self.is_dark { "app-root dark" } else { "app-root" }
    }
}

impl From<bool> for ThemeState {
    fn from(is_dark: bool) -> Self {
        Self { is_dark }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_encoding() {
        assert_eq!(ThemeState::new(true).as_str(), "dark");
        assert_eq!(ThemeState::new(false).as_str(), "light");
        assert!(ThemeState::from_stored("dark").is_dark);
        assert!(!ThemeState::from_stored("light").is_dark);
        assert!(!ThemeState::from_stored("sepia").is_dark);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeState::default().toggled(), ThemeState::new(true));
        assert_eq!(ThemeState::new(true).toggled().root_class(), "app-root");
    }

    #[test]
    fn test_root_classes_are_styled_by_main_css() {
        let css = include_str!("../../assets/styling/main.css");
        let root_rule = css
            .split(".app-root {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("main.css styles .app-root");
        assert!(root_rule.contains("background: hsl(var(--background))"));
        assert!(root_rule.contains("color: hsl(var(--foreground))"));

        let dark_rule = css
            .split(".dark {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("main.css defines .dark variables");
        assert!(dark_rule.contains("--background:"));
        assert!(dark_rule.contains("--foreground:"));

        for class in ThemeState::new(true).root_class().split_whitespace() {
            assert!(css.contains(&format!(".{} {{", class)), "{} is unstyled", class);
        }
    }
}

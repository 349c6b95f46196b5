mod navigation;
mod theme_state;
mod timer;

pub use navigation::{ scroll_to, scroll_to_top, Section };
pub use theme_state::ThemeState;
pub use timer::sleep;

mod contact;
mod theme;

pub use contact::ContactError;
pub use theme::ThemeError;

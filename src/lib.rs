pub mod components;
pub mod configs;
pub mod contact;
pub mod content;
pub mod error;
mod routes;
pub mod server;
pub mod theme;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteConfig;
pub use crate::error::{ ContactError, ThemeError };

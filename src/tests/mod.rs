// Make common test utilities available
pub mod common;
mod submission_flow;
mod theme;

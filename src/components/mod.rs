mod badge;
mod icons;
mod progress;

pub use badge::{ Badge, BadgeVariant };
pub use icons::{ Icon, IconKind };
pub use progress::ProgressBar;

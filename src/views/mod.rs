mod contact;
mod footer;
mod hero;
mod home;
mod navbar;
mod not_found;
mod projects;
mod skills;
mod toaster;

pub use contact::{ start_submission, ContactSection };
pub use footer::{ Footer, ScrollToTop };
pub use hero::HeroSection;
pub use home::Home;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
pub use projects::{ ProjectCard, ProjectsSection };
pub use skills::SkillsSection;
pub use toaster::{ show_notice, Toaster };

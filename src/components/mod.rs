#![allow(non_upper_case_globals)]

pub mod imports;

mod about;
pub mod contact;
mod default_styling;
mod footer;
mod header;
mod hero;
mod markdown;
mod not_found;
mod projects;
mod styles;
pub mod theme;
mod title;

pub use about::About;
pub use contact::Contact;
pub use default_styling::DefaultStyling;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use markdown::Markdown;
pub use not_found::NotFound;
pub use projects::Projects;
pub use theme::{ThemeToggle, WithTheme};
pub use title::PageTitle;

mod comp;
pub mod domain;

pub use comp::Contact;

pub mod contact;

pub use contact::{ deliver_contact_message, validate_message };

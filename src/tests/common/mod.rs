pub mod mocks;

use crate::contact::ContactFormData;

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn jane() -> ContactFormData {
    ContactFormData {
        name: "Jane".to_string(),
        email: "j@x.com".to_string(),
        subject: "Hi".to_string(),
        message: "Hello".to_string(),
    }
}

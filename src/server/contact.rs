use dioxus::prelude::*;
use regex::Regex;
use crate::contact::ContactFormData;
use crate::error::ContactError;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles");
}

/// Minimum a message needs before anyone would be able to answer it.
pub fn validate_message(message: &ContactFormData) -> Result<(), ContactError> {
    let email = message.email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(ContactError::InvalidEmail(email.to_string()));
    }
    if message.message.trim().is_empty() {
        return Err(ContactError::EmptyMessage);
    }
    Ok(())
}

#[server(DeliverContactMessage)]
pub async fn deliver_contact_message(message: ContactFormData) -> Result<(), ServerFnError> {
    log::info!("Received contact message from {:?}", message.email);
    validate_message(&message)?;

    // No mail transport: the message is recorded in the server log only.
    let record = serde_json::to_string(&message).map_err(|e| ServerFnError::new(e.to_string()))?;
    log::info!("Contact message accepted: {}", record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(email: &str, body: &str) -> ContactFormData {
        ContactFormData {
            name: "Jane".to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_accepts_plain_address() {
        assert_eq!(validate_message(&message(" j@x.com ", "Hello")), Ok(()));
    }

    #[test]
    fn test_rejects_bad_addresses() {
        for email in ["", "jane", "jane@", "@x.com", "jane@x", "ja ne@x.com"] {
            assert_eq!(
                validate_message(&message(email, "Hello")),
                Err(ContactError::InvalidEmail(email.trim().to_string())),
                "{:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_rejects_blank_message() {
        assert_eq!(validate_message(&message("j@x.com", "  \n")), Err(ContactError::EmptyMessage));
    }

    #[test]
    fn test_error_converts_for_server_boundary() {
        let err: ServerFnError = ContactError::EmptyMessage.into();
        assert!(err.to_string().contains("message must not be empty"));
    }
}

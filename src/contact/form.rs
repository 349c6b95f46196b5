use std::str::FromStr;
use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("unknown contact field: {}", s))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Copy of the form with `field_name` replaced. Unknown names leave it as is.
    pub fn update_field(&self, field_name: &str, value: &str) -> Self {
        let mut next = self.clone();
        match field_name.parse::<ContactField>() {
            Ok(field) => next.set(field, value),
            Err(e) => log::debug!("Ignoring update: {}", e),
        }
        next
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_update_field_touches_only_named_field() {
        let form = filled();
        let updated = form.update_field("email", "a@b.com");
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.name, form.name);
        assert_eq!(updated.subject, form.subject);
        assert_eq!(updated.message, form.message);
    }

    #[test]
    fn test_update_unknown_field_is_noop() {
        let form = filled();
        assert_eq!(form.update_field("bogus", "x"), form);
        assert_eq!(form.update_field("Email", "x"), form);
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, ContactFormData::default());
    }
}

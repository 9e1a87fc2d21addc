use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// One @, something on each side, a dot somewhere after the @. Not RFC 5322.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Picks the known fields out of a name -> value mapping; anything else is
    /// ignored.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in fields {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "message" => &mut form.message,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }

    /// Human-readable problems with the form, empty when it is fine to send.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !long_enough(&self.name, MIN_NAME_CHARS) {
            errors.push("Name must be at least 2 characters long".to_string());
        }
        if !self.email.as_deref().map_or(false, is_valid_email) {
            errors.push("Please enter a valid email address".to_string());
        }
        // Only the length is checked, not that the characters are digits.
        if !long_enough(&self.phone, MIN_PHONE_CHARS) {
            errors.push("Please enter a valid phone number".to_string());
        }
        if !long_enough(&self.message, MIN_MESSAGE_CHARS) {
            errors.push("Message must be at least 10 characters long".to_string());
        }

        errors
    }
}

fn long_enough(value: &Option<String>, min: usize) -> bool {
    value.as_deref().map_or(false, |v| v.trim().chars().count() >= min)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: serde_json::Value) -> ContactForm {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn every_field_wrong_gives_four_errors() {
        let errors = form(json!({"name": "A", "email": "bad", "phone": "123", "message": "short"})).validate();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn minimal_valid_form_passes() {
        let errors = form(json!({
            "name": "Al",
            "email": "a@b.co",
            "phone": "1234567890",
            "message": "this is long enough"
        }))
        .validate();
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn missing_fields_are_errors() {
        let errors = ContactForm::default().validate();
        assert_eq!(
            errors,
            vec![
                "Name must be at least 2 characters long",
                "Please enter a valid email address",
                "Please enter a valid phone number",
                "Message must be at least 10 characters long",
            ]
        );
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let form = ContactForm::from_fields([
            ("name", " A  "),
            ("email", "lawyer@tego.is"),
            ("phone", "   12345   "),
            ("message", "I need help with a trademark."),
        ]);
        let errors = form.validate();
        assert_eq!(errors, vec!["Name must be at least 2 characters long", "Please enter a valid phone number"]);
    }

    #[test]
    fn phone_letters_pass_the_length_check() {
        let form = ContactForm::from_fields([("phone", "call me later")]);
        assert!(!form.validate().contains(&"Please enter a valid phone number".to_string()));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@firm.example.is"));
        assert!(!is_valid_email("no-at-sign.is"));
        assert!(!is_valid_email("two@@signs.is"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("spa ce@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let form = ContactForm::from_fields([("company", "Tego"), ("name", "Alda")]);
        assert_eq!(form.name.as_deref(), Some("Alda"));
        assert_eq!(form.email, None);
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// Raw registration form payload, exactly as the browser posted it.
/// Missing fields bind as empty strings so validation owns all the rules.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Per-field validation messages for re-rendering the form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Validated registration input. The email is normalized; the password is the
/// plaintext to hash, which never travels through the entity layer.
#[derive(Debug)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl RegisterForm {
    /// Pure validation: trims and lowercases the email, checks every field,
    /// and either returns the validated input or the full error set.
    pub fn validate(&self) -> Result<ValidRegistration, FormErrors> {
        let email = self.email.trim().to_lowercase();
        let mut errors = FormErrors::default();

        if email.is_empty() {
            errors.email = Some("L'adresse e-mail est obligatoire".into());
        } else if !is_valid_email(&email) {
            errors.email = Some("L'adresse e-mail n'est pas valide".into());
        }

        if self.password.is_empty() {
            errors.password = Some("Le mot de passe est obligatoire".into());
        } else if self.password.len() < 8 {
            errors.password = Some("Le mot de passe doit contenir au moins 8 caractères".into());
        }

        if self.confirm_password != self.password {
            errors.confirm_password = Some("Les mots de passe ne correspondent pas".into());
        }

        if errors.is_empty() {
            Ok(ValidRegistration {
                email,
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

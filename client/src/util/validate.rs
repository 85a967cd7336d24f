//! Client-side field validation for the login and details forms.
//!
//! DESIGN
//! ======
//! Validation runs before any network call. Each failing field yields a
//! `FieldError`; a form is submittable only when the collected
//! `Validation` is empty.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const USERNAME_REQUIRED: &str = "Username is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid Gmail address.";
pub const SUBJECT_REQUIRED: &str = "Favorite subject is required.";

/// Form fields that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
    FavoriteSubject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Ordered list of field errors produced by one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation(Vec<FieldError>);

impl Validation {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn require(&mut self, ok: bool, field: Field, message: &'static str) {
        if !ok {
            self.0.push(FieldError { field, message });
        }
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Validation {
    let mut v = Validation::default();
    v.require(!username.is_empty(), Field::Username, USERNAME_REQUIRED);
    v.require(!password.is_empty(), Field::Password, PASSWORD_REQUIRED);
    v
}

pub fn validate_details(email: &str, favorite_subject: &str) -> Validation {
    let mut v = Validation::default();
    v.require(is_valid_email(email), Field::Email, EMAIL_INVALID);
    v.require(!favorite_subject.is_empty(), Field::FavoriteSubject, SUBJECT_REQUIRED);
    v
}

/// Generic `local@domain.tld` shape check. Any domain is accepted.
///
/// Local part: `A-Z a-z 0-9 _ ' + - .`, may not start with `.`, must end in
/// an alphanumeric or `_ + -`. Domain: one or more labels that start with an
/// alphanumeric and continue with alphanumerics or `-`, followed by an
/// alphabetic TLD of at least two letters. `..` is rejected anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.contains("..") {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };
    !local.starts_with('.')
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && (last.is_ascii_alphanumeric() || "_+-".contains(last))
}

fn valid_domain(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let labels_ok = labels.split('.').all(|label| {
        let mut chars = label.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

use crate::model::{Team, User};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Team,
    TotalPoints,
}

impl UserField {
    /// Name of the field on the wire and in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Team => "team",
            UserField::TotalPoints => "total_points",
        }
    }
}

pub type FormErrors = BTreeMap<UserField, String>;

/// Local, not yet submitted copy of a [`User`].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    /// Empty means "no team".
    pub team: String,
    pub total_points: i64,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        UserDraft {
            name: user.name.clone(),
            email: user.email.clone(),
            team: user.team.clone().unwrap_or_default(),
            total_points: user.total_points,
        }
    }
}

impl UserDraft {
    pub fn set(&mut self, field: UserField, raw: &str) {
        match field {
            UserField::Name => self.name = raw.to_string(),
            UserField::Email => self.email = raw.to_string(),
            UserField::Team => self.team = raw.to_string(),
            UserField::TotalPoints => self.total_points = parse_int(raw),
        }
    }

    pub fn value(&self, field: UserField) -> String {
        match field {
            UserField::Name => self.name.clone(),
            UserField::Email => self.email.clone(),
            UserField::Team => self.team.clone(),
            UserField::TotalPoints => self.total_points.to_string(),
        }
    }

    pub fn validate(&self, teams: &[Team]) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(UserField::Name, "Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.insert(UserField::Email, "Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.insert(UserField::Email, "Invalid email format".to_string());
        }

        if !self.team.is_empty() && !teams.iter().any(|team| team.name == self.team) {
            errors.insert(UserField::Team, "Selected team does not exist".to_string());
        }

        if self.total_points < 0 {
            errors.insert(
                UserField::TotalPoints,
                "Total points cannot be negative".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Partial update carrying only the fields that differ from `original`.
    pub fn changes(&self, original: &User) -> UserPatch {
        let team = if self.team.is_empty() {
            None
        } else {
            Some(self.team.clone())
        };
        let original_team = original.team.clone().filter(|team| !team.is_empty());

        UserPatch {
            name: (self.name != original.name).then(|| self.name.clone()),
            email: (self.email != original.email).then(|| self.email.clone()),
            team: (team != original_team).then_some(team),
            total_points: (self.total_points != original.total_points)
                .then_some(self.total_points),
        }
    }
}

/// Body of a `PATCH /users/{id}/` request.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `Some(None)` clears the team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.team.is_none()
            && self.total_points.is_none()
    }
}

/// Integer coercion for the points input: optional sign and leading digits,
/// anything without digits becomes 0. Digit runs past the `i64` range
/// saturate.
pub fn parse_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return 0;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    match signed.parse::<i64>() {
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// `local@domain.tld` with no whitespace or extra `@`. Whitespace is the
/// ECMAScript `\s` set rather than Rust's `char::is_whitespace`.
const EMAIL_PATTERN: &str = concat!(
    r"^[^@\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    r"@[^@\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    r"\.[^@\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$",
);

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
        .is_match(email)
}

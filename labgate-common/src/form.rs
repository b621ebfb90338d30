//! Login form state and the rules that mutate it

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Prefix of the banner shown after a simulated login
pub const WELCOME_PREFIX: &str = "Welcome back! Successfully logged in as ";

/// The two inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Identifier, // email or username
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Identifier, Field::Password];

    /// Value of the `name` and `id` attributes
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Identifier => "Email or Username",
            Self::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Identifier => "Enter your email or username",
            Self::Password => "Enter your password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Identifier => "text",
            Self::Password => "password",
        }
    }

    /// Message recorded when the trimmed value is empty
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Identifier => "Email or username is required",
            Self::Password => "Password is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identifier" => Ok(Self::Identifier),
            "password" => Ok(Self::Password),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// Raw field values, stored exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub identifier: String,
    pub password: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Identifier => self.identifier = value,
            Field::Password => self.password = value,
        }
    }

    pub fn clear(&mut self) {
        self.identifier.clear();
        self.password.clear();
    }
}

/// Validation errors keyed by field. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the entry for `field`, returning whether one was present
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient banner shown after a submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Glyph rendered in front of the text
    pub fn icon(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "✓ ",
            StatusKind::Error => "✗ ",
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials accepted; the caller schedules the reset.
    Accepted { identifier: String },
    /// At least one field failed presence validation.
    Rejected { invalid: Vec<Field> },
    /// The form is locked behind a status message.
    Ignored,
}

/// Field values, validation errors and the status banner of one login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    values: FormState,
    errors: ErrorMap,
    status: Option<StatusMessage>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Inputs and the submit control are disabled while a status is shown
    pub fn is_locked(&self) -> bool {
        self.status.is_some()
    }

    /// Store a keystroke and drop that field's error.
    ///
    /// Returns `false` when the form is locked and the value was not stored.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.values.set(field, value.into());
        if self.errors.clear_field(field) {
            tracing::debug!(field = %field, "cleared validation error on edit");
        }
        true
    }

    /// Same as [`LoginForm::change`] for a field addressed by its `name` attribute
    pub fn change_by_name(&mut self, name: &str, value: impl Into<String>) -> crate::Result<bool> {
        let field = name.parse::<Field>()?;
        Ok(self.change(field, value))
    }

    /// Presence check of the current values, without touching state
    pub fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::default();
        for field in Field::ALL {
            if self.values.get(field).trim().is_empty() {
                errors.insert(field, field.required_message());
            }
        }
        errors
    }

    /// Validate, replace the error map and, if everything is present, show
    /// the welcome banner. Any non-empty credentials are accepted.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_locked() {
            tracing::debug!("submit ignored while status message is shown");
            return SubmitOutcome::Ignored;
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            let invalid: Vec<Field> = self.errors.fields().collect();
            tracing::debug!(?invalid, "login form failed validation");
            return SubmitOutcome::Rejected { invalid };
        }

        let identifier = self.values.identifier.clone();
        self.status = Some(StatusMessage::success(format!("{}{}", WELCOME_PREFIX, identifier)));
        tracing::info!(identifier = %identifier, "simulated login accepted");

        SubmitOutcome::Accepted { identifier }
    }

    /// Deferred reset after a successful submit: empty both fields and
    /// drop the status message.
    pub fn reset(&mut self) {
        self.values.clear();
        self.status = None;
    }
}

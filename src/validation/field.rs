//! Field identifiers and value snapshots

use std::fmt;

/// Logical fields of the signup form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Age,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in the order they appear on the form
    pub const ALL: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Age,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Stable identifier of the input
    pub fn id(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::Age => "Age",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Inline hint shown while the field is in the errored state
    pub fn hint(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your first and last name",
            Self::Email => "Enter a valid email address",
            Self::Phone => "Enter a valid phone number",
            Self::Age => "Age must be between 13 and 120",
            Self::Password => "8+ chars with upper, lower and digit",
            Self::ConfirmPassword => "Passwords do not match",
        }
    }

    /// Whether the value should be masked when rendered or logged
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Position of the field in form order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Age => 3,
            Self::Password => 4,
            Self::ConfirmPassword => 5,
        }
    }

    /// Look up a field by its position in form order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up a field by its stable identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Snapshot of every field's current text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    /// Borrow the text of one field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Age => &self.age,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Age => &mut self.age,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FormValues::set`]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_id(field.id()), Some(field));
        }
        assert_eq!(FieldName::from_id("nickname"), None);
    }

    #[test]
    fn test_index_matches_form_order() {
        for (idx, field) in FieldName::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
            assert_eq!(FieldName::from_index(idx), Some(*field));
        }
        assert_eq!(FieldName::from_index(6), None);
    }

    #[test]
    fn test_only_password_fields_are_secret() {
        let secret: Vec<_> = FieldName::ALL.into_iter().filter(|f| f.is_secret()).collect();
        assert_eq!(
            secret,
            vec![FieldName::Password, FieldName::ConfirmPassword]
        );
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(FieldName::ConfirmPassword.to_string(), "confirmPassword");
    }

    #[test]
    fn test_set_and_get() {
        let mut values = FormValues::default();
        values.set(FieldName::Age, "42");
        assert_eq!(values.get(FieldName::Age), "42");
        assert_eq!(values.age, "42");
        assert_eq!(values.get(FieldName::Email), "");
    }

    #[test]
    fn test_with_builder() {
        let values = FormValues::default()
            .with(FieldName::FullName, "Ada Lovelace")
            .with(FieldName::Phone, "+44 20 7946 0000");
        assert_eq!(values.full_name, "Ada Lovelace");
        assert_eq!(values.phone, "+44 20 7946 0000");
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Report form fields. Every field may be blank except the site at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportForm {
    pub name: String,
    pub email: String,
    pub site: String,
    pub department: String,
    pub message: String,
}

/// Addressable form field, used by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Site,
    Department,
    Message,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "site" => Ok(FormField::Site),
            "department" => Ok(FormField::Department),
            "message" => Ok(FormField::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

impl ReportForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Site => self.site = value,
            FormField::Department => self.department = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn has_site(&self) -> bool {
        !self.site.trim().is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

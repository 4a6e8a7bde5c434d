//! Named form fields
//!
//! The page exposes its inputs by `name` attribute. Everything in the core
//! refers to them through [`Field`] so the names live in one place.

use std::collections::HashMap;
use std::fmt;

/// A named input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    ProjectType,
    Description,
    /// Hidden honeypot input. Humans never see it.
    Website,
}

impl Field {
    /// Fields validated on submit, in the order they are checked
    pub const VALIDATED: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::ProjectType,
        Field::Description,
    ];

    /// The `name` attribute of the input in the page markup
    pub fn dom_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::ProjectType => "projectType",
            Field::Description => "description",
            Field::Website => "website",
        }
    }

    /// Look a field up by its `name` attribute
    pub fn from_dom_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "phone" => Some(Field::Phone),
            "email" => Some(Field::Email),
            "projectType" => Some(Field::ProjectType),
            "description" => Some(Field::Description),
            "website" => Some(Field::Website),
            _ => None,
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Navn",
            Field::Phone => "Telefon",
            Field::Email => "E-post",
            Field::ProjectType => "Prosjekt",
            Field::Description => "Beskrivelse",
            Field::Website => "Nettside",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// Raw values of one submit pass, exactly as the inputs held them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub project_type: String,
    pub description: String,
    pub website: String,
}

impl RawSubmission {
    /// Build from form data keyed by `name` attribute.
    ///
    /// Missing inputs read as empty strings and unknown keys are ignored.
    pub fn from_form_data<K, V>(data: &HashMap<K, V>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw = RawSubmission::default();
        for (key, value) in data {
            if let Some(field) = Field::from_dom_name(key.as_ref()) {
                *raw.get_mut(field) = value.as_ref().to_string();
            }
        }
        raw
    }

    /// Value of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::ProjectType => &self.project_type,
            Field::Description => &self.description,
            Field::Website => &self.website,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::ProjectType => &mut self.project_type,
            Field::Description => &mut self.description,
            Field::Website => &mut self.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_round_trip() {
        for field in Field::VALIDATED.iter().chain([Field::Website].iter()) {
            assert_eq!(Field::from_dom_name(field.dom_name()), Some(*field));
        }
        assert_eq!(Field::from_dom_name("unknown"), None);
    }

    #[test]
    fn from_form_data_reads_named_inputs() {
        let mut data = HashMap::new();
        data.insert("name", "Jo");
        data.insert("projectType", "Rehab");
        data.insert("submit", "ignored");

        let raw = RawSubmission::from_form_data(&data);
        assert_eq!(raw.name, "Jo");
        assert_eq!(raw.project_type, "Rehab");
        assert_eq!(raw.phone, "");
        assert_eq!(raw.website, "");
    }
}

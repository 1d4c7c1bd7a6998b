// Application field collection shared between the host and the codecs
// Ordered (name, value) pairs; names are not unique and lookup is first-match

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value carried by an application field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Blob(#[serde(with = "base64_blob")] Vec<u8>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Blob(_) => None,
        }
    }

    /// Raw bytes of the value; text is taken as its UTF-8 encoding
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FieldValue::Text(s) => s.as_bytes(),
            FieldValue::Blob(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Blob(b) => write!(f, "{}", STANDARD.encode(b)),
        }
    }
}

/// A single named application field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppField {
    pub name: String,
    pub value: FieldValue,
}

/// Ordered collection of application fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppFields {
    fields: Vec<AppField>,
}

impl AppFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(AppField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
    }

    /// Append a binary field
    pub fn add_blob(&mut self, name: impl Into<String>, data: &[u8]) {
        self.fields.push(AppField {
            name: name.into(),
            value: FieldValue::Blob(data.to_vec()),
        });
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at position `index`
    pub fn get(&self, index: usize) -> Option<&AppField> {
        self.fields.get(index)
    }

    /// First field called `name`
    pub fn find(&self, name: &str) -> Option<&AppField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Value of the first field called `name`
    pub fn value_of(&self, name: &str) -> Option<&FieldValue> {
        self.find(name).map(|f| &f.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppField> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a AppFields {
    type Item = &'a AppField;
    type IntoIter = std::slice::Iter<'a, AppField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AppFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = AppFields::new();
        for (name, value) in iter {
            fields.add_field(name, value);
        }
        fields
    }
}

mod base64_blob {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

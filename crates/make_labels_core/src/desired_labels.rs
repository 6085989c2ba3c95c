//! Desired label definitions loaded from a JSON file.
//!
//! The file holds an array of objects:
//!
//! ```json
//! [
//!   { "Name": "bug", "Color": "d73a4a", "Description": "Something isn't working" },
//!   { "Name": "good first issue", "Color": "7057ff", "Description": "" }
//! ]
//! ```
//!
//! Keys are matched case-insensitively, so `name`, `Name` and `NAME` are all
//! accepted; when several keys match the same field the last one wins. Missing
//! fields are empty strings, non-string values are skipped and unknown keys are
//! ignored. Nothing else is validated; GitHub rejects bad colors when
//! the label is created or updated.

use std::{fmt, fs, path::Path};

use serde::{
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{Error, MakeLabelsResult};

#[cfg(test)]
#[path = "desired_labels_tests.rs"]
mod tests;

/// A label as declared in the label file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DesiredLabel {
    /// Label name, used as-is in create and update requests.
    pub name: String,

    /// Label color (hex code without #).
    pub color: String,

    /// Label description.
    pub description: String,
}

impl DesiredLabel {
    /// Creates a desired label.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }

    fn assign(&mut self, key: &str, value: Value) {
        let Value::String(text) = value else {
            return;
        };
        match key.to_lowercase().as_str() {
            "name" => self.name = text,
            "color" => self.color = text,
            "description" => self.description = text,
            _ => {}
        }
    }
}

impl<'de> Deserialize<'de> for DesiredLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DesiredLabelVisitor)
    }
}

/// Reads label objects key by key in document order, so the last of several
/// keys matching the same field wins. Values that are not strings leave the
/// field untouched, and elements that are not objects give an empty label.
struct DesiredLabelVisitor;

impl<'de> Visitor<'de> for DesiredLabelVisitor {
    type Value = DesiredLabel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a label object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut label = DesiredLabel::default();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<Value>()?;
            label.assign(&key, value);
        }
        Ok(label)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(DesiredLabel::default())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DesiredLabel::default())
    }
}

/// Parses the content of a label file.
///
/// # Errors
///
/// Returns `Error::ParseLabels` if the content is not valid JSON or its top
/// level is not an array. An empty document is reported the same way.
pub fn parse_desired_labels(content: &str) -> MakeLabelsResult<Vec<DesiredLabel>> {
    let labels: Vec<DesiredLabel> = serde_json::from_str(content)?;
    debug!(count = labels.len(), "Parsed desired labels");
    Ok(labels)
}

/// Reads and parses the label file at `path`.
///
/// # Errors
///
/// Returns `Error::LoadFile` if the file cannot be read, and
/// `Error::ParseLabels` if its content is not a JSON array.
pub fn load_desired_labels(path: &Path) -> MakeLabelsResult<Vec<DesiredLabel>> {
    debug!("Loading desired labels from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| Error::LoadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let labels = parse_desired_labels(&content)?;
    info!(count = labels.len(), "Loaded desired labels from {:?}", path);
    Ok(labels)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Reserved prefix on backend-managed metadata fields (`$id`, `$createdAt`, ...).
pub const META_PREFIX: char = '$';

/// The authenticated account as returned by the identity API.
///
/// The service returns many more fields; only the display name is ever
/// interpreted, so everything beyond the identity triple is dropped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    /// Unique account identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Display name shown in the dashboard header.
    #[serde(default)]
    pub name: String,
    /// Login email address.
    #[serde(default)]
    pub email: String,
}

/// One document from a collection: a stable id plus an arbitrary field map.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Unique document identifier, rendered separately as the row key.
    #[serde(rename = "$id")]
    pub id: String,
    /// Every other field, including further `$`-prefixed metadata.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Fields safe to show in the record body: everything not `$`-prefixed.
    #[must_use]
    pub fn display_fields(&self) -> serde_json::Map<String, serde_json::Value> {
        self.fields
            .iter()
            .filter(|(key, _)| !key.starts_with(META_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Pretty-printed JSON of the displayable fields.
    #[must_use]
    pub fn display_json(&self) -> String {
        serde_json::to_string_pretty(&serde_json::Value::Object(self.display_fields()))
            .unwrap_or_default()
    }
}

/// Response envelope of the list-documents endpoint.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RecordList {
    /// Total number of documents in the collection.
    #[serde(default)]
    pub total: u64,
    /// The documents, in the order the service returned them.
    pub documents: Vec<Record>,
}

/// Error payload returned by the backend on non-2xx responses.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
}

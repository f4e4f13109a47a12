//! Article entity as stored in the content database.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON field that remembers whether it was present.
///
/// - `None` - key absent from the record
/// - `Some(None)` - key present with an explicit `null`
/// - `Some(Some(v))` - key present with value `v`
pub type Field = Option<Option<Value>>;

/// A single record from the content database.
///
/// The database is edited by hand and by other tools, so no field is
/// required and none is type-checked. Values are carried through verbatim;
/// only `publishDate` is ever interpreted (see [`crate::domain::PublishDate`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub intro: Field,

    /// When the article goes live. Absent or `null` means immediately.
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Field,

    /// Site-relative path of the article page. Exposed publicly as `link`.
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub web_path: Field,

    /// Path of the article's cover image. Exposed publicly as `image`.
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_root_path: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Field,

    /// Everything else in the record (body, author, tags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Raw publish date value, if the record carries a non-null one.
    pub fn publish_date_value(&self) -> Option<&Value> {
        self.publish_date.as_ref().and_then(Option::as_ref)
    }

    /// Human-readable identifier for logs and tables.
    pub fn id_label(&self) -> String {
        label(&self.id, "<no id>")
    }

    /// Human-readable title for logs and tables.
    pub fn title_label(&self) -> String {
        label(&self.title, "<untitled>")
    }
}

fn label(field: &Field, missing: &str) -> String {
    match field {
        Some(Some(Value::String(s))) => s.clone(),
        Some(Some(other)) => other.to_string(),
        Some(None) | None => missing.to_string(),
    }
}

//! Public article entity written to the site's article feed.

use serde::{Deserialize, Serialize};

use super::article::{Article, Field};

/// The reduced view of an [`Article`] that the site front end consumes.
///
/// Field order here is the key order of the generated JSON. Each field is
/// copied from the source record without transformation; a field missing
/// from the source is omitted, an explicit `null` stays `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticle {
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

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Field,

    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Field,
}

impl From<&Article> for PublicArticle {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            intro: article.intro.clone(),
            link: article.web_path.clone(),
            image: article.image_root_path.clone(),
            category: article.category.clone(),
            publish_date: article.publish_date.clone(),
        }
    }
}

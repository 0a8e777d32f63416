//! Data Transfer Objects - form payloads submitted by the HTML views.

use serde::{Deserialize, Serialize};

use blogly_core::domain::{PostFields, TagFields, UserFields};

/// Prefix of the checkbox fields selecting tags on the post forms (`tag_<id>`).
pub const TAG_FIELD_PREFIX: &str = "tag_";

/// Field name that may carry a tag id as its value, repeated once per tag.
pub const TAG_LIST_FIELD: &str = "tags";

/// Submitted user form. Every field is optional so that a missing one is a
/// validation failure rather than a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(rename = "first-name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "last-name", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<UserForm> for UserFields {
    fn from(form: UserForm) -> Self {
        Self {
            first_name: form.first_name.unwrap_or_default(),
            last_name: form.last_name.unwrap_or_default(),
            image: form.image,
        }
    }
}

/// Submitted post form with the selected tags parsed into ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag_ids: Vec<i32>,
}

impl PostForm {
    /// Build from raw urlencoded pairs.
    ///
    /// Tags arrive either as `tag_<id>` checkbox names or as repeated
    /// `tags=<id>` values. Anything that does not parse as an id is ignored;
    /// whether the id names an existing tag is decided later.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value: String = value.into();
            match key {
                "title" => form.title = Some(value),
                "content" => form.content = Some(value),
                TAG_LIST_FIELD => {
                    if let Ok(id) = value.trim().parse::<i32>() {
                        form.tag_ids.push(id);
                    }
                }
                _ => {
                    let id = key.strip_prefix(TAG_FIELD_PREFIX).map(str::parse::<i32>);
                    if let Some(Ok(id)) = id {
                        form.tag_ids.push(id);
                    }
                }
            }
        }

        form
    }
}

impl From<PostForm> for PostFields {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title.unwrap_or_default(),
            content: form.content.unwrap_or_default(),
            tag_ids: form.tag_ids,
        }
    }
}

/// Submitted tag form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagForm {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<TagForm> for TagFields {
    fn from(form: TagForm) -> Self {
        Self {
            name: form.name.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_form_from_pairs() {
        let form = PostForm::from_pairs([
            ("title", "Hello"),
            ("content", "World"),
            ("tag_3", "on"),
            ("tag_x", "on"),
            ("tags", "5"),
            ("tags", "five"),
            ("csrf", "ignored"),
        ]);

        assert_eq!(
            form,
            PostForm {
                title: Some("Hello".into()),
                content: Some("World".into()),
                tag_ids: vec![3, 5],
            }
        );
    }

    #[test]
    fn test_post_form_without_tags() {
        let fields: PostFields = PostForm::from_pairs([("title", "T")]).into();

        assert_eq!(fields.title, "T");
        assert_eq!(fields.content, "");
        assert!(fields.tag_ids.is_empty());
    }

    #[test]
    fn test_user_form_missing_fields_become_empty() {
        let form = UserForm {
            first_name: Some("John".into()),
            ..Default::default()
        };
        let fields: UserFields = form.into();

        assert_eq!(fields.first_name, "John");
        assert_eq!(fields.last_name, "");
        assert!(fields.image.is_none());
    }
}

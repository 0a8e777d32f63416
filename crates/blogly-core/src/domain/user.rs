use serde::{Deserialize, Serialize};

use super::required;
use crate::error::DomainError;

/// Placeholder avatar used when a user does not supply one.
pub const DEFAULT_IMAGE_URL: &str = "http://example.com/image.jpg";

/// User entity - an author owning zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the editable fields with an already validated set.
    pub fn apply(&mut self, new: NewUser) {
        self.first_name = new.first_name;
        self.last_name = new.last_name;
        self.image = new.image;
    }
}

/// A validated user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image: String,
}

/// Raw user fields as submitted by a form.
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

impl UserFields {
    /// Presence checks on both names; a blank image falls back to the placeholder.
    pub fn validate(self) -> Result<NewUser, DomainError> {
        let (first_name, last_name) = match (
            required(&self.first_name, "first name"),
            required(&self.last_name, "last name"),
        ) {
            (Ok(first), Ok(last)) => (first, last),
            _ => {
                return Err(DomainError::Validation(
                    "Please provide both first and last names.".to_string(),
                ));
            }
        };

        let image = self
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        Ok(NewUser {
            first_name,
            last_name,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, image: Option<&str>) -> UserFields {
        UserFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            image: image.map(String::from),
        }
    }

    #[test]
    fn test_validate_keeps_supplied_image() {
        let user = fields("John", "Doe", Some("http://example.com/john.jpg"))
            .validate()
            .unwrap();
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.image, "http://example.com/john.jpg");
    }

    #[test]
    fn test_validate_defaults_missing_image() {
        let user = fields("John", "Doe", None).validate().unwrap();
        assert_eq!(user.image, DEFAULT_IMAGE_URL);

        let user = fields("John", "Doe", Some("   ")).validate().unwrap();
        assert_eq!(user.image, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        assert!(matches!(
            fields("John", "", None).validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            fields("  ", "Doe", None).validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_full_name() {
        let user = User {
            id: 1,
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            image: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.full_name(), "Jane Roe");
    }
}

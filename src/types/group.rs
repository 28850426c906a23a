//! Groups and the bot/template resources scoped inside a tenant.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::traits::{PolicyTarget, PublicFlag};

/// A sub-organization within a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

impl Group {
    pub fn new<S: Into<String>>(id: i64, name: S) -> Self {
        Group {
            id,
            name: name.into(),
        }
    }
}

/// An assistant. Bot policies on users point at these by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Bot {
    pub id: i64,
    pub name: String,
}

impl Bot {
    pub fn new<S: Into<String>>(id: i64, name: S) -> Self {
        Bot {
            id,
            name: name.into(),
        }
    }
}

impl PolicyTarget for Bot {
    fn target_id(&self) -> i64 {
        self.id
    }
}

/// A prompt template that is either shared tenant-wide or kept private.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub is_public: bool,
}

impl Template {
    pub fn new<S: Into<String>>(id: i64, name: S, is_public: bool) -> Self {
        Template {
            id,
            name: name.into(),
            is_public,
        }
    }
}

impl PublicFlag for Template {
    fn is_public(&self) -> bool {
        self.is_public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_serialization() {
        let group = Group::new(5, "Support");
        let serialized = serde_json::to_value(&group).unwrap();
        let deserialized: Group = serde_json::from_value(serialized).unwrap();
        assert_eq!(group, deserialized);
    }

    #[test]
    fn test_bot_target_id() {
        assert_eq!(Bot::new(7, "helpdesk").target_id(), 7);
    }

    #[test]
    fn test_template_public_flag() {
        let template: Template =
            serde_json::from_str(r#"{"id": 1, "name": "Greeting", "is_public": true}"#).unwrap();
        assert!(PublicFlag::is_public(&template));
        assert_eq!(template.public_tag(), "true");
        assert_eq!(Template::new(2, "Draft", false).public_tag(), "false");
    }
}

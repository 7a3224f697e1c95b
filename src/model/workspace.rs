// src/model/workspace.rs
//! Users and workspaces, as they appear in record maps.

use super::blocks::Permission;
use crate::types::{BlockId, SpaceId, UserId};
use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionUserValue {
    pub id: UserId,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
}

impl NotionUserValue {
    /// "Given Family", whichever parts are present.
    pub fn full_name(&self) -> Option<String> {
        match (self.given_name.as_deref(), self.family_name.as_deref()) {
            (Some(given), Some(family)) => Some(format!("{} {}", given, family)),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

/// A workspace record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceValue {
    pub id: SpaceId,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Top-level page ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<BlockId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission: Vec<Permission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_composition() {
        let user: NotionUserValue = serde_json::from_value(serde_json::json!({
            "id": "eeeeeeee-0000-4000-8000-000000000001",
            "given_name": "Ada",
            "family_name": "Lovelace"
        }))
        .unwrap();
        assert_eq!(user.full_name().as_deref(), Some("Ada Lovelace"));
    }
}

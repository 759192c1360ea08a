use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::interest_area::InterestArea;
use crate::models::timestamp;

pub const MAX_TITLE_CHARS: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialType {
    Documento,
    Video,
    Link,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [MaterialType::Documento, MaterialType::Video, MaterialType::Link];

    pub fn label(self) -> &'static str {
        match self {
            MaterialType::Documento => "Documento",
            MaterialType::Video => "Vídeo",
            MaterialType::Link => "Link",
        }
    }
}

/// Material de apoyo (parte JSON `material` del multipart)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub material_type: MaterialType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub interest_area: Vec<InterestArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_uploader_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "timestamp::lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "timestamp::lenient")]
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_material_omits_server_fields() {
        let material = Material {
            id: None,
            title: "Guia de Rust".to_string(),
            material_type: MaterialType::Link,
            url: Some("https://doc.rust-lang.org/book/".to_string()),
            file_path: None,
            interest_area: vec![InterestArea::DesenvolvimentoDeSoftware],
            user_uploader_id: None,
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&material).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["materialType"], "LINK");
        assert_eq!(value["interestArea"][0], "DESENVOLVIMENTO_DE_SOFTWARE");
    }

    #[test]
    fn test_material_with_offset_timestamp() {
        let json = r#"{"id":7,"title":"Slides","materialType":"DOCUMENTO","createdAt":"2024-05-01T10:00:00Z","updatedAt":"??"}"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert!(material.created_at.is_some());
        assert_eq!(material.updated_at, None);
    }
}

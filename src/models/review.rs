use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::auth::Role;
use crate::models::timestamp;

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;
pub const MAX_COMMENT_CHARS: usize = 600;

/// Cuerpo de `POST /avaliacoes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub score: i32,
    pub comment: String,
    pub session_id: i64,
    pub reviewer_role: Role,
}

/// Avaliação persistida (nunca se edita ni se borra desde el cliente)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub score: i32,
    #[serde(default)]
    pub comment: String,
    pub session_id: i64,
    pub reviewer_role: Role,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub mentor_id: Option<i64>,
    #[serde(default)]
    pub mentored_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_review_wire_names() {
        let review = NewReview {
            score: 4,
            comment: "Ótima sessão".to_string(),
            session_id: 9,
            reviewer_role: Role::Mentorado,
        };
        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["sessionId"], 9);
        assert_eq!(value["reviewerRole"], "MENTORADO");
        assert_eq!(value["score"], 4);
    }

    #[test]
    fn test_review_parses_datetime_with_millis() {
        let json = r#"{"id":1,"score":5,"comment":"","sessionId":2,"reviewerRole":"MENTOR","createdAt":"2024-05-10T14:30:00.123"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.session_id, 2);
        assert!(review.created_at.is_some());
    }

    #[test]
    fn test_review_list_tolerates_mixed_timestamps() {
        let json = r#"[
            {"id":1,"score":5,"sessionId":10,"reviewerRole":"MENTORADO","createdAt":"2024-05-01T10:00:00Z"},
            {"id":2,"score":4,"sessionId":11,"reviewerRole":"MENTORADO","createdAt":"2024-05-02T09:30:00"},
            {"id":3,"score":3,"sessionId":12,"reviewerRole":"MENTORADO","createdAt":"sem data"},
            {"id":4,"score":2,"sessionId":13,"reviewerRole":"MENTORADO","createdAt":null}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        let sessions: Vec<i64> = reviews.iter().map(|r| r.session_id).collect();
        assert_eq!(sessions, vec![10, 11, 12, 13]);
        assert!(reviews[0].created_at.is_some());
        assert!(reviews[1].created_at.is_some());
        assert_eq!(reviews[2].created_at, None);
        assert_eq!(reviews[3].created_at, None);
    }
}

use crate::error::ReviewFormError;
use crate::models::review::{MAX_COMMENT_CHARS, MAX_SCORE, MIN_SCORE};
use crate::models::{NewReview, Role, SessionStatus};
use crate::utils::constants::DEFAULT_REVIEW_SCORE;

/// Formulario de avaliação (nota 1..5 + comentario opcional)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub score: i32,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            score: DEFAULT_REVIEW_SCORE,
            comment: String::new(),
        }
    }
}

impl ReviewForm {
    pub fn validate(&self) -> Result<(), ReviewFormError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(ReviewFormError::ScoreOutOfRange(self.score));
        }
        // Límite en caracteres, no en bytes
        let chars = self.comment.chars().count();
        if chars > MAX_COMMENT_CHARS {
            return Err(ReviewFormError::CommentTooLong(chars));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_review(&self, session_id: i64, reviewer_role: Role) -> Result<NewReview, ReviewFormError> {
        self.validate()?;
        Ok(NewReview {
            score: self.score,
            comment: self.comment.clone(),
            session_id,
            reviewer_role,
        })
    }

    pub fn remaining_chars(&self) -> i64 {
        MAX_COMMENT_CHARS as i64 - self.comment.chars().count() as i64
    }
}

/// Formulario de cambio de estado
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdateForm {
    pub new_status: Option<SessionStatus>,
}

/// Estrellas 1..=5 para el selector de nota
pub fn star_values() -> impl Iterator<Item = i32> {
    MIN_SCORE..=MAX_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = ReviewForm::default();
        assert_eq!(form.score, 5);
        assert!(form.comment.is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_score_bounds() {
        for score in [0, 6, -1] {
            let form = ReviewForm { score, comment: String::new() };
            assert_eq!(form.validate(), Err(ReviewFormError::ScoreOutOfRange(score)));
        }
        for score in 1..=5 {
            assert!(ReviewForm { score, comment: String::new() }.is_valid());
        }
    }

    #[test]
    fn test_comment_limit_counts_chars() {
        // 600 caracteres multibyte siguen siendo válidos
        let form = ReviewForm { score: 4, comment: "é".repeat(600) };
        assert!(form.is_valid());
        assert_eq!(form.remaining_chars(), 0);

        let form = ReviewForm { score: 4, comment: "a".repeat(601) };
        assert_eq!(form.validate(), Err(ReviewFormError::CommentTooLong(601)));
    }

    #[test]
    fn test_to_review() {
        let form = ReviewForm { score: 3, comment: "ok".to_string() };
        let review = form.to_review(42, Role::Mentorado).unwrap();
        assert_eq!(review.session_id, 42);
        assert_eq!(review.score, 3);
        assert_eq!(review.reviewer_role, Role::Mentorado);

        let bad = ReviewForm { score: 0, comment: String::new() };
        assert!(bad.to_review(42, Role::Mentorado).is_err());
    }

    #[test]
    fn test_star_values() {
        assert_eq!(star_values().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}

// ============================================================================
// FEEDBACK STATE - Avaliações recibidas
// ============================================================================

use crate::error::ApiError;
use crate::models::review::MAX_SCORE;
use crate::models::Review;

#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl FeedbackState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    pub fn set_reviews(&mut self, result: Result<Vec<Review>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut reviews) => {
                reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.reviews = reviews;
            }
            Err(e) => {
                log::error!("❌ [FEEDBACK] Error cargando avaliações: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn average_score(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i32 = self.reviews.iter().map(|r| r.score).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

/// Cinco posiciones; `true` = estrella llena
pub fn stars(score: i32) -> [bool; MAX_SCORE as usize] {
    std::array::from_fn(|i| (i as i32) < score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), [true, true, true, false, false]);
        assert_eq!(stars(0), [false; 5]);
        assert_eq!(stars(5), [true; 5]);
    }

    #[test]
    fn test_load_error_sets_message() {
        let mut state = FeedbackState::default();
        state.begin_load();
        state.set_reviews(Err(ApiError::Network("offline".to_string())));
        assert!(!state.loading);
        assert!(state.error_message.is_some());
        assert_eq!(state.average_score(), None);
    }
}

pub mod auth;
pub mod session;
pub mod review;
pub mod interest_area;
pub mod profile;
pub mod material;
pub mod timestamp;

pub use auth::{CurrentUser, LoginRequest, LoginResponse, Role};
pub use session::{MentorshipSession, SessionStatus};
pub use review::{NewReview, Review};
pub use interest_area::InterestArea;
pub use profile::{Mentor, Mentored};
pub use material::{Material, MaterialType};

//! User and credential models for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (UUID v4, also used as document ID)
    pub user_id: String,
    /// Login name, unique and immutable after signup
    pub username: String,
    /// Email address
    pub email: String,
    /// Display name
    pub nickname: String,
    /// Profile picture URL
    pub profile_image: Option<String>,
    /// Weekly training goal (free-form, e.g. "20km")
    pub weekly_goal: Option<String>,
    /// When the account was created (RFC3339)
    pub created_at: String,
}

/// Login credential stored in Firestore, keyed by username.
///
/// Kept in its own collection so that creating the document doubles as the
/// username-uniqueness check, and so profile reads never touch the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Login name (also the document ID)
    pub username: String,
    /// Owning user ID
    pub user_id: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(max = 64))]
    pub nickname: Option<String>,
    #[validate(length(max = 512))]
    pub profile_image: Option<String>,
    #[validate(length(max = 64))]
    pub weekly_goal: Option<String>,
}

impl ProfileUpdate {
    /// Apply the supplied fields to a user, leaving absent fields untouched.
    ///
    /// Username, email and password are not reachable through this path.
    pub fn apply(&self, user: &mut User) {
        if let Some(nickname) = &self.nickname {
            user.nickname = nickname.clone();
        }
        if let Some(profile_image) = &self.profile_image {
            user.profile_image = Some(profile_image.clone());
        }
        if let Some(weekly_goal) = &self.weekly_goal {
            user.weekly_goal = Some(weekly_goal.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.profile_image.is_none() && self.weekly_goal.is_none()
    }
}

use serde::{Deserialize, Serialize};

/// Extended profile attached to a user. `user_id` is not checked against
/// the `Users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: i64,
    pub user_id: i64,
    pub bio: String,
    pub birthdate: String,
    pub location: Option<String>,
    pub profile_picture_url: Option<String>,
}

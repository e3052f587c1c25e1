use serde::{Deserialize, Serialize};

/// A weighted personal value or interest attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInterest {
    pub value_interest_id: i64,
    pub user_id: i64,
    pub category: String,
    pub value: String,
    /// No bounds are enforced.
    pub importance: i64,
}

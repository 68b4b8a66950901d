use crate::db::models::users::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

impl From<User> for UserResponse {
    fn from(record: User) -> Self {
        Self {
            username: record.username,
            name: record.name,
            avatar_url: record.avatar_url,
        }
    }
}

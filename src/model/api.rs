use serde::{Deserialize, Serialize};

/// JSON body returned for failed API requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Host roles currently held by the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRolesDto {
    pub user_id: i32,
    pub roles: Vec<String>,
}

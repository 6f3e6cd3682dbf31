use serde::{Deserialize, Serialize};

/// An authenticated account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.username)
    }
}

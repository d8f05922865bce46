use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SignupRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session-storage flag set after a successful login. The panel is
/// gated on its presence, so a reload keeps the session until the tab
/// closes.
pub const ADMIN_SESSION_KEY: &str = "admin_logged_in";

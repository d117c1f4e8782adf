use serde::{Deserialize, Serialize};

/// Minimal acknowledgement returned by mutating actions. Error bodies
/// share this shape, with `message` carrying the reason shown to the
/// user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

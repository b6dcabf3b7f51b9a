use serde::Serialize;

/// Caller identity resolved by the surrounding authentication layer.
/// Threaded explicitly through every core operation; there is no
/// ambient "current user" state.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub user_id: i64,
    pub email: String,
}

impl Identity {
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

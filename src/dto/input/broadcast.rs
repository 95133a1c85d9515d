use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Broadcast {
    pub title: String,
    pub message: String,
    pub target_role: Option<TargetRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
    All,
    User,
    Moderator,
    Admin,
}

impl TargetRole {
    ///
    /// Role stored in the users directory, `None` when every role matches
    ///
    pub fn role_filter(&self) -> Option<&'static str> {
        match self {
            TargetRole::All => None,
            TargetRole::User => Some("user"),
            TargetRole::Moderator => Some("moderator"),
            TargetRole::Admin => Some("admin"),
        }
    }
}

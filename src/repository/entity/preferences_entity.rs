use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct PreferencesInsertEntity {
    pub user_id: Uuid,
    pub goal_liked: bool,
    pub goal_commented: bool,
    pub goal_referenced: bool,
    pub post_liked: bool,
    pub post_commented: bool,
    pub biography_commented: bool,
    pub new_follower: bool,
    pub story_featured: bool,
    pub goal_completed: bool,
    pub email_digest: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

///
/// Flags missing from an older document fall back to defaults
///
#[derive(Deserialize)]
pub struct PreferencesFindEntity {
    #[serde(default = "enabled")]
    pub goal_liked: bool,
    #[serde(default = "enabled")]
    pub goal_commented: bool,
    #[serde(default = "enabled")]
    pub goal_referenced: bool,
    #[serde(default = "enabled")]
    pub post_liked: bool,
    #[serde(default = "enabled")]
    pub post_commented: bool,
    #[serde(default = "enabled")]
    pub biography_commented: bool,
    #[serde(default = "enabled")]
    pub new_follower: bool,
    #[serde(default = "enabled")]
    pub story_featured: bool,
    #[serde(default = "enabled")]
    pub goal_completed: bool,
    #[serde(default)]
    pub email_digest: bool,
}

fn enabled() -> bool {
    true
}

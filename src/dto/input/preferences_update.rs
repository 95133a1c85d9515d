use crate::dto::PreferenceFlag;
use serde::Deserialize;

///
/// Partial update of notification preferences.
/// Fields that are not present stay unchanged, unknown fields are ignored.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreferencesUpdate {
    pub goal_liked: Option<bool>,
    pub goal_commented: Option<bool>,
    pub goal_referenced: Option<bool>,
    pub post_liked: Option<bool>,
    pub post_commented: Option<bool>,
    pub biography_commented: Option<bool>,
    pub new_follower: Option<bool>,
    pub story_featured: Option<bool>,
    pub goal_completed: Option<bool>,
    pub email_digest: Option<bool>,
}

impl PreferencesUpdate {
    ///
    /// Flags that are present in the update together with their new values
    ///
    pub fn changes(&self) -> Vec<(PreferenceFlag, bool)> {
        [
            (PreferenceFlag::GoalLiked, self.goal_liked),
            (PreferenceFlag::GoalCommented, self.goal_commented),
            (PreferenceFlag::GoalReferenced, self.goal_referenced),
            (PreferenceFlag::PostLiked, self.post_liked),
            (PreferenceFlag::PostCommented, self.post_commented),
            (PreferenceFlag::BiographyCommented, self.biography_commented),
            (PreferenceFlag::NewFollower, self.new_follower),
            (PreferenceFlag::StoryFeatured, self.story_featured),
            (PreferenceFlag::GoalCompleted, self.goal_completed),
            (PreferenceFlag::EmailDigest, self.email_digest),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.map(|value| (flag, value)))
        .collect()
    }
}

use crate::{dto::PreferenceFlag, repository::entity::PreferencesFindEntity};

///
/// Stored notification preferences of a single user
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
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
}

impl Preferences {
    pub fn is_enabled(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::GoalLiked => self.goal_liked,
            PreferenceFlag::GoalCommented => self.goal_commented,
            PreferenceFlag::GoalReferenced => self.goal_referenced,
            PreferenceFlag::PostLiked => self.post_liked,
            PreferenceFlag::PostCommented => self.post_commented,
            PreferenceFlag::BiographyCommented => self.biography_commented,
            PreferenceFlag::NewFollower => self.new_follower,
            PreferenceFlag::StoryFeatured => self.story_featured,
            PreferenceFlag::GoalCompleted => self.goal_completed,
            PreferenceFlag::EmailDigest => self.email_digest,
        }
    }
}

///
/// Every notification type is enabled, email digest is opt-in
///
impl Default for Preferences {
    fn default() -> Self {
        Self {
            goal_liked: true,
            goal_commented: true,
            goal_referenced: true,
            post_liked: true,
            post_commented: true,
            biography_commented: true,
            new_follower: true,
            story_featured: true,
            goal_completed: true,
            email_digest: false,
        }
    }
}

impl From<PreferencesFindEntity> for Preferences {
    fn from(value: PreferencesFindEntity) -> Self {
        Self {
            goal_liked: value.goal_liked,
            goal_commented: value.goal_commented,
            goal_referenced: value.goal_referenced,
            post_liked: value.post_liked,
            post_commented: value.post_commented,
            biography_commented: value.biography_commented,
            new_follower: value.new_follower,
            story_featured: value.story_featured,
            goal_completed: value.goal_completed,
            email_digest: value.email_digest,
        }
    }
}

use crate::repository;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
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

impl From<repository::Preferences> for Preferences {
    fn from(value: repository::Preferences) -> Self {
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

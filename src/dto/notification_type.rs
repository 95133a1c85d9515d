use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

///
/// Every kind of notification the platform produces.
///
/// Serialized (JSON and BSON) as snake_case strings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationType {
    GoalCompleted,
    GoalLiked,
    GoalCommented,
    GoalReferenced,
    NewFollower,
    StoryFeatured,
    BiographyCommented,
    PostLiked,
    PostCommented,
    CoreStoryLiked,
    CoreStoryCommented,
    OneLinerLiked,
    OneLinerCommented,
    StoryLiked,
    StoryCommented,
    SystemAnnouncement,
}

impl NotificationType {
    ///
    /// Preference flag that controls this type.
    ///
    /// `None` means the type cannot be disabled by the recipient.
    ///
    pub fn preference_flag(&self) -> Option<PreferenceFlag> {
        match self {
            NotificationType::GoalCompleted => Some(PreferenceFlag::GoalCompleted),
            NotificationType::GoalLiked => Some(PreferenceFlag::GoalLiked),
            NotificationType::GoalCommented => Some(PreferenceFlag::GoalCommented),
            NotificationType::GoalReferenced => Some(PreferenceFlag::GoalReferenced),
            NotificationType::NewFollower => Some(PreferenceFlag::NewFollower),
            NotificationType::StoryFeatured => Some(PreferenceFlag::StoryFeatured),
            NotificationType::BiographyCommented => Some(PreferenceFlag::BiographyCommented),
            NotificationType::PostLiked => Some(PreferenceFlag::PostLiked),
            NotificationType::PostCommented => Some(PreferenceFlag::PostCommented),
            NotificationType::CoreStoryLiked
            | NotificationType::CoreStoryCommented
            | NotificationType::OneLinerLiked
            | NotificationType::OneLinerCommented
            | NotificationType::StoryLiked
            | NotificationType::StoryCommented
            | NotificationType::SystemAnnouncement => None,
        }
    }
}

///
/// Per-user on/off switches stored in notification preferences.
///
/// Names match the field names of the stored document.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PreferenceFlag {
    GoalLiked,
    GoalCommented,
    GoalReferenced,
    PostLiked,
    PostCommented,
    BiographyCommented,
    NewFollower,
    StoryFeatured,
    GoalCompleted,
    EmailDigest,
}

///
/// Subset of [NotificationType] that goes through like aggregation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeNotificationType {
    GoalLiked,
    PostLiked,
}

impl LikeNotificationType {
    ///
    /// Human readable name of the liked object
    ///
    pub fn target_kind(&self) -> &'static str {
        match self {
            LikeNotificationType::GoalLiked => "goal",
            LikeNotificationType::PostLiked => "post",
        }
    }
}

impl From<LikeNotificationType> for NotificationType {
    fn from(value: LikeNotificationType) -> Self {
        match value {
            LikeNotificationType::GoalLiked => NotificationType::GoalLiked,
            LikeNotificationType::PostLiked => NotificationType::PostLiked,
        }
    }
}

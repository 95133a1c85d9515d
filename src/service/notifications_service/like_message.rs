///
/// Title of a freshly created like notification
///
pub fn like_title(target_kind: &str) -> String {
    format!("Your {target_kind} got a like")
}

///
/// Message of a like notification.
/// `other_actors` counts distinct actors besides the most recent one.
///
pub fn like_message(
    actor_name: &str,
    other_actors: u64,
    target_kind: &str,
    target_title: &str,
) -> String {
    match other_actors {
        0 => format!("{actor_name} liked your {target_kind} '{target_title}'"),
        n => format!("{actor_name} and {n} others liked your {target_kind} '{target_title}'"),
    }
}

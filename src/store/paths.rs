//! Hierarchical key construction for the remote document store.
//!
//! Group codes and nicknames are user input; a raw `/` inside one would
//! address a sibling key, so every segment is escaped before interpolation.

/// Replaces path separators inside a single segment.
pub fn escape_segment(segment: &str) -> String {
    segment.replace('/', "_")
}

/// Key of a group's shared message list.
pub fn group_messages(group_code: &str) -> String {
    format!("groups/{}", escape_segment(group_code))
}

/// Key of a group's full typing map.
pub fn typing_map(group_code: &str) -> String {
    format!("typing/{}", escape_segment(group_code))
}

/// Key of one user's entry inside a group's typing map.
pub fn typing_entry(group_code: &str, nickname: &str) -> String {
    format!(
        "typing/{}/{}",
        escape_segment(group_code),
        escape_segment(nickname)
    )
}

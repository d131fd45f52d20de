use super::Navigation;

/// Maps a `KeyboardEvent.key` value to a navigation request.
pub fn navigation_for_key(key: &str) -> Option<Navigation> {
    match key {
        "ArrowLeft" => Some(Navigation::Previous),
        "ArrowRight" => Some(Navigation::Next),
        _ => None,
    }
}

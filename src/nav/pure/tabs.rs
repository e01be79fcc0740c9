// Tab strip movement (pure functions)

use crate::nav::types::NavDirection;

/// Index of the previous/next tab, clamped at both ends (no wraparound).
///
/// Only Left/Right move along the tab strip; Up/Down always return `None`.
pub fn neighbor_index(current: usize, len: usize, direction: NavDirection) -> Option<usize> {
    if current >= len {
        return None;
    }
    match direction {
        NavDirection::Left => current.checked_sub(1),
        NavDirection::Right => (current + 1 < len).then_some(current + 1),
        NavDirection::Up | NavDirection::Down => None,
    }
}

//! Focus navigation math for menus: circular arrow-key movement and the
//! Tab focus trap.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Direction::Next),
            "ArrowUp" => Some(Direction::Previous),
            _ => None,
        }
    }
}

/// Index to focus after moving one step from `current` among `len` items,
/// wrapping at both ends. `None` when there is nothing to move between.
pub fn step(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    Some(match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    })
}

/// Where Tab should wrap to, if anywhere.
///
/// Only the edges are handled: Shift+Tab on the first element goes to the
/// last, Tab on the last goes to the first. Everything else is left to the
/// browser's native order (`None`).
pub fn trap_tab(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 3, Direction::Next), Some(1));
        assert_eq!(step(2, 3, Direction::Next), Some(0));
        assert_eq!(step(0, 3, Direction::Previous), Some(2));
        assert_eq!(step(0, 1, Direction::Next), Some(0));
    }

    #[test]
    fn test_step_out_of_range() {
        assert_eq!(step(0, 0, Direction::Next), None);
        assert_eq!(step(5, 3, Direction::Previous), None);
    }

    #[test]
    fn test_trap_tab_edges() {
        assert_eq!(trap_tab(Some(0), 4, true), Some(3));
        assert_eq!(trap_tab(Some(3), 4, false), Some(0));
        assert_eq!(trap_tab(Some(1), 4, false), None);
        assert_eq!(trap_tab(Some(0), 4, false), None);
        assert_eq!(trap_tab(None, 4, false), None);
        assert_eq!(trap_tab(Some(0), 0, true), None);
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowLeft"), None);
    }
}

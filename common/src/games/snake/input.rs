use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Pause,
    Start,
    Reset,
}

impl InputEvent {
    /// Maps a key name as reported by a keyboard or touch surface. Unknown
    /// keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let event = match key {
            "ArrowUp" | "w" | "W" | "up" => InputEvent::Turn(Direction::Up),
            "ArrowDown" | "s" | "S" | "down" => InputEvent::Turn(Direction::Down),
            "ArrowLeft" | "a" | "A" | "left" => InputEvent::Turn(Direction::Left),
            "ArrowRight" | "d" | "D" | "right" => InputEvent::Turn(Direction::Right),
            " " | "space" | "p" | "P" => InputEvent::Pause,
            "Enter" | "enter" => InputEvent::Start,
            "r" | "R" => InputEvent::Reset,
            _ => return None,
        };
        Some(event)
    }
}

/// Holds at most one pending direction between ticks.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    pending: Option<Direction>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `direction` unless it reverses `current`, the direction applied
    /// on the last tick. A later accepted input replaces an earlier one.
    /// Returns `false` when the input is rejected or changes nothing.
    pub fn submit(&mut self, direction: Direction, current: Direction) -> bool {
        if direction.is_opposite(&current) || direction == self.pending.unwrap_or(current) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(InputEvent::from_key("ArrowUp"), Some(InputEvent::Turn(Direction::Up)));
        assert_eq!(InputEvent::from_key("s"), Some(InputEvent::Turn(Direction::Down)));
        assert_eq!(InputEvent::from_key("A"), Some(InputEvent::Turn(Direction::Left)));
        assert_eq!(InputEvent::from_key("d"), Some(InputEvent::Turn(Direction::Right)));
        assert_eq!(InputEvent::from_key(" "), Some(InputEvent::Pause));
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Start));
        assert_eq!(InputEvent::from_key("R"), Some(InputEvent::Reset));
        assert_eq!(InputEvent::from_key("x"), None);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut router = InputRouter::new();
        assert!(!router.submit(Direction::Left, Direction::Right));
        assert_eq!(router.pending(), None);
    }

    #[test]
    fn test_last_valid_input_wins() {
        let mut router = InputRouter::new();
        assert!(router.submit(Direction::Up, Direction::Right));
        assert!(router.submit(Direction::Down, Direction::Right));
        assert!(!router.submit(Direction::Left, Direction::Right));
        assert_eq!(router.take_pending(), Some(Direction::Down));
        assert_eq!(router.take_pending(), None);
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        // Up then Down before a tick: Down is not the reverse of Right, so it
        // replaces Up instead of being compared with the pending Up.
        let mut router = InputRouter::new();
        router.submit(Direction::Up, Direction::Right);
        router.submit(Direction::Down, Direction::Right);
        assert_eq!(router.pending(), Some(Direction::Down));
    }

    #[test]
    fn test_repeated_input_changes_nothing() {
        let mut router = InputRouter::new();
        assert!(!router.submit(Direction::Right, Direction::Right));
        assert_eq!(router.pending(), None);

        assert!(router.submit(Direction::Up, Direction::Right));
        assert!(!router.submit(Direction::Up, Direction::Right));
        assert_eq!(router.pending(), Some(Direction::Up));

        // Going back to the applied direction still overrides the pending turn.
        assert!(router.submit(Direction::Right, Direction::Right));
        assert_eq!(router.take_pending(), Some(Direction::Right));
    }
}

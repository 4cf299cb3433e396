/// Direction a block slides in from while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideFrom {
    /// Rise from below the resting position.
    #[default]
    Below,
    Left,
    Right,
}

/// State half of the entrance classes: hidden offset or resting position.
pub fn entrance_state(revealed: bool, from: SlideFrom) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0 translate-y-0"
    } else {
        match from {
            SlideFrom::Below => "opacity-0 translate-y-10",
            SlideFrom::Left => "opacity-0 -translate-x-10",
            SlideFrom::Right => "opacity-0 translate-x-10",
        }
    }
}

/// Full class list for a block animated by the reveal machinery.
pub fn reveal_class(revealed: bool, from: SlideFrom) -> String {
    format!(
        "transition-all duration-1000 ease-out {}",
        entrance_state(revealed, from)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Scheduled,
    Revealed,
}

/// One-way reveal decision for a single block.
///
/// `Waiting` until the block first intersects the viewport, `Scheduled`
/// while the delay timer is pending, then `Revealed` forever. The flag never
/// reverts once set.
#[derive(Debug, Clone)]
pub struct RevealState {
    phase: Phase,
    delay_ms: u64,
}

impl RevealState {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            phase: Phase::Waiting,
            delay_ms,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Feed one intersection notification. Returns the delay to schedule the
    /// reveal with on the first visible notification, `None` for everything
    /// after that.
    pub fn handle_intersection(&mut self, visible: bool) -> Option<u64> {
        if visible && self.phase == Phase::Waiting {
            self.phase = Phase::Scheduled;
            Some(self.delay_ms)
        } else {
            None
        }
    }

    /// The scheduled reveal fired (or the block reveals unconditionally
    /// because no observer is available). Returns whether the flag flipped.
    pub fn complete(&mut self) -> bool {
        let flipped = self.phase != Phase::Revealed;
        self.phase = Phase::Revealed;
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once_with_the_configured_delay() {
        let mut state = RevealState::new(400);

        // Off-screen notifications schedule nothing
        assert_eq!(state.handle_intersection(false), None);

        // First visible notification hands back the delay, exactly once
        assert_eq!(state.handle_intersection(true), Some(400));
        assert_eq!(state.handle_intersection(true), None);
        assert_eq!(state.handle_intersection(false), None);

        assert!(!state.is_revealed());
        assert!(state.complete());
        assert!(state.is_revealed());
        assert_eq!(state.handle_intersection(true), None);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut state = RevealState::new(0);
        state.handle_intersection(true);
        assert!(state.complete());
        // repeat completion changes nothing
        assert!(!state.complete());
        assert!(state.is_revealed());
        assert_eq!(state.handle_intersection(false), None);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_completes_without_an_observer() {
        // fail-open path when intersection support is missing
        let mut state = RevealState::new(800);
        assert!(state.complete());
        assert!(state.is_revealed());
        assert_eq!(state.handle_intersection(true), None);
    }

    #[test]
    fn test_entrance_classes() {
        // Hidden state follows the direction hint
        assert_eq!(
            entrance_state(false, SlideFrom::Below),
            "opacity-0 translate-y-10"
        );
        assert_eq!(
            entrance_state(false, SlideFrom::Left),
            "opacity-0 -translate-x-10"
        );
        assert_eq!(
            entrance_state(false, SlideFrom::Right),
            "opacity-0 translate-x-10"
        );

        // Revealed state is the same resting position for every hint
        let resting = entrance_state(true, SlideFrom::Below);
        assert_eq!(entrance_state(true, SlideFrom::Left), resting);
        assert_eq!(entrance_state(true, SlideFrom::Right), resting);
        assert!(reveal_class(true, SlideFrom::Below).contains("duration-1000"));
    }
}

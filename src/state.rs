use std::num::NonZeroUsize;

/// Requests that move the presentation from one state to the next.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Advance,
    Retreat,
    JumpTo(usize),
    ReleaseLock,
}

/// Slide index plus the transition lock.
///
/// `current` is always a valid index into a deck of `total` slides.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PresentationState {
    current: usize,
    total: NonZeroUsize,
    animating: bool,
}

impl PresentationState {
    pub fn new(total: NonZeroUsize) -> Self {
        Self {
            current: 0,
            total,
            animating: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total.get()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn last(&self) -> usize {
        self.total.get() - 1
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// Rejected navigation (locked, at a boundary, out of range) returns the
    /// state unchanged. An accepted navigation always sets the lock.
    pub fn transition(self, action: Action) -> Self {
        let target = match action {
            Action::ReleaseLock => {
                return Self {
                    animating: false,
                    ..self
                };
            }
            _ if self.animating => return self,
            Action::Advance if self.current < self.last() => self.current + 1,
            Action::Retreat if self.current > 0 => self.current - 1,
            Action::JumpTo(index) if index <= self.last() => index,
            _ => return self,
        };

        Self {
            current: target,
            animating: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(total: usize) -> PresentationState {
        PresentationState::new(NonZeroUsize::new(total).unwrap())
    }

    #[test]
    fn starts_on_first_slide_unlocked() {
        let state = deck(13);
        assert_eq!(state.current(), 0);
        assert_eq!(state.total(), 13);
        assert!(!state.is_animating());
    }

    #[test]
    fn advance_moves_forward_and_locks() {
        let state = deck(3).transition(Action::Advance);
        assert_eq!(state.current(), 1);
        assert!(state.is_animating());
    }

    #[test]
    fn locked_state_ignores_navigation() {
        let locked = deck(5).transition(Action::Advance);
        assert_eq!(locked.transition(Action::Advance), locked);
        assert_eq!(locked.transition(Action::Retreat), locked);
        assert_eq!(locked.transition(Action::JumpTo(4)), locked);
    }

    #[test]
    fn release_lock_only_clears_flag() {
        let state = deck(5)
            .transition(Action::JumpTo(3))
            .transition(Action::ReleaseLock);
        assert_eq!(state.current(), 3);
        assert!(!state.is_animating());
    }

    #[test]
    fn boundaries_are_no_ops() {
        let first = deck(4);
        assert_eq!(first.transition(Action::Retreat), first);

        let last = first
            .transition(Action::JumpTo(3))
            .transition(Action::ReleaseLock);
        assert_eq!(last.transition(Action::Advance), last);
    }

    #[test]
    fn jump_out_of_range_is_no_op() {
        let state = deck(13);
        assert_eq!(state.transition(Action::JumpTo(13)), state);
        assert_eq!(state.transition(Action::JumpTo(usize::MAX)), state);
    }

    #[test]
    fn jump_to_current_replays() {
        let state = deck(2).transition(Action::JumpTo(0));
        assert_eq!(state.current(), 0);
        assert!(state.is_animating());
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let state = deck(1);
        assert_eq!(state.transition(Action::Advance), state);
        assert_eq!(state.transition(Action::Retreat), state);
        assert_eq!(state.transition(Action::JumpTo(1)), state);
    }
}

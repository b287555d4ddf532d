use std::num::NonZeroUsize;
use tracing::{debug, trace};

use crate::animator::{self, Cue, SlideVisual};
use crate::deck::{Deck, DeckError};
use crate::display::DisplayModel;
use crate::state::{Action, PresentationState};
use crate::timer::Timers;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Task {
    ReleaseLock,
    Animate(Cue),
}

impl From<Cue> for Task {
    fn from(cue: Cue) -> Self {
        Task::Animate(cue)
    }
}

/// Owns the deck, the navigation state and everything derived from it.
///
/// At most one slide transition is in flight: navigation while the lock is
/// held, or past either end of the deck, is silently dropped.
pub struct Presentation {
    deck: Deck,
    state: PresentationState,
    visuals: Vec<SlideVisual>,
    display: DisplayModel,
    timers: Timers<Task>,
    transition_duration: f64,
}

impl Presentation {
    /// Starts on the first slide and queues its entrance animation.
    pub fn new(deck: Deck, transition_duration: f64, now: f64) -> Result<Self, DeckError> {
        let total = NonZeroUsize::new(deck.slides.len()).ok_or(DeckError::Empty)?;
        let state = PresentationState::new(total);
        let visuals = deck.slides.iter().map(SlideVisual::dormant).collect();

        let mut presentation = Self {
            deck,
            state,
            visuals,
            display: DisplayModel::project(state.current(), state.total()),
            timers: Timers::new(),
            transition_duration,
        };
        animator::animate(&mut presentation.visuals, 0, now, &mut presentation.timers);
        Ok(presentation)
    }

    pub fn advance(&mut self, now: f64) -> bool {
        self.navigate(Action::Advance, now)
    }

    pub fn retreat(&mut self, now: f64) -> bool {
        self.navigate(Action::Retreat, now)
    }

    pub fn jump_to(&mut self, target: usize, now: f64) -> bool {
        self.navigate(Action::JumpTo(target), now)
    }

    fn navigate(&mut self, action: Action, now: f64) -> bool {
        let next = self.state.transition(action);
        if next == self.state {
            trace!(?action, current = self.state.current(), locked = self.state.is_animating(), "navigation dropped");
            return false;
        }

        self.state = next;
        animator::animate(&mut self.visuals, next.current(), now, &mut self.timers);
        self.display = DisplayModel::project(next.current(), next.total());
        self.timers.schedule(now, self.transition_duration, Task::ReleaseLock);

        debug!(?action, slide = %self.display.counter_text, "navigated");
        true
    }

    /// Fires every task due at `now` and returns the slides that became
    /// active during this tick, each with its activation instant.
    pub fn tick(&mut self, now: f64) -> Vec<(usize, f64)> {
        let mut activated = Vec::new();
        loop {
            let due = self.timers.take_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                match task {
                    Task::ReleaseLock => {
                        self.state = self.state.transition(Action::ReleaseLock);
                    }
                    Task::Animate(Cue::Activate(index)) => {
                        if let (Some(visual), Some(slide)) =
                            (self.visuals.get_mut(index), self.deck.slides.get(index))
                        {
                            animator::activate(visual, slide, index, at, &mut self.timers);
                            activated.push((index, at));
                        }
                    }
                    Task::Animate(Cue::Reveal { slide, element }) => {
                        if let Some(visual) = self.visuals.get_mut(slide) {
                            animator::reveal(visual, element, at);
                        }
                    }
                }
            }
        }
        activated
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn visuals(&self) -> &[SlideVisual] {
        &self.visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::SlidePhase;
    use crate::constants::TRANSITION_DURATION;
    use proptest::prelude::*;
    use std::path::Path;

    fn deck(total: usize) -> Deck {
        let source = (0..total)
            .map(|i| format!("# Slide {}\n- point\n[card] metric | {}", i + 1, i))
            .collect::<Vec<_>>()
            .join("\n---\n");
        Deck::parse(&source, Path::new(".")).unwrap()
    }

    fn presentation(total: usize) -> Presentation {
        Presentation::new(deck(total), TRANSITION_DURATION, 0.0).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        let result = Presentation::new(Deck { slides: Vec::new() }, TRANSITION_DURATION, 0.0);
        assert!(matches!(result, Err(DeckError::Empty)));
    }

    #[test]
    fn three_advances_on_thirteen_slides() {
        let mut p = presentation(13);
        let mut now = 0.0;
        for _ in 0..3 {
            assert!(p.advance(now));
            now += 1.0;
            p.tick(now);
        }
        assert_eq!(p.current_index(), 3);
        assert!((p.display().progress_percent - 4.0 / 13.0 * 100.0).abs() < 1e-3);
        assert!((p.display().progress_percent - 30.77).abs() < 0.01);
        assert_eq!(p.display().counter_text, "4 / 13");
    }

    #[test]
    fn retreat_on_first_slide_is_no_op() {
        let mut p = presentation(13);
        assert!(!p.retreat(0.0));
        assert_eq!(p.current_index(), 0);
        assert!(!p.is_animating());
        assert_eq!(p.display().counter_text, "1 / 13");
    }

    #[test]
    fn jump_to_last_then_advance_is_no_op() {
        let mut p = presentation(13);
        assert!(p.jump_to(12, 0.0));
        assert_eq!(p.current_index(), 12);
        p.tick(1.0);
        assert!(!p.advance(1.0));
        assert_eq!(p.current_index(), 12);
        assert_eq!(p.display().counter_text, "13 / 13");
    }

    #[test]
    fn rapid_advances_collapse_to_one() {
        let mut p = presentation(13);
        assert!(p.advance(0.0));
        assert!(!p.advance(0.0));
        p.tick(0.5);
        assert!(!p.advance(0.5));
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn lock_releases_after_transition_window() {
        let mut p = presentation(5);
        p.advance(0.0);
        p.tick(0.79);
        assert!(p.is_animating());
        p.tick(0.8);
        assert!(!p.is_animating());
        assert!(p.advance(0.8));
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn out_of_range_jump_is_no_op() {
        let mut p = presentation(13);
        assert!(!p.jump_to(13, 0.0));
        assert!(!p.jump_to(usize::MAX, 0.0));
        assert_eq!(p.current_index(), 0);
        assert!(!p.is_animating());
    }

    #[test]
    fn display_updates_before_slide_activates() {
        let mut p = presentation(4);
        p.tick(1.0);
        assert!(p.visuals()[0].is_active());

        p.advance(1.0);
        assert_eq!(p.display().counter_text, "2 / 4");
        assert!(p.visuals().iter().all(|v| !v.is_active()));

        let activated = p.tick(1.2);
        assert_eq!(activated.len(), 1);
        assert_eq!(activated[0].0, 1);
        assert!((activated[0].1 - 1.1).abs() < 1e-9);
        assert!(matches!(p.visuals()[1].phase, SlidePhase::Active { since } if (since - 1.1).abs() < 1e-9));
    }

    #[test]
    fn first_slide_animates_on_start_without_locking() {
        let mut p = presentation(3);
        assert!(!p.is_animating());
        assert!(p.tick(0.05).is_empty());
        assert_eq!(p.tick(0.25), vec![(0, 0.1)]);
    }

    #[test]
    fn staggered_reveal_trails_activation() {
        let mut p = presentation(2);
        p.tick(0.1);
        // heading at +0, card at +0.15, list item at +0.2
        assert_eq!(p.visuals()[0].revealed, vec![Some(0.1), None, None]);
        p.tick(0.26);
        assert!(p.visuals()[0].revealed[2].is_some());
        assert!(p.visuals()[0].revealed[1].is_none());
        p.tick(0.31);
        assert!(p.visuals()[0].revealed.iter().all(Option::is_some));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Advance,
        Retreat,
        JumpTo(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Advance),
            Just(Op::Retreat),
            (0usize..40).prop_map(Op::JumpTo),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn index_stays_in_bounds(
            total in 1usize..20,
            ops in prop::collection::vec((op(), 0.0f64..2.0), 0..60),
        ) {
            let mut p = presentation(total);
            let mut now = 0.0;
            for (op, gap) in ops {
                now += gap;
                p.tick(now);
                match op {
                    Op::Advance => { p.advance(now); }
                    Op::Retreat => { p.retreat(now); }
                    Op::JumpTo(i) => { p.jump_to(i, now); }
                }
                prop_assert!(p.current_index() < p.total_slides());
                prop_assert_eq!(p.total_slides(), total);
            }
        }
    }
}

use crate::constants::*;
use crate::deck::{Group, Slide};
use crate::timer::Timers;

/// Whether a slide is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlidePhase {
    Dormant,
    Active { since: f64 },
}

/// Per-slide visual state: its phase plus the instant each element was
/// revealed (`None` while hidden).
#[derive(Debug, Clone, PartialEq)]
pub struct SlideVisual {
    pub phase: SlidePhase,
    pub revealed: Vec<Option<f64>>,
}

impl SlideVisual {
    pub fn dormant(slide: &Slide) -> Self {
        Self {
            phase: SlidePhase::Dormant,
            revealed: vec![None; slide.elements.len()],
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, SlidePhase::Active { .. })
    }
}

/// Deferred animator work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Activate(usize),
    Reveal { slide: usize, element: usize },
}

/// One element's entry in a slide's reveal schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    pub element: usize,
    pub group: Group,
    /// Seconds after the slide becomes active.
    pub offset: f64,
}

/// Staggered reveal order for a slide: headings, then cards, then list
/// items, each group in document order. A group's offsets start after the
/// preceding groups' element counts, not after their animations finish.
pub fn reveal_schedule(slide: &Slide) -> Vec<RevealStep> {
    let headings = slide.count(Group::Heading);
    let cards = slide.count(Group::Card);

    let mut steps = Vec::new();
    for (group, stagger, preceding) in [
        (Group::Heading, HEADING_STAGGER, 0),
        (Group::Card, CARD_STAGGER, headings),
        (Group::ListItem, LIST_ITEM_STAGGER, headings + cards),
    ] {
        let members = slide
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.group() == Some(group));
        for (position, (element, _)) in members.enumerate() {
            steps.push(RevealStep {
                element,
                group,
                offset: (position + preceding) as f64 * stagger,
            });
        }
    }
    steps
}

/// Resets every slide to dormant and queues activation of `target`.
pub fn animate<T: From<Cue>>(
    visuals: &mut [SlideVisual],
    target: usize,
    now: f64,
    timers: &mut Timers<T>,
) {
    if target >= visuals.len() {
        return;
    }
    for visual in visuals.iter_mut() {
        visual.phase = SlidePhase::Dormant;
    }
    timers.schedule(now, ACTIVATE_DELAY, Cue::Activate(target).into());
}

/// Marks a slide active at `at`, hides its grouped elements and queues
/// their reveals. Ungrouped elements appear with the slide.
pub fn activate<T: From<Cue>>(
    visual: &mut SlideVisual,
    slide: &Slide,
    index: usize,
    at: f64,
    timers: &mut Timers<T>,
) {
    visual.phase = SlidePhase::Active { since: at };
    for (revealed, element) in visual.revealed.iter_mut().zip(&slide.elements) {
        *revealed = match element.group() {
            Some(_) => None,
            None => Some(at),
        };
    }
    for step in reveal_schedule(slide) {
        timers.schedule(
            at,
            step.offset,
            Cue::Reveal {
                slide: index,
                element: step.element,
            }
            .into(),
        );
    }
}

pub fn reveal(visual: &mut SlideVisual, element: usize, at: f64) {
    if let Some(revealed) = visual.revealed.get_mut(element) {
        *revealed = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use std::path::Path;

    fn slide(source: &str) -> Slide {
        Deck::parse(source, Path::new(".")).unwrap().slides.remove(0)
    }

    fn offsets(steps: &[RevealStep]) -> Vec<(usize, f64)> {
        steps.iter().map(|s| (s.element, s.offset)).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn groups_are_staggered_by_preceding_counts() {
        // 2 headings, 3 cards, 2 list items, interleaved in the markup
        let slide = slide(
            "# A\n- item one\n[card] x | 1\n## B\n[metric] y | 2\n- item two\n[card] z | 3\nplain",
        );
        let steps = reveal_schedule(&slide);
        let expected = [
            (0, 0.0),
            (3, 0.2),
            (2, 0.30),
            (4, 0.45),
            (6, 0.60),
            (1, 0.5),
            (5, 0.6),
        ];
        assert_eq!(steps.len(), expected.len());
        for ((element, offset), (want_element, want_offset)) in offsets(&steps).into_iter().zip(expected) {
            assert_eq!(element, want_element);
            assert!(close(offset, want_offset), "element {element}: {offset} != {want_offset}");
        }
    }

    #[test]
    fn schedule_is_replayable() {
        let slide = slide("# A\n## B\n[card] c | 1\n- d\n- e");
        assert_eq!(reveal_schedule(&slide), reveal_schedule(&slide));
    }

    #[test]
    fn list_only_slide_starts_at_zero() {
        let steps = reveal_schedule(&slide("- a\n- b\n- c"));
        let got: Vec<f64> = steps.iter().map(|s| s.offset).collect();
        assert!(close(got[0], 0.0) && close(got[1], 0.1) && close(got[2], 0.2));
    }

    #[test]
    fn animate_resets_all_and_defers_activation() {
        let slides = [slide("# one"), slide("# two")];
        let mut visuals: Vec<SlideVisual> = slides.iter().map(SlideVisual::dormant).collect();
        visuals[0].phase = SlidePhase::Active { since: 0.0 };
        let mut timers: Timers<Cue> = Timers::new();

        animate(&mut visuals, 1, 5.0, &mut timers);

        assert!(visuals.iter().all(|v| !v.is_active()));
        assert!(timers.take_due(5.09).is_empty());
        let due: Vec<Cue> = timers.take_due(5.11).into_iter().map(|(_, c)| c).collect();
        assert_eq!(due, vec![Cue::Activate(1)]);
    }

    #[test]
    fn activate_hides_grouped_elements_and_queues_reveals() {
        let slide = slide("# Title\nintro text\n- point");
        let mut visual = SlideVisual::dormant(&slide);
        visual.revealed = vec![Some(0.0); 3];
        let mut timers: Timers<Cue> = Timers::new();

        activate(&mut visual, &slide, 4, 1.0, &mut timers);

        assert_eq!(visual.phase, SlidePhase::Active { since: 1.0 });
        assert_eq!(visual.revealed, vec![None, Some(1.0), None]);
        let cues: Vec<Cue> = timers.take_due(10.0).into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            cues,
            vec![
                Cue::Reveal { slide: 4, element: 0 },
                Cue::Reveal { slide: 4, element: 2 },
            ]
        );
    }
}

use crate::constants::*;
use crate::timer::Timers;

/// The three nested market-size circles, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Circle {
    Tam,
    Sam,
    Som,
}

impl Circle {
    pub const ALL: [Circle; 3] = [Circle::Tam, Circle::Sam, Circle::Som];

    pub fn index(self) -> usize {
        match self {
            Circle::Tam => 0,
            Circle::Sam => 1,
            Circle::Som => 2,
        }
    }
}

/// Which circle label a tap has revealed on a compact window.
#[derive(Debug, Default)]
pub struct MarketHighlight {
    shown: Option<Circle>,
    expiries: Timers<Circle>,
}

impl MarketHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<Circle> {
        self.shown
    }

    /// Shows `circle`'s label and queues its hide.
    pub fn tap(&mut self, circle: Circle, now: f64) {
        self.shown = Some(circle);
        self.expiries.schedule(now, MARKET_LABEL_DURATION, circle);
    }

    /// Click outside every circle.
    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    /// An earlier tap's expiry hides the label even if the same circle was
    /// tapped again since.
    pub fn tick(&mut self, now: f64) {
        for (_, circle) in self.expiries.take_due(now) {
            if self.shown == Some(circle) {
                self.shown = None;
            }
        }
    }
}

/// Innermost circle containing `distance` from the shared centre, given the
/// radii of TAM, SAM and SOM.
pub fn hit(distance: f32, radii: [f32; 3]) -> Option<Circle> {
    Circle::ALL
        .iter()
        .rev()
        .copied()
        .find(|c| distance <= radii[c.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_shows_then_hides_after_three_seconds() {
        let mut market = MarketHighlight::new();
        market.tap(Circle::Sam, 1.0);
        market.tick(3.9);
        assert_eq!(market.shown(), Some(Circle::Sam));
        market.tick(4.0);
        assert_eq!(market.shown(), None);
    }

    #[test]
    fn tapping_another_circle_replaces_label() {
        let mut market = MarketHighlight::new();
        market.tap(Circle::Tam, 0.0);
        market.tap(Circle::Som, 1.0);
        market.tick(3.0);
        assert_eq!(market.shown(), Some(Circle::Som));
        market.tick(4.0);
        assert_eq!(market.shown(), None);
    }

    #[test]
    fn dismiss_clears_label() {
        let mut market = MarketHighlight::new();
        market.tap(Circle::Tam, 0.0);
        market.dismiss();
        assert_eq!(market.shown(), None);
    }

    #[test]
    fn hit_prefers_innermost() {
        let radii = [300.0, 200.0, 100.0];
        assert_eq!(hit(50.0, radii), Some(Circle::Som));
        assert_eq!(hit(150.0, radii), Some(Circle::Sam));
        assert_eq!(hit(299.0, radii), Some(Circle::Tam));
        assert_eq!(hit(301.0, radii), None);
    }
}

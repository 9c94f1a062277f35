//! Entrance animations, expressed as Tailwind transition classes.
//!
//! An element starts in its entrance's hidden pose and transitions to the resting pose once
//! it is revealed. Reveals are one-shot.

/// Per-card delay when a grid staggers its children.
pub const STAGGER_MS: u32 = 100;

pub const SECTION_DURATION_MS: u32 = 800;
pub const CARD_DURATION_MS: u32 = 600;

/// Share of an element, in percent, that must be on screen before it is revealed.
pub const SECTION_AMOUNT_PCT: u8 = 50;
pub const CARD_AMOUNT_PCT: u8 = 30;

/// How long a closed overlay stays mounted while it animates out.
pub const EXIT_MS: u32 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    Scale,
}

impl Entrance {
    fn hidden_class(self) -> &'static str {
        match self {
            Entrance::FadeUp => "opacity-0 translate-y-12",
            Entrance::FadeLeft => "opacity-0 -translate-x-12",
            Entrance::FadeRight => "opacity-0 translate-x-12",
            Entrance::Scale => "opacity-0 scale-90",
        }
    }

    fn shown_class(self) -> &'static str {
        match self {
            Entrance::FadeUp | Entrance::FadeLeft | Entrance::FadeRight => {
                "opacity-100 translate-x-0 translate-y-0"
            }
            Entrance::Scale => "opacity-100 scale-100",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub amount_pct: u8,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            entrance: Entrance::default(),
            duration_ms: SECTION_DURATION_MS,
            delay_ms: 0,
            amount_pct: SECTION_AMOUNT_PCT,
        }
    }
}

impl Motion {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            ..Self::default()
        }
    }

    pub fn duration(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn amount(self, amount_pct: u8) -> Self {
        Self { amount_pct, ..self }
    }

    /// Intersection ratio at which the reveal fires, in `0.0..=1.0`.
    pub fn threshold(&self) -> f64 {
        f64::from(self.amount_pct.min(100)) / 100.0
    }

    /// Whether an element showing `ratio` of itself has come far enough into view.
    pub fn reached(&self, ratio: f64) -> bool {
        // observers report ratios like 0.2999 for a 0.3 threshold
        ratio > 0.0 && ratio + 0.005 >= self.threshold()
    }

    /// Delays the `index`th item of a grid.
    pub fn staggered(self, index: usize) -> Self {
        self.delay(stagger_delay(index))
    }

    pub fn class(&self, revealed: bool) -> String {
        let pose = if revealed {
            self.entrance.shown_class()
        } else {
            self.entrance.hidden_class()
        };
        format!("transition-all ease-out motion-reduce:transition-none {pose}")
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Mount phase of something that animates out before it disappears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence<T> {
    #[default]
    Absent,
    Present(T),
    Leaving(T),
}

impl<T: Copy> Presence<T> {
    /// The next phase once the live value becomes `current`.
    pub fn follow(self, current: Option<T>) -> Self {
        match (current, self) {
            (Some(value), _) => Presence::Present(value),
            (None, Presence::Present(value)) => Presence::Leaving(value),
            (None, phase) => phase,
        }
    }

    /// Called when the exit animation has finished.
    pub fn settle(self) -> Self {
        match self {
            Presence::Leaving(_) => Presence::Absent,
            phase => phase,
        }
    }

    /// The value still on screen after it was removed, if any.
    pub fn leaving(self) -> Option<T> {
        match self {
            Presence::Leaving(value) => Some(value),
            _ => None,
        }
    }
}

pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX / STAGGER_MS)
        .saturating_mul(STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(8), 800);
        assert_eq!(
            Motion::new(Entrance::Scale).staggered(3).delay_ms,
            300
        );
    }

    #[test]
    fn test_hidden_and_shown_classes_differ() {
        for entrance in [
            Entrance::FadeUp,
            Entrance::FadeLeft,
            Entrance::FadeRight,
            Entrance::Scale,
        ] {
            let motion = Motion::new(entrance);
            let hidden = motion.class(false);
            let shown = motion.class(true);
            assert_ne!(hidden, shown);
            assert!(hidden.contains("opacity-0"));
            assert!(shown.contains("opacity-100"));
        }
    }

    #[test]
    fn test_style_carries_timing() {
        let motion = Motion::new(Entrance::FadeLeft)
            .duration(CARD_DURATION_MS)
            .delay(200);
        assert_eq!(
            motion.style(),
            "transition-duration: 600ms; transition-delay: 200ms;"
        );
        assert_eq!(Motion::default().duration_ms, SECTION_DURATION_MS);
    }

    #[test]
    fn test_presence_exit() {
        let mut phase = Presence::default();
        phase = phase.follow(None);
        assert_eq!(phase, Presence::Absent);

        phase = phase.follow(Some(3));
        assert_eq!(phase, Presence::Present(3));
        assert_eq!(phase.settle(), Presence::Present(3));

        phase = phase.follow(None);
        assert_eq!(phase, Presence::Leaving(3));
        assert_eq!(phase.leaving(), Some(3));
        assert_eq!(phase.follow(None), Presence::Leaving(3));

        assert_eq!(phase.settle(), Presence::Absent);
        assert_eq!(phase.settle().leaving(), None);
    }

    #[test]
    fn test_presence_reopen_while_leaving() {
        let phase = Presence::Present(1).follow(None);
        assert_eq!(phase.follow(Some(2)), Presence::Present(2));
        assert_eq!(phase.follow(Some(2)).settle(), Presence::Present(2));
    }

    #[test]
    fn test_threshold() {
        assert_eq!(Motion::default().threshold(), 0.5);
        assert_eq!(
            Motion::new(Entrance::Scale).amount(CARD_AMOUNT_PCT).threshold(),
            0.3
        );
        assert_eq!(Motion::default().amount(0).threshold(), 0.0);
        assert_eq!(Motion::default().amount(250).threshold(), 1.0);
    }

    #[test]
    fn test_reached_waits_for_amount() {
        let card = Motion::new(Entrance::Scale).amount(CARD_AMOUNT_PCT);
        assert!(!card.reached(0.0));
        assert!(!card.reached(0.01));
        assert!(!card.reached(0.2));
        assert!(card.reached(0.2999));
        assert!(card.reached(0.3));
        assert!(card.reached(1.0));

        let heading = Motion::default();
        assert!(!heading.reached(0.3));
        assert!(heading.reached(0.5));

        // a zero amount still needs one visible pixel
        assert!(!Motion::default().amount(0).reached(0.0));
        assert!(Motion::default().amount(0).reached(0.001));
    }
}

//! Linear five-step walkthrough. Advancing past the last step and
//! retreating before the first are clamped no-ops.

/// One stage of the walkthrough, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    CheckIn,
    Introductions,
    Explorer,
    Refine,
    Export,
}

pub const TOTAL_STEPS: u8 = 5;

impl Step {
    pub fn next(self) -> Self {
        match self {
            Step::CheckIn => Step::Introductions,
            Step::Introductions => Step::Explorer,
            Step::Explorer => Step::Refine,
            Step::Refine => Step::Export,
            Step::Export => Step::Export,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Step::CheckIn => Step::CheckIn,
            Step::Introductions => Step::CheckIn,
            Step::Explorer => Step::Introductions,
            Step::Refine => Step::Explorer,
            Step::Export => Step::Refine,
        }
    }

    /// 1-based position for the "Step k of 5" header.
    pub fn number(self) -> u8 {
        match self {
            Step::CheckIn => 1,
            Step::Introductions => 2,
            Step::Explorer => 3,
            Step::Refine => 4,
            Step::Export => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::CheckIn => "Pre-Course Check-in",
            Step::Introductions => "Introductions",
            Step::Explorer => "Smorgasbord Explorer",
            Step::Refine => "Refine Your Smorgasbord",
            Step::Export => "VPS Dialog Prep & Export",
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::CheckIn
    }

    pub fn is_last(self) -> bool {
        self == Step::Export
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_step_one() {
        assert_eq!(Step::default().number(), 1);
    }

    #[test]
    fn test_prev_at_first_step_is_noop() {
        assert_eq!(Step::CheckIn.prev(), Step::CheckIn);
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        assert_eq!(Step::Export.next(), Step::Export);
    }

    #[test]
    fn test_next_then_prev_returns_to_start() {
        let mut step = Step::default();
        for _ in 0..4 {
            let here = step;
            assert_eq!(here.next().prev(), here);
            step = step.next();
        }
        assert!(step.is_last());
    }

    #[test]
    fn test_numbers_cover_one_through_five() {
        let mut step = Step::default();
        for expected in 1..=TOTAL_STEPS {
            assert_eq!(step.number(), expected);
            step = step.next();
        }
    }
}

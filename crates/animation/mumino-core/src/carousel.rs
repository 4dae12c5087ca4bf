//! Carousel arrow state at the ends of a slide list.

use serde::Serialize;

/// Class the carousel styles as a disabled arrow.
pub const ARROW_DISABLED_CLASS: &str = "splide__arrow--disabled";

/// Which arrows should be disabled for the current slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl ArrowState {
    /// State for slide `index` of `len`. Out-of-range indices only disable
    /// an arrow when they sit exactly on an end.
    pub fn at(index: i32, len: u32) -> Self {
        Self {
            prev_disabled: index == 0,
            next_disabled: i64::from(index) == i64::from(len) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_disable_their_arrow() {
        assert_eq!(
            ArrowState::at(0, 4),
            ArrowState { prev_disabled: true, next_disabled: false }
        );
        assert_eq!(
            ArrowState::at(3, 4),
            ArrowState { prev_disabled: false, next_disabled: true }
        );
        assert_eq!(
            ArrowState::at(1, 4),
            ArrowState { prev_disabled: false, next_disabled: false }
        );
    }

    #[test]
    fn single_slide_disables_both() {
        assert_eq!(
            ArrowState::at(0, 1),
            ArrowState { prev_disabled: true, next_disabled: true }
        );
        assert!(!ArrowState::at(0, 0).next_disabled);
    }
}

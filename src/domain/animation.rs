//! Animation phase arithmetic and the pause predicate
//!
//! The ambient animation is a cyclic integer phase in `[0, 100)` that
//! drives purely cosmetic flow cues. Whether it is allowed to advance is
//! decided by `should_pause`, a pure function over the play switch, the
//! current section and the active selections. It carries no memory of
//! its own, so two states agreeing on those inputs always agree on the
//! verdict.

use crate::domain::selection::{ItemSpace, SelectionBoard};

/// Number of discrete steps in one animation cycle
pub const PHASE_STEPS: u8 = 100;

/// Advances a cyclic phase by one step, wrapping back to 0 after
/// `PHASE_STEPS - 1`
pub fn advance_phase(phase: u8) -> u8 {
    phase.wrapping_add(1) % PHASE_STEPS
}

/// Section identities whose active selection suspends the animation
///
/// The original presentation freezes its flow cues on exactly two
/// sections while the viewer studies a selected item: the ecosystem
/// diagram (participant selected) and the business-model comparison
/// (model selected). Selections on any other section leave the
/// animation running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRules {
    /// Index of the ecosystem section
    pub ecosystem_section: usize,
    /// Index of the business-models section
    pub business_models_section: usize,
}

/// Decides whether the animation tick must be suspended
///
/// True iff playback is switched off, or the current section is one of
/// the two pause-sensitive sections and its own item-space has an
/// active selection. An explicit pause always dominates the
/// section-driven rules.
pub fn should_pause(
    rules: &PauseRules,
    play_requested: bool,
    current_section: usize,
    selection: &SelectionBoard,
) -> bool {
    if !play_requested {
        return true;
    }

    (current_section == rules.ecosystem_section
        && selection.active(ItemSpace::Participant).is_some())
        || (current_section == rules.business_models_section
            && selection.active(ItemSpace::BusinessModel).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: PauseRules = PauseRules {
        ecosystem_section: 1,
        business_models_section: 2,
    };

    fn board_with_active(space: ItemSpace, id: &str) -> SelectionBoard {
        let mut board = SelectionBoard::new();
        board.toggle_active(space, id);
        board
    }

    #[test]
    fn phase_advances_by_one_and_wraps() {
        assert_eq!(advance_phase(0), 1);
        assert_eq!(advance_phase(42), 43);
        assert_eq!(advance_phase(98), 99);
        assert_eq!(advance_phase(99), 0);
    }

    #[test]
    fn runs_by_default() {
        let board = SelectionBoard::new();
        assert!(!should_pause(&RULES, true, 0, &board));
    }

    #[test]
    fn play_switch_off_always_pauses() {
        let board = SelectionBoard::new();
        for section in 0..8 {
            assert!(should_pause(&RULES, false, section, &board));
        }

        // Explicit pause dominates even with no selection anywhere
        let active = board_with_active(ItemSpace::Participant, "bank");
        assert!(should_pause(&RULES, false, 1, &active));
    }

    #[test]
    fn active_participant_pauses_only_the_ecosystem_section() {
        let board = board_with_active(ItemSpace::Participant, "bank");

        assert!(should_pause(&RULES, true, 1, &board));
        assert!(!should_pause(&RULES, true, 0, &board));
        assert!(!should_pause(&RULES, true, 2, &board));
    }

    #[test]
    fn active_model_pauses_only_the_business_models_section() {
        let board = board_with_active(ItemSpace::BusinessModel, "direct");

        assert!(should_pause(&RULES, true, 2, &board));
        assert!(!should_pause(&RULES, true, 1, &board));
        assert!(!should_pause(&RULES, true, 5, &board));
    }

    #[test]
    fn service_selection_never_pauses() {
        let board = board_with_active(ItemSpace::Service, "pix");
        for section in 0..8 {
            assert!(!should_pause(&RULES, true, section, &board));
        }
    }

    #[test]
    fn hover_does_not_pause() {
        let mut board = SelectionBoard::new();
        board.set_hover(ItemSpace::Participant, Some("bank"));
        board.set_hover(ItemSpace::BusinessModel, Some("direct"));

        assert!(!should_pause(&RULES, true, 1, &board));
        assert!(!should_pause(&RULES, true, 2, &board));
    }

    #[test]
    fn predicate_is_pure_over_its_inputs() {
        // Two boards that disagree only on state the predicate does not
        // read (hover, service selection) must yield the same verdict.
        let mut a = board_with_active(ItemSpace::Participant, "bank");
        let mut b = board_with_active(ItemSpace::Participant, "bank");
        a.set_hover(ItemSpace::Service, Some("pix"));
        b.toggle_active(ItemSpace::Service, "cards");

        for section in 0..8 {
            for play in [true, false] {
                assert_eq!(
                    should_pause(&RULES, play, section, &a),
                    should_pause(&RULES, play, section, &b),
                );
            }
        }
    }
}

//! Presentation session facade
//!
//! Coordinates navigation, selection and the animation driver behind a
//! single surface of intents and one read-only snapshot. After every
//! mutation the pause predicate is re-derived from current state (never
//! captured at tick registration) and the driver's ticker is started or
//! stopped to match.

use thiserror::Error;

use crate::app::driver::AnimationDriver;
use crate::catalog::{CatalogError, Deck, Section};
use crate::config::{ConfigError, SessionConfig};
use crate::domain::animation::should_pause;
use crate::domain::navigation::Navigation;
use crate::domain::selection::{ItemSpace, SelectionBoard};
use crate::input::Intent;

/// Failures building a session; once built, no operation can fail
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Read-only view of the session for a render pass
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The section currently on screen
    pub section: &'static Section,
    /// Active and hovered ids per item-space
    pub selection: &'a SelectionBoard,
    /// Animation phase in `[0, 100)`
    pub phase: u8,
    /// Whether the animation is currently advancing
    pub running: bool,
}

/// One viewer's presentation session
///
/// Created with fixed initial values (section 0, empty selections,
/// phase 0, playback on) and auto-starts its animation. All intents
/// are total functions: indices clamp, toggles are idempotent over two
/// identical calls, and nothing returns an error.
///
/// The session owns the only timer resource (the driver's ticker) and
/// is the only mutator context; intents run synchronously on the
/// caller's thread.
pub struct Session {
    deck: Deck,
    config: SessionConfig,
    navigation: Navigation,
    selection: SelectionBoard,
    play_requested: bool,
    driver: AnimationDriver,
}

impl Session {
    /// Builds a session over `deck`, validating deck and config first
    pub fn new(deck: Deck, config: SessionConfig) -> Result<Self, SessionError> {
        deck.validate()?;
        config.validate(deck.section_count())?;

        let mut session = Self {
            deck,
            config,
            navigation: Navigation::new(deck.section_count()),
            selection: SelectionBoard::new(),
            play_requested: true,
            driver: AnimationDriver::new(config.tick_period),
        };
        // Auto-play: playback starts on and no selection exists yet
        session.sync_driver();
        Ok(session)
    }

    /// Builds a session over the standard BaaS deck with default config
    pub fn standard() -> Result<Self, SessionError> {
        Self::new(Deck::standard(), SessionConfig::default())
    }

    /// Applies one input intent
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectSection(index) => self.select_section(index),
            Intent::NextSection => self.next_section(),
            Intent::PreviousSection => self.previous_section(),
            Intent::ToggleItem { space, id } => self.toggle_item(space, &id),
            Intent::HoverItem { space, id } => self.hover_item(space, &id),
            Intent::UnhoverItem { space } => self.unhover_item(space),
            Intent::TogglePlay => self.toggle_play(),
        }
    }

    /// Jumps to `index`, clamped into the deck's section range
    pub fn select_section(&mut self, index: usize) {
        if self.navigation.go_to(index) {
            tracing::debug!(section = self.navigation.current(), "section changed");
        }
        self.sync_driver();
    }

    /// Steps to the following section, clamped at the last one
    pub fn next_section(&mut self) {
        if self.navigation.next() {
            tracing::debug!(section = self.navigation.current(), "section changed");
        }
        self.sync_driver();
    }

    /// Steps to the preceding section, clamped at the first one
    pub fn previous_section(&mut self) {
        if self.navigation.previous() {
            tracing::debug!(section = self.navigation.current(), "section changed");
        }
        self.sync_driver();
    }

    /// Click-toggles the active item of `space`
    ///
    /// Ids are opaque to the session; selecting an id the deck does not
    /// know simply selects an id no renderer will highlight.
    pub fn toggle_item(&mut self, space: ItemSpace, id: &str) {
        self.selection.toggle_active(space, id);
        self.sync_driver();
    }

    /// Pointer entered an item of `space`
    pub fn hover_item(&mut self, space: ItemSpace, id: &str) {
        self.selection.set_hover(space, Some(id));
        self.sync_driver();
    }

    /// Pointer left whatever was hovered in `space`
    pub fn unhover_item(&mut self, space: ItemSpace) {
        self.selection.clear_hover(space);
        self.sync_driver();
    }

    /// Flips the play/pause switch
    pub fn toggle_play(&mut self) {
        self.set_play_requested(!self.play_requested);
    }

    /// Sets the play/pause switch directly
    pub fn set_play_requested(&mut self, play: bool) {
        self.play_requested = play;
        self.sync_driver();
    }

    /// The deck this session presents
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The section currently on screen
    pub fn current_section(&self) -> &'static Section {
        // Navigation clamps into the deck range, which validate()
        // guarantees is non-empty
        &self.deck.sections[self.navigation.current()]
    }

    /// Whether the animation is currently advancing
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Current animation phase, in `[0, 100)`
    pub fn animation_phase(&self) -> u8 {
        self.driver.phase()
    }

    /// Whether playback is requested (the explicit switch, not the
    /// derived running state)
    pub fn play_requested(&self) -> bool {
        self.play_requested
    }

    /// Active and hovered selections
    pub fn selection(&self) -> &SelectionBoard {
        &self.selection
    }

    /// Read-only view for one render pass
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            section: self.current_section(),
            selection: &self.selection,
            phase: self.driver.phase(),
            running: self.driver.is_running(),
        }
    }

    /// Re-derives the pause predicate and aligns the ticker with it
    ///
    /// Called after every mutation. Start/stop on the driver are
    /// idempotent, so re-affirming the current state is free.
    fn sync_driver(&mut self) {
        let pause = should_pause(
            &self.config.pause_rules,
            self.play_requested,
            self.navigation.current(),
            &self.selection,
        );

        let was_running = self.driver.is_running();
        if pause {
            self.driver.stop();
        } else {
            self.driver.start();
        }

        if was_running != self.driver.is_running() {
            tracing::debug!(
                running = self.driver.is_running(),
                phase = self.driver.phase(),
                "animation state changed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    const TEST_PERIOD: Duration = Duration::from_millis(2);

    fn test_session() -> Session {
        let config = SessionConfig {
            tick_period: TEST_PERIOD,
            ..SessionConfig::default()
        };
        Session::new(Deck::standard(), config).expect("standard deck builds")
    }

    fn wait_for(mut pred: impl FnMut() -> bool, what: &str) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !pred() {
            assert!(Instant::now() < deadline, "timed out waiting for {what}");
            thread::sleep(Duration::from_micros(200));
        }
    }

    #[test]
    fn session_auto_starts_playing_at_section_zero() {
        let session = test_session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.section.id, 0);
        assert!(snapshot.running);
        assert!(session.play_requested());
    }

    #[test]
    fn select_section_clamps_like_go_to() {
        let mut session = test_session();
        let last = session.deck().section_count() - 1;

        for (input, expected) in [(3, 3), (999, last), (0, 0), (last, last)] {
            session.select_section(input);
            assert_eq!(session.current_section().id, expected);
        }
    }

    #[test]
    fn stepping_past_the_end_clamps() {
        let mut session = test_session();
        let count = session.deck().section_count();

        for _ in 0..count + 5 {
            session.next_section();
        }
        assert_eq!(session.current_section().id, count - 1);

        for _ in 0..count + 5 {
            session.previous_section();
        }
        assert_eq!(session.current_section().id, 0);
    }

    #[test]
    fn navigating_sections_keeps_the_animation_running() {
        let mut session = test_session();

        session.select_section(SessionConfig::ECOSYSTEM_SECTION);
        assert!(session.is_running());

        session.select_section(SessionConfig::BUSINESS_MODELS_SECTION);
        assert!(session.is_running());
    }

    #[test]
    fn participant_selection_pauses_and_reselection_resumes() {
        let mut session = test_session();
        session.select_section(SessionConfig::ECOSYSTEM_SECTION);
        wait_for(|| session.animation_phase() > 0, "animation to advance");

        session.toggle_item(ItemSpace::Participant, "bank");
        assert!(!session.is_running());

        // Frozen, not reset: the phase survives the pause untouched
        let frozen = session.animation_phase();
        thread::sleep(TEST_PERIOD * 10);
        assert_eq!(session.animation_phase(), frozen);

        session.toggle_item(ItemSpace::Participant, "bank");
        assert!(session.is_running());
        wait_for(|| session.animation_phase() != frozen, "resume tick");
        let resumed = session.animation_phase();
        let delta = (u16::from(resumed) + 100 - u16::from(frozen)) % 100;
        assert!(delta >= 1 && delta <= 10, "frozen {frozen} -> resumed {resumed}");
    }

    #[test]
    fn model_selection_pauses_only_its_own_section() {
        let mut session = test_session();

        session.select_section(SessionConfig::BUSINESS_MODELS_SECTION);
        session.toggle_item(ItemSpace::BusinessModel, "direct");
        assert!(!session.is_running());

        // The stale selection goes inert on another section
        session.select_section(5);
        assert!(session.is_running());

        // and bites again when the section is revisited
        session.select_section(SessionConfig::BUSINESS_MODELS_SECTION);
        assert!(!session.is_running());
    }

    #[test]
    fn service_selection_and_hover_never_pause() {
        let mut session = test_session();

        session.select_section(3);
        session.toggle_item(ItemSpace::Service, "pix");
        session.hover_item(ItemSpace::Service, "cards");
        assert!(session.is_running());

        session.select_section(SessionConfig::ECOSYSTEM_SECTION);
        session.hover_item(ItemSpace::Participant, "bank");
        assert!(session.is_running());

        session.unhover_item(ItemSpace::Participant);
        assert!(session.is_running());
    }

    #[test]
    fn explicit_pause_dominates_section_rules() {
        let mut session = test_session();

        session.toggle_play();
        assert!(!session.is_running());
        assert!(!session.play_requested());

        // Section changes cannot resume a switched-off animation
        session.select_section(2);
        assert!(!session.is_running());
        session.next_section();
        assert!(!session.is_running());

        session.toggle_play();
        assert!(session.is_running());
    }

    #[test]
    fn pause_while_selection_is_active_stays_paused_after_deselect() {
        let mut session = test_session();
        session.select_section(SessionConfig::ECOSYSTEM_SECTION);
        session.toggle_item(ItemSpace::Participant, "bcb");
        session.toggle_play();

        // Both reasons to pause hold; removing one is not enough
        session.toggle_item(ItemSpace::Participant, "bcb");
        assert!(!session.is_running());

        session.toggle_play();
        assert!(session.is_running());
    }

    #[test]
    fn intents_drive_the_same_transitions() {
        let mut session = test_session();

        session.apply(Intent::SelectSection(SessionConfig::ECOSYSTEM_SECTION));
        session.apply(Intent::ToggleItem {
            space: ItemSpace::Participant,
            id: "fintech".into(),
        });
        assert!(!session.is_running());
        assert!(session.selection().is_active(ItemSpace::Participant, "fintech"));

        session.apply(Intent::HoverItem {
            space: ItemSpace::Service,
            id: "pix".into(),
        });
        session.apply(Intent::UnhoverItem { space: ItemSpace::Service });
        assert_eq!(session.selection().hovered(ItemSpace::Service), None);

        session.apply(Intent::NextSection);
        assert_eq!(session.current_section().id, 2);
        assert!(session.is_running());

        session.apply(Intent::PreviousSection);
        assert_eq!(session.current_section().id, 1);
        assert!(!session.is_running());

        session.apply(Intent::TogglePlay);
        assert!(!session.play_requested());
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut session = test_session();
        session.select_section(3);
        session.hover_item(ItemSpace::Service, "efx");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.section.title, "Serviços BaaS");
        assert!(snapshot.selection.is_hovered(ItemSpace::Service, "efx"));
        assert!(snapshot.running);
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = SessionConfig {
            tick_period: Duration::ZERO,
            ..SessionConfig::default()
        };
        assert!(matches!(
            Session::new(Deck::standard(), config),
            Err(SessionError::Config(_))
        ));
    }
}

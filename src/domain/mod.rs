//! Domain logic and core state types
//!
//! This module contains the pure session state machine: navigation,
//! selection and animation arithmetic. Nothing here touches threads,
//! timers or the content catalog; everything is synchronous, total and
//! testable in isolation.

pub mod animation;
pub mod navigation;
pub mod selection;

pub use animation::{advance_phase, should_pause, PauseRules, PHASE_STEPS};
pub use navigation::Navigation;
pub use selection::{ItemSpace, SelectionBoard};

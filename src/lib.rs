//! Interactive Banking-as-a-Service presentation session
//!
//! A slide-based educational presentation on the BaaS model proposed by
//! BCB Public Consultation 108/2024: a fixed sequence of sections the
//! viewer steps through, each exposing selectable and hoverable items,
//! with an ambient flow animation that keeps cycling until the viewer's
//! focus (or the play switch) suspends it.
//!
//! The crate is the session state machine plus the static content
//! catalog; rendering is left to the consumer, which reads
//! [`Session::snapshot`] each pass and feeds user gestures back as
//! [`input::Intent`] values.
//!
//! ```
//! use baas_deck::{Intent, ItemSpace, Session};
//!
//! let mut session = Session::standard()?;
//! assert!(session.is_running());
//!
//! session.apply(Intent::SelectSection(1));
//! session.apply(Intent::ToggleItem {
//!     space: ItemSpace::Participant,
//!     id: "bank".into(),
//! });
//! // Viewer is studying a participant: the animation freezes
//! assert!(!session.is_running());
//! # Ok::<(), baas_deck::SessionError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod input;

pub use app::session::{Session, SessionError, Snapshot};
pub use catalog::Deck;
pub use config::SessionConfig;
pub use domain::selection::ItemSpace;
pub use input::Intent;

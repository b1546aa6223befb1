//! Session coordination layer
//!
//! Owns the live state of one presentation: the session facade that
//! dispatches intents across the domain components, and the animation
//! driver that holds the session's only timer resource.

pub mod driver;
pub mod session;

pub use driver::AnimationDriver;
pub use session::{Session, SessionError, Snapshot};

//! Ports - trait seams between the app layer and its collaborators.
//!
//! Each trait here has a default implementation in `impls` (or in this module
//! for the trivial clocks), and tests swap them for doubles.

pub mod clock;
pub mod id_generator;
pub mod progress;
pub mod stages;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::progress::ProgressSink;
pub use self::stages::Stages;

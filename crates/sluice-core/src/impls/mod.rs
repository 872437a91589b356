//! Impls - default implementations of the ports.
//!
//! # Contents
//! - **SimulatedStages**: timed acquire/transform with an injectable failure
//! - **TracingProgressSink / NoopProgressSink / ChannelProgressSink**

pub mod progress;
pub mod simulated;

pub use self::progress::{ChannelProgressSink, NoopProgressSink, TracingProgressSink};
pub use self::simulated::{SIMULATED_ACQUIRE_FAILURE, SimulatedStages};

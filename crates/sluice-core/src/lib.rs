//! sluice-core
//!
//! Runs a batch of independent two-stage tasks (acquire, then transform)
//! concurrently and reports one outcome per task, in input order.
//!
//! # Modules
//! - **domain**: tasks, outcomes, batch results, envelopes, errors, events
//! - **ports**: trait seams (Stages, ProgressSink, Clock, IdGenerator)
//! - **app**: pipeline, orchestrator, response builder, handler, builder
//! - **impls**: simulated stages and progress sinks

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{AppBuilder, BatchHandler, RequestHandler};
pub use domain::{BatchResult, BatchSpec, Envelope, Outcome, TaskSpec};

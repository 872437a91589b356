//! Domain model (tasks, outcomes, batch results, envelopes, errors, events).

pub mod batch;
pub mod envelope;
pub mod errors;
pub mod events;
pub mod ids;
pub mod outcome;
pub mod spec;
pub mod task;

pub use batch::BatchResult;
pub use envelope::Envelope;
pub use errors::{OrchestrationError, SpecError, StageError};
pub use events::{Phase, ProgressEvent, Stage};
pub use ids::BatchId;
pub use outcome::Outcome;
pub use spec::BatchSpec;
pub use task::TaskSpec;

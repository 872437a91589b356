//! App - application layer.
//!
//! Composes the ports into the batch flow:
//! - **ItemPipeline**: acquire → transform for one task, failures contained
//! - **BatchOrchestrator**: concurrent fan-out, input-ordered fan-in
//! - **build_response**: batch result / fault → envelope
//! - **BatchHandler**: request entry point, assembled by **AppBuilder**

pub mod builder;
pub mod handler;
pub mod orchestrator;
pub mod pipeline;
pub mod response;

pub use self::builder::{AppBuilder, BuildError};
pub use self::handler::{BatchHandler, RequestHandler};
pub use self::orchestrator::BatchOrchestrator;
pub use self::pipeline::ItemPipeline;
pub use self::response::build_response;

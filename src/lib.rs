pub mod cli;
pub mod core;
pub mod engine;
pub mod queue;
pub mod services;

pub use crate::core::{
    Message, PipelineConfig, PipelineError, PipelineOutput, PipelineResult, PipelineState,
    ProgressReporter, RunSummary, Transform,
};
pub use engine::{create_quiet_pipeline, run_identity, run_pipeline, run_with_fn, Pipeline};
pub use queue::{bounded_queue, QueueReader, QueueWriter};
pub use services::{
    transform_fn, try_transform_fn, ConfigPreset, ConsoleProgressReporter,
    DefaultPipelineConfig, FnTransform, Identity, NoOpProgressReporter, TracingProgressReporter,
    TryFnTransform,
};

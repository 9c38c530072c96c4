use crate::cli::args::RunArgs;
use crate::core::{PipelineConfig, PipelineOutput, ProgressReporter};
use crate::engine::Pipeline;
use crate::services::{ConsoleProgressReporter, NoOpProgressReporter};
use anyhow::Result;
use serde::Serialize;

/// JSON output of the run command
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub source: Vec<i64>,
    pub destination: Vec<i64>,
    pub summary: crate::core::RunSummary,
}

/// Build and run the pipeline described by the arguments
pub async fn run_from_args(args: &RunArgs) -> Result<RunReport> {
    let config = args.config.resolve()?;
    let source = args.source();

    let reporter: Box<dyn ProgressReporter> = if args.quiet || args.json {
        Box::new(NoOpProgressReporter::new())
    } else {
        Box::new(ConsoleProgressReporter::new())
    };

    tracing::debug!(
        items = source.len(),
        max_queue_size = config.max_queue_size(),
        transform = ?args.transform,
        "building pipeline"
    );

    let mut pipeline = Pipeline::new(source.clone(), args.transform.build(), config, reporter)?;
    let PipelineOutput { items, summary } = pipeline.run_with_summary().await?;

    Ok(RunReport {
        source,
        destination: items,
        summary,
    })
}

/// Execute the run command and print the result
pub async fn execute_run(args: RunArgs) -> Result<()> {
    let report = run_from_args(&args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Source items: {:?}", report.source);
        println!("Destination items: {:?}", report.destination);
        if !args.quiet {
            println!(
                "Queue capacity: {}, elapsed: {}ms",
                report.summary.queue_capacity, report.summary.elapsed_ms
            );
        }
    }

    Ok(())
}

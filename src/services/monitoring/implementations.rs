// 進捗報告の実装: コンソール、tracing、無出力

use crate::core::ProgressReporter;
use async_trait::async_trait;

/// 人が読むための報告。結果と同じ stdout に出すので `--json` では使わない
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_items: usize) {
        if !self.quiet {
            println!("🚀 Starting pipeline with {total_items} items...");
        }
    }

    async fn report_progress(&self, processed: usize, total: usize) {
        if !self.quiet && total > 0 {
            let percentage = (processed as f64 / total as f64) * 100.0;
            println!("📊 Progress: {processed}/{total} ({percentage:.1}%)");
        }
    }

    async fn report_error(&self, stage: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error in {stage}: {error}");
        }
    }

    async fn report_completed(&self, total_processed: usize, elapsed_ms: u64) {
        if !self.quiet {
            println!("✅ Completed! Processed: {total_processed} in {elapsed_ms}ms");
        }
    }
}

/// tracing のイベントとして報告する実装
#[derive(Debug, Default, Clone)]
pub struct TracingProgressReporter;

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for TracingProgressReporter {
    async fn report_started(&self, total_items: usize) {
        tracing::info!(total_items, "pipeline started");
    }

    async fn report_progress(&self, processed: usize, total: usize) {
        tracing::info!(processed, total, "pipeline progress");
    }

    async fn report_error(&self, stage: &str, error: &str) {
        tracing::error!(stage, error, "pipeline failed");
    }

    async fn report_completed(&self, total_processed: usize, elapsed_ms: u64) {
        tracing::info!(total_processed, elapsed_ms, "pipeline completed");
    }
}

/// 報告を捨てる
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_items: usize) {}

    async fn report_progress(&self, _processed: usize, _total: usize) {}

    async fn report_error(&self, _stage: &str, _error: &str) {}

    async fn report_completed(&self, _total_processed: usize, _elapsed_ms: u64) {}
}

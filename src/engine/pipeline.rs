// Pipeline - Producer-Consumer パイプライン
// キューを所有し、2つのワーカーを起動して3段階の待機で完了を確認する

use super::{
    consumer::{spawn_consumer, ProgressHook},
    producer::spawn_producer,
};
use crate::{
    core::{
        DrainReport, PipelineConfig, PipelineError, PipelineOutput, PipelineResult,
        PipelineState, ProgressReporter, RunSummary, Transform,
    },
    queue::{bounded_queue, QueueReader, QueueWriter},
};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// 1回の実行に必要な資源（run() で取り出される）
struct PreparedRun<T> {
    source: Vec<T>,
    writer: QueueWriter<T>,
    reader: QueueReader<T>,
}

/// run() 全体で共有する待機期限
#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: tokio::time::Instant,
    timeout_ms: u64,
}

impl Deadline {
    fn after(timeout: Duration) -> Self {
        Self {
            at: tokio::time::Instant::now() + timeout,
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}

/// 期限内に `future` が完了するのを待つ
async fn within_deadline<F>(
    deadline: Option<Deadline>,
    phase: &'static str,
    future: F,
) -> PipelineResult<F::Output>
where
    F: Future,
{
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline.at, future)
            .await
            .map_err(|_| PipelineError::timeout(phase, deadline.timeout_ms)),
        None => Ok(future.await),
    }
}

/// 単一Producer・単一Consumerの有界キューパイプライン
///
/// 1インスタンスにつき1回だけ実行できる。状態は
/// `Created → Running → Completed | Failed` と遷移し、2回目の実行は
/// `UsageError` になる。
pub struct Pipeline<T, X, C, R> {
    prepared: Option<PreparedRun<T>>,
    source_len: usize,
    transform: Arc<X>,
    config: C,
    reporter: Arc<R>,
    state: PipelineState,
}

impl<T, X, C, R> Pipeline<T, X, C, R>
where
    T: Send + 'static,
    X: Transform<T> + 'static,
    C: PipelineConfig,
    R: ProgressReporter + 'static,
{
    /// 新しいパイプラインを作成
    ///
    /// キューはここで作成される。容量が1未満なら `ConfigurationError`。
    pub fn new(
        source: impl IntoIterator<Item = T>,
        transform: X,
        config: C,
        reporter: R,
    ) -> PipelineResult<Self> {
        if config.enable_progress_reporting() && config.progress_interval() == 0 {
            return Err(PipelineError::configuration(
                "progress_interval は1以上である必要があります",
            ));
        }
        if config.run_timeout() == Some(Duration::ZERO) {
            return Err(PipelineError::configuration(
                "run_timeout は0より大きい必要があります",
            ));
        }

        let (writer, reader) = bounded_queue(config.max_queue_size())?;
        let source: Vec<T> = source.into_iter().collect();

        Ok(Self {
            source_len: source.len(),
            prepared: Some(PreparedRun {
                source,
                writer,
                reader,
            }),
            transform: Arc::new(transform),
            config,
            reporter: Arc::new(reporter),
            state: PipelineState::Created,
        })
    }

    /// パイプラインを実行し、出力列を返す
    pub async fn run(&mut self) -> PipelineResult<Vec<X::Output>> {
        self.run_with_summary().await.map(|output| output.items)
    }

    /// パイプラインを実行し、出力列とサマリーを返す
    pub async fn run_with_summary(&mut self) -> PipelineResult<PipelineOutput<X::Output>> {
        let prepared = self.prepared.take().ok_or_else(|| {
            PipelineError::usage(format!(
                "パイプラインは1回しか実行できません (現在の状態: {})",
                self.state.as_str()
            ))
        })?;

        self.state = PipelineState::Running;
        match self.execute(prepared).await {
            Ok(output) => {
                self.state = PipelineState::Completed;
                Ok(output)
            }
            Err(error) => {
                self.state = PipelineState::Failed;
                let context = error.context();
                tracing::error!(
                    %error,
                    stage = %context.operation,
                    severity = error.severity().as_str(),
                    "pipeline run failed"
                );
                self.reporter
                    .report_error(&context.operation, &error.to_string())
                    .await;
                Err(error)
            }
        }
    }

    /// 非同期コンテキストの外から呼ぶためのブロッキング版
    ///
    /// 専用のランタイムを作成する。既存のランタイム内から呼ぶとパニックする。
    pub fn run_blocking(&mut self) -> PipelineResult<Vec<X::Output>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| PipelineError::internal(e.into()))?;

        let result = runtime.block_on(self.run());
        // タイムアウト時に残ったブロッキングスレッドを待たない
        runtime.shutdown_background();
        result
    }

    async fn execute(&self, prepared: PreparedRun<T>) -> PipelineResult<PipelineOutput<X::Output>> {
        let PreparedRun {
            source,
            writer,
            reader,
        } = prepared;

        let started_at = chrono::Utc::now().to_rfc3339();
        let start_time = Instant::now();
        let total = source.len();
        let queue_capacity = writer.capacity();
        let deadline = self.config.run_timeout().map(Deadline::after);

        tracing::info!(
            total,
            queue_capacity,
            transform = self.transform.name(),
            "pipeline run started"
        );
        self.reporter.report_started(total).await;

        let progress = if self.config.enable_progress_reporting() {
            ProgressHook::every(
                Arc::clone(&self.reporter),
                self.config.progress_interval(),
                total,
            )
        } else {
            ProgressHook::disabled(Arc::clone(&self.reporter), total)
        };

        // Producer / Consumer 起動
        let (completion_tx, completion_rx) = oneshot::channel::<DrainReport>();
        let producer_handle = spawn_producer(source, writer);
        let consumer_handle = spawn_consumer(
            reader,
            Arc::clone(&self.transform),
            completion_tx,
            progress,
        );

        // 1. Producer完了を待機
        let producer_result = within_deadline(deadline, "producer", producer_handle)
            .await?
            .map_err(PipelineError::from)
            .and_then(|result| result);
        let published = match producer_result {
            Ok(published) => published,
            Err(producer_error) => {
                // 投入失敗はConsumer側の中断が原因のことが多いので、その根本原因を優先する
                let error = if matches!(producer_error, PipelineError::FatalQueueError { .. }) {
                    match within_deadline(deadline, "consumer", consumer_handle).await {
                        Ok(Ok(Err(consumer_error))) => consumer_error,
                        Ok(Err(join_error)) => PipelineError::task(join_error),
                        _ => producer_error,
                    }
                } else {
                    producer_error
                };
                return Err(error);
            }
        };
        tracing::debug!(published, "producer barrier passed");

        // 2. キューが処理し尽くされたこと（完了シグナル）を待機
        let drain_report = match within_deadline(deadline, "drain", completion_rx).await? {
            Ok(report) => report,
            Err(_) => {
                // 完了シグナルが送られずにConsumerが終了した
                return Err(
                    match within_deadline(deadline, "consumer", consumer_handle).await? {
                        Ok(Err(consumer_error)) => consumer_error,
                        Err(join_error) => PipelineError::task(join_error),
                        Ok(Ok(_)) => PipelineError::internal(anyhow::anyhow!(
                            "Consumerが完了シグナルを送らずに終了しました"
                        )),
                    },
                );
            }
        };
        tracing::debug!(
            processed = drain_report.items_processed,
            "drain barrier passed"
        );

        // 3. Consumer完了を待機
        let items = within_deadline(deadline, "consumer", consumer_handle)
            .await?
            .map_err(PipelineError::task)??;

        if items.len() != total || drain_report.items_processed != total || published != total {
            return Err(PipelineError::internal(anyhow::anyhow!(
                "件数が一致しません: 入力={total}, 投入={published}, 処理={}, 出力={}",
                drain_report.items_processed,
                items.len()
            )));
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_item_ms = if total > 0 {
            start_time.elapsed().as_secs_f64() * 1000.0 / total as f64
        } else {
            0.0
        };

        self.reporter.report_completed(items.len(), elapsed_ms).await;
        tracing::info!(processed = items.len(), elapsed_ms, "pipeline run completed");

        Ok(PipelineOutput {
            summary: RunSummary {
                total_items: total,
                processed_items: items.len(),
                queue_capacity,
                transform: self.transform.name().to_string(),
                started_at,
                elapsed_ms,
                average_time_per_item_ms,
            },
            items,
        })
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// 入力列の要素数
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

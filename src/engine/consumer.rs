// Consumer - キューを読み出し、変換して出力列へ追加

use crate::{
    core::{DrainReport, Message, PipelineError, PipelineResult, ProgressReporter, Transform},
    queue::QueueReader,
};
use std::sync::Arc;
use tokio::{runtime::Handle, sync::oneshot, task::JoinHandle};

/// Consumerからの進捗報告設定
pub struct ProgressHook<R> {
    reporter: Arc<R>,
    interval: Option<usize>,
    total: usize,
}

impl<R: ProgressReporter> ProgressHook<R> {
    /// `interval` 要素ごとに報告する
    pub fn every(reporter: Arc<R>, interval: usize, total: usize) -> Self {
        Self {
            reporter,
            interval: Some(interval.max(1)),
            total,
        }
    }

    /// 報告しない
    pub fn disabled(reporter: Arc<R>, total: usize) -> Self {
        Self {
            reporter,
            interval: None,
            total,
        }
    }

    fn maybe_report(&self, runtime: &Handle, processed: usize) {
        let Some(interval) = self.interval else {
            return;
        };
        if processed % interval == 0 || processed == self.total {
            runtime.block_on(self.reporter.report_progress(processed, self.total));
        }
    }
}

/// Consumer: 終了マーカーを受け取るまで読み出しを続ける
///
/// 変換に失敗した場合はその要素で中断する（以降の要素は処理しない）。
/// このとき読み出し側を破棄するので、満杯で待機中のProducerも解放される。
/// 完了シグナルは終了マーカーを受け取った場合にだけ送られる。
pub fn spawn_consumer<T, X, R>(
    mut reader: QueueReader<T>,
    transform: Arc<X>,
    completion: oneshot::Sender<DrainReport>,
    progress: ProgressHook<R>,
) -> JoinHandle<PipelineResult<Vec<X::Output>>>
where
    T: Send + 'static,
    X: Transform<T> + 'static,
    R: ProgressReporter + 'static,
{
    let runtime = Handle::current();

    tokio::task::spawn_blocking(move || {
        tracing::debug!(transform = transform.name(), "consumer started");
        let mut output = Vec::with_capacity(progress.total);

        loop {
            match reader.blocking_get()? {
                Message::EndOfStream => break,
                Message::Item(item) => {
                    let index = output.len();
                    let value = transform.apply(item).map_err(|source| {
                        tracing::warn!(index, error = %source, "transform failed, aborting");
                        PipelineError::transform(index, source)
                    })?;
                    output.push(value);
                    progress.maybe_report(&runtime, output.len());
                }
            }
        }

        let report = DrainReport {
            items_processed: output.len(),
        };
        if completion.send(report).is_err() {
            // 待機側が既にタイムアウト等で離脱している
            tracing::debug!("completion signal receiver dropped");
        }
        tracing::debug!(processed = output.len(), "consumer finished");
        Ok(output)
    })
}

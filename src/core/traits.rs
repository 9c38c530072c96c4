// パイプラインのトレイト定義
// 設定・進捗報告・要素変換の抽象化インターフェース

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// キューの最大保持数（1以上）
    fn max_queue_size(&self) -> usize;

    /// run() 全体の待機上限。None なら無制限
    fn run_timeout(&self) -> Option<Duration>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;

    /// 何要素ごとに進捗を報告するか
    fn progress_interval(&self) -> usize;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn max_queue_size(&self) -> usize {
        self.as_ref().max_queue_size()
    }

    fn run_timeout(&self) -> Option<Duration> {
        self.as_ref().run_timeout()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }

    fn progress_interval(&self) -> usize {
        self.as_ref().progress_interval()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 実行開始時の報告
    async fn report_started(&self, total_items: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, processed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, stage: &str, error: &str);

    /// 実行完了時の報告
    async fn report_completed(&self, total_processed: usize, elapsed_ms: u64);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_items: usize) {
        self.as_ref().report_started(total_items).await
    }

    async fn report_progress(&self, processed: usize, total: usize) {
        self.as_ref().report_progress(processed, total).await
    }

    async fn report_error(&self, stage: &str, error: &str) {
        self.as_ref().report_error(stage, error).await
    }

    async fn report_completed(&self, total_processed: usize, elapsed_ms: u64) {
        self.as_ref().report_completed(total_processed, elapsed_ms).await
    }
}

/// Consumerが要素ごとに適用する変換
///
/// 副作用は想定しないが禁止もしない。Consumerのスレッド上で同期的に呼ばれる。
/// Err を返すとパイプラインはその要素で中断する。
pub trait Transform<T>: Send + Sync {
    type Output: Send + 'static;

    fn apply(&self, item: T) -> Result<Self::Output>;

    /// ログやサマリーに出す名前
    fn name(&self) -> &str {
        "custom"
    }
}

// Transform for Box<dyn Transform>
impl<T, U> Transform<T> for Box<dyn Transform<T, Output = U>>
where
    U: Send + 'static,
{
    type Output = U;

    fn apply(&self, item: T) -> Result<U> {
        self.as_ref().apply(item)
    }

    fn name(&self) -> &str {
        self.as_ref().name()
    }
}

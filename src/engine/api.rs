// 高レベル公開API
// Pipelineを簡単に使用できるようにするための便利な関数

use super::Pipeline;
use crate::{
    core::{PipelineResult, Transform},
    services::{
        transform_fn, DefaultPipelineConfig, FnTransform, Identity, NoOpProgressReporter,
    },
};

/// 進捗報告なしのパイプラインを作成
///
/// テストやバックグラウンド処理用。タイムアウトは既定値のまま。
pub fn create_quiet_pipeline<T, X>(
    source: impl IntoIterator<Item = T>,
    transform: X,
    max_queue_size: usize,
) -> PipelineResult<Pipeline<T, X, DefaultPipelineConfig, NoOpProgressReporter>>
where
    T: Send + 'static,
    X: Transform<T> + 'static,
{
    Pipeline::new(
        source,
        transform,
        DefaultPipelineConfig::new(max_queue_size).with_progress_reporting(false),
        NoOpProgressReporter::new(),
    )
}

/// 任意の変換で1回実行して出力列を返す
pub async fn run_pipeline<T, X>(
    source: impl IntoIterator<Item = T>,
    transform: X,
    max_queue_size: usize,
) -> PipelineResult<Vec<X::Output>>
where
    T: Send + 'static,
    X: Transform<T> + 'static,
{
    create_quiet_pipeline(source, transform, max_queue_size)?
        .run()
        .await
}

/// 恒等変換で1回実行（入力列がそのまま返る）
pub async fn run_identity<T>(
    source: impl IntoIterator<Item = T>,
    max_queue_size: usize,
) -> PipelineResult<Vec<T>>
where
    T: Send + 'static,
{
    run_pipeline(source, Identity, max_queue_size).await
}

/// クロージャで1回実行
pub async fn run_with_fn<T, U, F>(
    source: impl IntoIterator<Item = T>,
    func: F,
    max_queue_size: usize,
) -> PipelineResult<Vec<U>>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let transform: FnTransform<F, T, U> = transform_fn("closure", func);
    run_pipeline(source, transform, max_queue_size).await
}

// 統合テスト用のヘルパー
#![allow(dead_code)]

use bounded_pipeline::{
    transform_fn, DefaultPipelineConfig, FnTransform, NoOpProgressReporter, Pipeline,
};
use std::time::Duration;

/// 進捗報告なし・短めのタイムアウトの設定
pub fn test_config(max_queue_size: usize) -> DefaultPipelineConfig {
    DefaultPipelineConfig::new(max_queue_size)
        .with_timeout(Duration::from_secs(10))
        .with_progress_reporting(false)
}

pub fn square() -> FnTransform<fn(u64) -> u64, u64, u64> {
    transform_fn("square", (|x: u64| x * x) as fn(u64) -> u64)
}

/// 0..n を2乗するパイプライン
pub fn square_pipeline(
    n: u64,
    max_queue_size: usize,
) -> Pipeline<u64, FnTransform<fn(u64) -> u64, u64, u64>, DefaultPipelineConfig, NoOpProgressReporter>
{
    Pipeline::new(0..n, square(), test_config(max_queue_size), NoOpProgressReporter::new())
        .expect("テスト用パイプラインの作成に失敗しました")
}

pub fn expected_squares(n: u64) -> Vec<u64> {
    (0..n).map(|x| x * x).collect()
}

// エラーハンドリングの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use bounded_pipeline::{
    core::ErrorSeverity, transform_fn, try_transform_fn, DefaultPipelineConfig, Identity,
    NoOpProgressReporter, Pipeline, PipelineError, PipelineState,
};
use fixtures::{square_pipeline, test_config};
use std::time::Duration;

#[test]
fn test_zero_capacity_is_configuration_error() {
    let result = Pipeline::new(
        vec![1, 2, 3],
        Identity,
        DefaultPipelineConfig::new(0),
        NoOpProgressReporter::new(),
    );

    let error = result.err().expect("容量0は拒否されるべきです");
    assert!(matches!(error, PipelineError::ConfigurationError { .. }));
    assert!(!error.is_recoverable());
    assert_eq!(error.context().operation, "configuration");
}

#[tokio::test]
async fn test_second_run_is_usage_error() {
    let mut pipeline = square_pipeline(5, 2);

    pipeline.run().await.unwrap();
    let error = pipeline.run().await.unwrap_err();

    assert!(matches!(error, PipelineError::UsageError { .. }));
    assert_eq!(error.severity(), ErrorSeverity::High);
}

#[tokio::test]
async fn test_transform_error_aborts_without_partial_output() {
    let failing = try_transform_fn("reject_negative", |x: i64| {
        if x < 0 {
            anyhow::bail!("負の値 {x} は扱えません");
        }
        Ok(x * 10)
    });
    let mut pipeline = Pipeline::new(
        vec![1, 2, -3, 4, 5],
        failing,
        test_config(2),
        NoOpProgressReporter::new(),
    )
    .unwrap();

    let error = pipeline.run().await.unwrap_err();

    match &error {
        PipelineError::TransformError { index, source } => {
            assert_eq!(*index, 2);
            assert!(source.to_string().contains("-3"));
        }
        other => panic!("TransformErrorが期待されます: {other:?}"),
    }
    assert_eq!(pipeline.state(), PipelineState::Failed);
}

#[tokio::test]
async fn test_transform_error_with_large_backlog_does_not_deadlock() {
    // Producerが満杯のキューで待機している状態で失敗させる
    let failing = try_transform_fn("fail_first", |_: u32| -> anyhow::Result<u32> {
        anyhow::bail!("最初の要素で失敗")
    });
    let mut pipeline = Pipeline::new(
        0..10_000u32,
        failing,
        test_config(1),
        NoOpProgressReporter::new(),
    )
    .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), pipeline.run())
        .await
        .expect("デッドロックせずに終了するべきです");

    assert!(matches!(
        result,
        Err(PipelineError::TransformError { index: 0, .. })
    ));
}

#[tokio::test]
async fn test_hanging_transform_hits_timeout() {
    let hanging = transform_fn("hang", |x: u8| {
        std::thread::sleep(Duration::from_millis(300));
        x
    });
    let config = DefaultPipelineConfig::new(1)
        .with_timeout(Duration::from_millis(30))
        .with_progress_reporting(false);
    let mut pipeline = Pipeline::new(vec![1, 2], hanging, config, NoOpProgressReporter::new())
        .unwrap();

    let error = pipeline.run().await.unwrap_err();

    assert!(matches!(error, PipelineError::TimeoutError { .. }));
    assert!(error.is_recoverable());
    assert!(error.to_string().contains("30ms"));
    assert_eq!(pipeline.state(), PipelineState::Failed);
}

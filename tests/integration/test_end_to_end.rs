// パイプライン全体のエンドツーエンドテスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use bounded_pipeline::{
    run_identity, run_with_fn, transform_fn, Identity, NoOpProgressReporter, Pipeline,
    PipelineState,
};
use fixtures::{expected_squares, square_pipeline, test_config};

#[tokio::test]
async fn test_all_items_transferred_without_transform() {
    let source = vec![1, 2, 3, 4, 5];

    let mut pipeline = Pipeline::new(
        source.clone(),
        Identity,
        test_config(100),
        NoOpProgressReporter::new(),
    )
    .unwrap();
    let result = pipeline.run().await.unwrap();

    assert_eq!(result, source);
}

#[tokio::test]
async fn test_all_items_transferred_with_transform() {
    let mut pipeline = Pipeline::new(
        vec![1, 2, 3, 4],
        transform_fn("double", |x: i32| x * 2),
        test_config(100),
        NoOpProgressReporter::new(),
    )
    .unwrap();

    assert_eq!(pipeline.run().await.unwrap(), vec![2, 4, 6, 8]);
}

#[tokio::test]
async fn test_empty_source() {
    let result = run_identity(Vec::<i32>::new(), 100).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_queue_size_limit_does_not_block_forever() {
    // 速度ではなく、小さなキューでも完走し正しい出力になることだけを確認する
    for capacity in [1, 3, 5, 100] {
        let mut pipeline = square_pipeline(50, capacity);

        let output = pipeline.run_with_summary().await.unwrap();

        assert_eq!(output.items, expected_squares(50), "capacity={capacity}");
        assert_eq!(output.items.len(), 50);
        assert_eq!(output.items[49], 2401);
        assert_eq!(output.summary.processed_items, 50);
        assert_eq!(pipeline.state(), PipelineState::Completed);
    }
}

#[tokio::test]
async fn test_length_invariant_for_various_sizes() {
    for n in [0u64, 1, 2, 7, 64, 1000] {
        let mut pipeline = square_pipeline(n, 4);
        let result = pipeline.run().await.unwrap();
        assert_eq!(result.len() as u64, n);
    }
}

#[tokio::test]
async fn test_owned_non_copy_items_keep_order() {
    let source: Vec<String> = (0..200).map(|i| format!("item-{i:03}")).collect();

    let result = run_with_fn(source.clone(), |s: String| s.to_uppercase(), 2)
        .await
        .unwrap();

    let expected: Vec<String> = source.iter().map(|s| s.to_uppercase()).collect();
    assert_eq!(result, expected);
}

#[test]
fn test_run_blocking_from_plain_thread() {
    let mut pipeline = square_pipeline(10, 5);

    let result = pipeline.run_blocking().unwrap();

    assert_eq!(result, vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
}

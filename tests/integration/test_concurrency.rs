// 並行実行時の独立性テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use bounded_pipeline::{transform_fn, NoOpProgressReporter, Pipeline};
use fixtures::test_config;
use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_independent_pipelines_do_not_interleave() {
    const PIPELINES: u64 = 8;
    const ITEMS: u64 = 500;

    let mut handles = Vec::new();
    for id in 0..PIPELINES {
        // 互いに重ならない入力範囲
        let source = (id * ITEMS)..((id + 1) * ITEMS);
        let mut pipeline = Pipeline::new(
            source,
            transform_fn("tag", move |x: u64| (id, x)),
            test_config(1 + id as usize),
            NoOpProgressReporter::new(),
        )
        .unwrap();

        handles.push(tokio::spawn(async move { pipeline.run().await }));
    }

    let mut seen = HashSet::new();
    for (id, handle) in handles.into_iter().enumerate() {
        let id = id as u64;
        let output = handle.await.unwrap().unwrap();

        let expected: Vec<(u64, u64)> = ((id * ITEMS)..((id + 1) * ITEMS)).map(|x| (id, x)).collect();
        assert_eq!(output, expected, "pipeline {id} の出力が混ざっています");

        for (_, x) in output {
            assert!(seen.insert(x), "値 {x} が複数のパイプラインに現れました");
        }
    }
    assert_eq!(seen.len() as u64, PIPELINES * ITEMS);
}

#[test]
fn test_blocking_runs_on_parallel_threads() {
    let handles: Vec<_> = (0..4u32)
        .map(|id| {
            std::thread::spawn(move || {
                let mut pipeline = Pipeline::new(
                    0..100u32,
                    transform_fn("offset", move |x: u32| x + id * 1000),
                    test_config(2),
                    NoOpProgressReporter::new(),
                )
                .unwrap();
                pipeline.run_blocking().unwrap()
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        let output = handle.join().unwrap();
        let expected: Vec<u32> = (0..100).map(|x| x + id as u32 * 1000).collect();
        assert_eq!(output, expected);
    }
}

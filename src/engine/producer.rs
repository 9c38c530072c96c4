// Producer - 入力列をキューへ順番に投入

use crate::{
    core::PipelineResult,
    queue::QueueWriter,
};
use tokio::task::JoinHandle;

/// Producer: 入力列を先頭から順に投入し、最後に終了マーカーを1回だけ送る
///
/// ブロッキングスレッド上で動き、キューが満杯の間だけ待機する。
/// 戻り値は投入した要素数（終了マーカーを含まない）。
pub fn spawn_producer<T>(source: Vec<T>, writer: QueueWriter<T>) -> JoinHandle<PipelineResult<usize>>
where
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let total = source.len();
        tracing::debug!(total, capacity = writer.capacity(), "producer started");

        for (index, item) in source.into_iter().enumerate() {
            if let Err(error) = writer.blocking_put(item) {
                tracing::warn!(index, %error, "producer stopped before publishing all items");
                return Err(error);
            }
        }

        // writer を消費して終了マーカーを送る
        writer.blocking_finish()?;
        tracing::debug!(published = total, "producer finished");
        Ok(total)
    })
}

// BoundedQueue - 固定容量のFIFOキュー
// tokio の有界mpscチャンネルを書き込み側・読み出し側の2つのハンドルに分けて提供

use crate::core::{Message, PipelineError, PipelineResult};
use tokio::sync::{mpsc, Semaphore};

/// 容量の妥当性検証（1以上、ランタイムの上限以下）
pub fn validate_capacity(capacity: usize) -> PipelineResult<()> {
    if capacity < 1 {
        return Err(PipelineError::configuration(format!(
            "max_queue_size は1以上である必要があります (指定値: {capacity})"
        )));
    }
    if capacity > Semaphore::MAX_PERMITS {
        return Err(PipelineError::configuration(format!(
            "max_queue_size は {} 以下である必要があります (指定値: {capacity})",
            Semaphore::MAX_PERMITS
        )));
    }
    Ok(())
}

/// 容量 `capacity` のキューを作成
///
/// 書き込み側と読み出し側はそれぞれ1つだけ存在する（Cloneを実装しない）。
/// 終了マーカーもキューの1枠を使う。
pub fn bounded_queue<T>(capacity: usize) -> PipelineResult<(QueueWriter<T>, QueueReader<T>)> {
    validate_capacity(capacity)?;
    let (tx, rx) = mpsc::channel(capacity);
    Ok((QueueWriter { tx }, QueueReader { rx }))
}

/// キューの書き込み側（Producer専用）
#[derive(Debug)]
pub struct QueueWriter<T> {
    tx: mpsc::Sender<Message<T>>,
}

impl<T> QueueWriter<T> {
    /// 末尾に追加。満杯の間は待機する
    pub async fn put(&self, item: T) -> PipelineResult<()> {
        self.tx
            .send(Message::Item(item))
            .await
            .map_err(|_| reader_gone())
    }

    /// `put` のブロッキング版。非同期コンテキスト外のスレッドから呼ぶこと
    pub fn blocking_put(&self, item: T) -> PipelineResult<()> {
        self.tx
            .blocking_send(Message::Item(item))
            .map_err(|_| reader_gone())
    }

    /// 終了マーカーを送って書き込み側を閉じる
    ///
    /// `self` を消費するため、マーカーが2回送られることはない。
    pub async fn finish(self) -> PipelineResult<()> {
        self.tx
            .send(Message::EndOfStream)
            .await
            .map_err(|_| reader_gone())
    }

    /// `finish` のブロッキング版
    pub fn blocking_finish(self) -> PipelineResult<()> {
        self.tx
            .blocking_send(Message::EndOfStream)
            .map_err(|_| reader_gone())
    }

    /// 現在キューに入っている件数
    pub fn len(&self) -> usize {
        self.tx.max_capacity() - self.tx.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }

    /// 読み出し側が既に破棄されているか
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// キューの読み出し側（Consumer専用）
#[derive(Debug)]
pub struct QueueReader<T> {
    rx: mpsc::Receiver<Message<T>>,
}

impl<T> QueueReader<T> {
    /// 先頭を取り出す。空の間は待機する
    pub async fn get(&mut self) -> PipelineResult<Message<T>> {
        self.rx.recv().await.ok_or_else(writer_gone)
    }

    /// `get` のブロッキング版。非同期コンテキスト外のスレッドから呼ぶこと
    pub fn blocking_get(&mut self) -> PipelineResult<Message<T>> {
        self.rx.blocking_recv().ok_or_else(writer_gone)
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.rx.max_capacity()
    }
}

fn reader_gone() -> PipelineError {
    PipelineError::fatal_queue("読み出し側が閉じられたため投入できません")
}

fn writer_gone() -> PipelineError {
    PipelineError::fatal_queue("終了マーカーを受け取る前に書き込み側が閉じられました")
}

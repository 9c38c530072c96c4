// パイプラインで流れるデータ型と実行結果の型定義

use serde::{Deserialize, Serialize};

/// キューを流れるメッセージ
///
/// 終了マーカーは各キューのメッセージ型に閉じた列挙子として表現する。
/// 値そのものと区別できない番兵オブジェクトは使わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<T> {
    /// 実データ
    Item(T),
    /// 生産完了の通知（1本のキューにつきProducerが1回だけ送る）
    EndOfStream,
}

impl<T> Message<T> {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }

    /// 実データなら取り出す
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::EndOfStream => None,
        }
    }
}

/// パイプラインの状態遷移: Created → Running → Completed | Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Created,
    Running,
    Completed,
    Failed,
}

impl PipelineState {
    /// 終端状態かどうか
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Consumerが終了マーカーを受け取った後に完了シグナルで送る報告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    /// 変換・追加まで完了した要素数（終了マーカーは含まない）
    pub items_processed: usize,
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_items: usize,
    pub processed_items: usize,
    pub queue_capacity: usize,
    pub transform: String,
    pub started_at: String,
    pub elapsed_ms: u64,
    pub average_time_per_item_ms: f64,
}

/// 出力列とサマリーの組
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<U> {
    pub items: Vec<U>,
    pub summary: RunSummary,
}

// 進捗監視機能
// 実行開始・進捗・エラー・完了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter, TracingProgressReporter};

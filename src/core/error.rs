// パイプライン専用のカスタムエラー型定義
// run() の呼び出し元に返るエラーは全てここに集約される

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("使用方法エラー: {message}")]
    UsageError { message: String },

    #[error("変換エラー: 要素#{index} - {source}")]
    TransformError {
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("キューエラー: {message}")]
    FatalQueueError { message: String },

    #[error("タイムアウト: {phase} が {timeout_ms}ms 以内に完了しませんでした")]
    TimeoutError { phase: String, timeout_ms: u64 },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 使用方法エラーの作成
    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    /// 変換エラーの作成
    pub fn transform(index: usize, source: anyhow::Error) -> Self {
        Self::TransformError { index, source }
    }

    /// キューエラーの作成
    pub fn fatal_queue(message: impl Into<String>) -> Self {
        Self::FatalQueueError {
            message: message.into(),
        }
    }

    /// タイムアウトエラーの作成
    pub fn timeout(phase: impl Into<String>, timeout_ms: u64) -> Self {
        Self::TimeoutError {
            phase: phase.into(),
            timeout_ms,
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } | Self::UsageError { .. } => ErrorSeverity::High,
            Self::TransformError { .. } => ErrorSeverity::Medium,
            Self::TimeoutError { .. } => ErrorSeverity::High,
            Self::FatalQueueError { .. } | Self::TaskError { .. } => ErrorSeverity::Critical,
            Self::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 新しいパイプラインで再実行すれば成功し得るかどうか
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } | Self::UsageError { .. } => false,
            Self::TransformError { .. } => true,
            Self::TimeoutError { .. } => true,
            Self::FatalQueueError { .. } => false,
            Self::TaskError { .. } => false,
            Self::InternalError { .. } => false,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .hint(format!("設定を確認してください: {message}")),
            Self::UsageError { .. } => ErrorContext::new("run")
                .hint("パイプラインは1回しか実行できません。新しいインスタンスを作成してください"),
            Self::TransformError { index, .. } => ErrorContext::new("transform")
                .at(format!("item#{index}"))
                .hint("変換関数が全ての入力に対して値を返すか確認してください"),
            Self::FatalQueueError { .. } => ErrorContext::new("queue_transfer")
                .hint("相手側のワーカーが異常終了していないか確認してください"),
            Self::TimeoutError { phase, .. } => ErrorContext::new("await_barrier")
                .at(phase.clone())
                .hint("タイムアウト値を延ばすか、変換処理がブロックしていないか確認してください"),
            _ => ErrorContext::new("unknown"),
        }
    }
}

/// 失敗がどの範囲に影響するか
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    /// 1要素の変換で止まった。入力を直せば再実行できる
    Medium,
    /// 呼び出し側の誤り（設定・再実行）または待機上限切れ
    High,
    /// ワーカーかキューが壊れた
    Critical,
}

impl ErrorSeverity {
    pub const fn as_level(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// ログのフィールド値
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// 失敗箇所の情報（進捗報告と診断用）
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 失敗した処理段階。`ProgressReporter::report_error` の stage になる
    pub operation: String,
    /// 要素番号や待機フェーズ
    pub location: Option<String>,
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            location: None,
            suggestion: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn hint(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// パイプラインの結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        PipelineError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}

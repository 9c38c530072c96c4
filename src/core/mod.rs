// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{ErrorContext, ErrorSeverity, PipelineError, PipelineResult};
pub use traits::{PipelineConfig, ProgressReporter, Transform};
pub use types::{DrainReport, Message, PipelineOutput, PipelineState, RunSummary};

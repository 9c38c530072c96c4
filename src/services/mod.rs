// サービス層 - パイプラインに注入する部品
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod transform;

// 公開API
pub use config::{ConfigPreset, DefaultPipelineConfig};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter, TracingProgressReporter};
pub use transform::{transform_fn, try_transform_fn, FnTransform, Identity, TryFnTransform};

// 設定管理
// 既定値、ビルダー、プリセット、JSON設定ファイル

pub mod implementations;

// 公開API
pub use implementations::{
    ConfigPreset, DefaultPipelineConfig, DEFAULT_MAX_QUEUE_SIZE, DEFAULT_RUN_TIMEOUT,
};

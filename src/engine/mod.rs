// エンジン層 - Producer/Consumerとオーケストレーション
// キューとサービス層を組み合わせて1回分の実行を提供

pub mod api;
pub mod consumer;
mod pipeline;
pub mod producer;

// 公開API
pub use api::{create_quiet_pipeline, run_identity, run_pipeline, run_with_fn};
pub use pipeline::Pipeline;

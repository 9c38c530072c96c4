// 変換フック
// 恒等変換とクロージャのアダプタ

pub mod implementations;

// 公開API
pub use implementations::{
    transform_fn, try_transform_fn, FnTransform, Identity, TryFnTransform,
};

// 変換フックの具象実装

use crate::core::Transform;
use anyhow::Result;
use std::marker::PhantomData;

/// 恒等変換（変換が指定されなかった場合）
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl<T: Send + 'static> Transform<T> for Identity {
    type Output = T;

    fn apply(&self, item: T) -> Result<T> {
        Ok(item)
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// 失敗しないクロージャによる変換
pub struct FnTransform<F, T, U> {
    name: String,
    func: F,
    _marker: PhantomData<fn(T) -> U>,
}

impl<F, T, U> FnTransform<F, T, U>
where
    F: Fn(T) -> U + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _marker: PhantomData,
        }
    }
}

impl<F, T, U> Transform<T> for FnTransform<F, T, U>
where
    F: Fn(T) -> U + Send + Sync,
    U: Send + 'static,
{
    type Output = U;

    fn apply(&self, item: T) -> Result<U> {
        Ok((self.func)(item))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 失敗し得るクロージャによる変換
pub struct TryFnTransform<F, T, U> {
    name: String,
    func: F,
    _marker: PhantomData<fn(T) -> U>,
}

impl<F, T, U> TryFnTransform<F, T, U>
where
    F: Fn(T) -> Result<U> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _marker: PhantomData,
        }
    }
}

impl<F, T, U> Transform<T> for TryFnTransform<F, T, U>
where
    F: Fn(T) -> Result<U> + Send + Sync,
    U: Send + 'static,
{
    type Output = U;

    fn apply(&self, item: T) -> Result<U> {
        (self.func)(item)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `FnTransform` の短縮コンストラクタ
pub fn transform_fn<F, T, U>(name: impl Into<String>, func: F) -> FnTransform<F, T, U>
where
    F: Fn(T) -> U + Send + Sync,
{
    FnTransform::new(name, func)
}

/// `TryFnTransform` の短縮コンストラクタ
pub fn try_transform_fn<F, T, U>(name: impl Into<String>, func: F) -> TryFnTransform<F, T, U>
where
    F: Fn(T) -> Result<U> + Send + Sync,
{
    TryFnTransform::new(name, func)
}

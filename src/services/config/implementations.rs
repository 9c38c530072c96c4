// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};
use crate::queue::validate_capacity;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// キュー容量の既定値
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 100;

/// run() 全体の待機上限の既定値
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(60);

/// デフォルト設定実装
///
/// JSONファイルから読み込む場合、省略したキーは既定値で補われる。
/// `timeout_ms` に `null` を指定すると待機上限なしになる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPipelineConfig {
    max_queue_size: usize,
    timeout_ms: Option<u64>,
    enable_progress: bool,
    progress_interval: usize,
}

impl DefaultPipelineConfig {
    pub fn new(max_queue_size: usize) -> Self {
        Self {
            max_queue_size,
            ..Self::default()
        }
    }

    pub fn with_max_queue_size(mut self, max_queue_size: usize) -> Self {
        self.max_queue_size = max_queue_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout_ms = None;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> PipelineResult<()> {
        validate_capacity(self.max_queue_size)?;
        if self.progress_interval == 0 {
            return Err(PipelineError::configuration(
                "progress_interval は1以上である必要があります",
            ));
        }
        if self.timeout_ms == Some(0) {
            return Err(PipelineError::configuration(
                "timeout_ms は1以上である必要があります（無制限にする場合は null）",
            ));
        }
        Ok(())
    }

    /// JSON設定ファイルから読み込み、検証する
    pub fn from_json_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::configuration(format!(
                "設定ファイルを読み込めません: {} - {e}",
                path.display()
            ))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PipelineError::configuration(format!(
                "設定ファイルの形式が不正です: {} - {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            max_queue_size: DEFAULT_MAX_QUEUE_SIZE,
            timeout_ms: Some(DEFAULT_RUN_TIMEOUT.as_millis() as u64),
            enable_progress: true,
            progress_interval: 100,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn max_queue_size(&self) -> usize {
        self.max_queue_size
    }

    fn run_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }

    fn progress_interval(&self) -> usize {
        self.progress_interval
    }
}

/// 用途別の設定プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// バランスの取れたデフォルト設定
    Default,
    /// 小さなキューで要素をすぐ受け渡す
    LowLatency,
    /// CPU数に応じた大きなキュー
    HighThroughput,
    /// テスト用（短いタイムアウト、進捗報告なし）
    Testing,
}

impl ConfigPreset {
    pub const ALL: [ConfigPreset; 4] = [
        Self::Default,
        Self::LowLatency,
        Self::HighThroughput,
        Self::Testing,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LowLatency => "low_latency",
            Self::HighThroughput => "high_throughput",
            Self::Testing => "testing",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "バランスの取れたデフォルト設定",
            Self::LowLatency => "容量1のキューで即時受け渡し",
            Self::HighThroughput => "高スループット設定（CPU数に比例したキュー）",
            Self::Testing => "テスト用の短いタイムアウト設定",
        }
    }

    pub fn config(&self) -> DefaultPipelineConfig {
        match self {
            Self::Default => DefaultPipelineConfig::default(),
            Self::LowLatency => DefaultPipelineConfig::default()
                .with_max_queue_size(1)
                .with_progress_interval(10),
            Self::HighThroughput => DefaultPipelineConfig::default()
                .with_max_queue_size(num_cpus::get().max(1) * 256)
                .with_progress_interval(10_000),
            Self::Testing => DefaultPipelineConfig::default()
                .with_max_queue_size(3)
                .with_timeout(Duration::from_secs(5))
                .with_progress_reporting(false),
        }
    }
}

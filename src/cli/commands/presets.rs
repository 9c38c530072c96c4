use crate::core::PipelineConfig;
use crate::services::ConfigPreset;

/// One line per preset: name, queue size, timeout, description
pub fn preset_lines() -> Vec<String> {
    ConfigPreset::ALL
        .iter()
        .map(|preset| {
            let config = preset.config();
            let timeout = match config.run_timeout() {
                Some(timeout) => format!("{}ms", timeout.as_millis()),
                None => "none".to_string(),
            };
            format!(
                "{:<16} queue={:<6} timeout={:<8} {}",
                preset.name(),
                config.max_queue_size(),
                timeout,
                preset.description()
            )
        })
        .collect()
}

pub fn execute_presets() {
    for line in preset_lines() {
        println!("{line}");
    }
}

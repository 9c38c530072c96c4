pub mod presets;
pub mod run;
pub mod show_config;

pub use presets::*;
pub use run::*;
pub use show_config::*;

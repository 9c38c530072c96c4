use crate::cli::args::ConfigArgs;
use anyhow::Result;

/// Print the configuration that `run` would use with the same flags
pub fn execute_show_config(args: &ConfigArgs) -> Result<()> {
    let config = args.resolve()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

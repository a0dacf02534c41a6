use anyhow::Result;
use log::{Level, LevelFilter};
use simple_logger::SimpleLogger;

/// Dependencies only report warnings, `level` applies to this crate
pub fn init(level: Level) -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(env!("CARGO_PKG_NAME"), level.to_level_filter())
        .init()?;

    Ok(())
}

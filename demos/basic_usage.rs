//! Basic logger usage example
//!
//! Demonstrates environment-derived defaults, prefixes, metadata and
//! structured messages.
//!
//! Run with: NODE_ENV=local cargo run --example basic_usage

use rust_cloud_logger::prelude::*;
use rust_cloud_logger::{log_debug, log_error, log_info, log_warn};

fn main() -> Result<()> {
    println!("=== Rust Cloud Logger - Basic Usage Example ===\n");

    let settings = resolve_settings(None);
    println!(
        "Resolved settings: level={} console={} cloud={}\n",
        settings.level, settings.use_console, settings.use_stack_driver
    );

    println!("1. Logging at different levels:");
    log_error("This is an error message", None)?;
    log_warn("This is a warning message", None)?;
    log_info("This is an info message", None)?;
    log_debug("This is a debug message", None)?;

    println!("\n2. Prefix and metadata:");
    log_info(
        "request served",
        Some(
            LogInfo::new()
                .prefix("[http] ")
                .meta(serde_json::json!({"path": "/health", "status": 200})),
        ),
    )?;

    println!("\n3. Structured values and errors:");
    log_info(serde_json::json!({"job": "reindex", "documents": 1200}), None)?;
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    log_error(LogMessage::from_error(&err), None)?;

    println!("\n4. Per-call settings override (errors only):");
    let errors_only = LogInfo::new().settings(PartialLogSettings::new().level("error"));
    log_info("Info message (hidden)", Some(errors_only.clone()))?;
    log_error("Error message (visible)", Some(errors_only))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

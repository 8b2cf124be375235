//! Tracing setup
//!
//! Logs go to stdout and to a daily rolling file under `{data_dir}/logs`.

use std::path::Path;
use tracing_appender::{
	non_blocking::WorkerGuard,
	rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
	format!("pulpit_core={level},pulpit={level},sea_orm_migration={level}")
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must outlive logging.
pub fn init(logs_dir: &Path, level: &str) -> anyhow::Result<WorkerGuard> {
	std::fs::create_dir_all(logs_dir)?;

	let file_appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, "pulpit.log");
	let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(fmt::layer().with_target(true).with_writer(std::io::stdout))
		.with(
			fmt::layer()
				.with_target(true)
				.with_ansi(false) // No ANSI colors in log files
				.with_writer(non_blocking),
		)
		.try_init()
		.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

	Ok(guard)
}

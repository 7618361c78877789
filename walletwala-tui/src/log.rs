use std::{fs::File, path::Path, sync::OnceLock};

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACER: OnceLock<()> = OnceLock::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initializes file logging under `log_dir`. Safe to call more than once;
/// only the first call has any effect.
///
/// The terminal itself is owned by ratatui, so nothing is ever logged to
/// stdout/stderr. `RUST_LOG` overrides the default `info` filter.
pub fn setup_logger(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!("walletwala-{}.log", Local::now().format("%Y%m%d")));
    let file = File::create(&path)?;

    TRACER.get_or_init(|| {
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let file_layer = fmt::layer()
            .with_line_number(true)
            .with_writer(non_blocking_writer)
            .with_filter(filter);

        LOG_GUARD.set(guard).ok();

        tracing_subscriber::registry().with(file_layer).try_init().ok();
    });

    Ok(())
}

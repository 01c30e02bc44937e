use {
  super::*,
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

/// Installs a file logger under `log_dir`. The terminal belongs to the UI,
/// so nothing is written to stdout or stderr. Keep the guard alive until
/// exit or buffered lines are lost.
pub(crate) fn init(log_dir: &Path) -> Result<WorkerGuard> {
  fs::create_dir_all(log_dir).with_context(|| {
    format!("could not create log directory {}", log_dir.display())
  })?;

  let appender = tracing_appender::rolling::daily(log_dir, "gamecat.log");

  let (writer, guard) = tracing_appender::non_blocking(appender);

  let filter = EnvFilter::try_from_env("GAMECAT_LOG")
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true),
    )
    .try_init()
    .context("could not install logger")?;

  Ok(guard)
}

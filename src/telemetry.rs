//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global tracing subscriber writing to stdout.
///
/// `log_level` is an env-filter directive (e.g. `info` or
/// `movie_page=debug,tower_http=info`); an unparsable directive falls back to
/// `info`. `log_format` selects `json` output, anything else logs plain text.
pub fn init(log_level: &str, log_format: &str) {
    init_with_writer(log_level, log_format, std::io::stdout);
}

/// Same as [`init`] but writes to stderr, keeping stdout for command output.
pub fn init_stderr(log_level: &str, log_format: &str) {
    init_with_writer(log_level, log_format, std::io::stderr);
}

fn init_with_writer<W>(log_level: &str, log_format: &str, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

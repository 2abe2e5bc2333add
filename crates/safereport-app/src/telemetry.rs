use tracing_subscriber::EnvFilter;

/// Initialize tracing for the CLI.
///
/// `RUST_LOG` sets the filter (default `info`); `LOG_FORMAT=json` switches to
/// JSON lines. Logs go to stderr so stdout stays free for command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

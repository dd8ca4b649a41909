use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr. Quiet unless `-v` is given or `DNOTE_LOG` is set.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("DNOTE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dnote={level},dnote_core={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

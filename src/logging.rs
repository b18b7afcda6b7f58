use tracing_subscriber::EnvFilter;

/// Install the global subscriber: timestamped, leveled lines on stderr.
///
/// `RUST_LOG` overrides the default `demand_import=info` (`debug` when
/// verbose). Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "demand_import=debug"
    } else {
        "demand_import=info"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

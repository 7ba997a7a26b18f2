use tracing_subscriber::EnvFilter;

/// 0 = info, 1 = debug (noisy HTTP internals suppressed), 2+ = trace;
/// quiet shows errors only. `RUST_LOG` overrides all of it.
pub fn init_logging(verbose_level: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let default = match verbose_level {
            0 => "info",
            1 => "debug,hyper=warn,reqwest=warn",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

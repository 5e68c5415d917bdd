use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr logger. `RUST_LOG` wins over `verbose` when set.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "stillreel=debug,info"
    } else {
        "stillreel=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}

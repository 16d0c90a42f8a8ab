//! finanzas: personal finance toolkit.

use finanzas_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        std::process::exit(errors::report(&err, config.quiet));
    }
}

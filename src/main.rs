//! Harness CLI entry point

fn main() {
    // Diagnostic logging goes to stderr; the report itself is printed by the reporter.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    seman_harness::cli::run();
}

/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used.
///
/// ```bash
/// RUST_LOG=debug cargo run                          # capability calls and client sends
/// RUST_LOG=order_workflow::order_service=info cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

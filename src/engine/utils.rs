use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing() {
    // Example: export RUST_LOG="info,updraft=debug"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .compact()
        .init();
}

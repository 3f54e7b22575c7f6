use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "ADCRAFT_LOG";
const DEFAULT_LOG_FILTER: &str = "adcraft=warn";

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    adcraft::app::cli::run();
}

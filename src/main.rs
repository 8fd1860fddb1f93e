use movie_page::config::{self, Config};
use movie_page::{server, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let logging = Config::from_env();
    telemetry::init(&logging.log_level, &logging.log_format);

    if let Err(error) = bootstrap().await {
        server::report_bootstrap_error(&error);
        std::process::exit(1);
    }
}

async fn bootstrap() -> anyhow::Result<()> {
    let config = config::load_from_env()?;
    config.print_summary();

    server::run(config).await
}

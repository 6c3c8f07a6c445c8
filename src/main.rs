use anyhow::{Context, Result};
use dotenv::dotenv;
use launch_relay::launches::LaunchClient;
use launch_relay::server::launch_server;
use launch_relay::settings::Settings;
use std::net::TcpListener;
use tracing::{debug, info, subscriber::set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let _ = dotenv();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    set_global_default(subscriber).expect("Failed to set subscriber");
    LogTracer::init().expect("Failed to set logger");
    let settings = Settings::new()?;
    info!("Starting launch-relay");

    let dsn = settings
        .sentry
        .dsn
        .as_deref()
        .map(str::parse::<sentry::types::Dsn>)
        .transpose()
        .context("Invalid sentry DSN")?;
    if dsn.is_some() {
        debug!("Reporting errors to sentry");
    }
    let _guard = sentry::init(sentry::ClientOptions {
        dsn,
        release: sentry::release_name!(),
        ..Default::default()
    });

    let address = settings.bind_address();
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
    let client = LaunchClient::new(settings.upstream.url);
    info!(%address, upstream = %client.url(), "Serving /latest-launch");

    let sys = actix_web::rt::System::new();
    sys.block_on(async move {
        launch_server(listener, client)
            .context("Failed to start server")?
            .await
            .context("Server exited with an error")
    })
}

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::Config;
use crate::error::StackTrace;
use crate::handler::Handler;

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

fn main() -> Result<(), StackTrace> {
    let config = Config::from_env()?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    dotenvy::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,shell=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let handler = Handler::init()?;
    tracing::info!(log_dir = %config.log_dir.display(), "library console ready");

    route::serve(&handler, std::io::stdin().lock(), std::io::stdout().lock())?;

    Ok(())
}

use announcement_dispatcher::environment::Environment;
use announcement_dispatcher::shutdown::Shutdown;
use announcement_dispatcher_worker::routes::Routes;
use announcement_dispatcher_worker::state::AppState;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::log::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    let rust_log = Environment::string("RUST_LOG", "INFO,sqlx::postgres::notice=WARN,sqlx::query=WARN");
    env::set_var("RUST_LOG", rust_log);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
        .init();

    info!("Starting...");

    let app_state = AppState::new().await?;
    let routes = Routes::routes(&app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], Environment::u16("SERVER_PORT", 9095)));
    let listener = TcpListener::bind(addr).await?;

    info!("Listening for announcement events on {addr}...");
    axum::serve(listener, routes).with_graceful_shutdown(Shutdown::signal("Stopping http server...")).await?;

    info!("Stopped!");

    Ok(())
}

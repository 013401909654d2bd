use farebox::config::Config;
use farebox::engine::Engine;
use farebox::error::Error;
use farebox::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::new(&config);

    serve(engine, config.addr).await
}

#![warn(clippy::all, rust_2018_idioms)]

use awsreport::app::config::AppConfig;
use awsreport::app::server;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // RUST_LOG wins; the default keeps SDK internals quiet.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "awsreport=info,tower_http=info,aws_config=warn,aws_smithy_runtime=warn,\
             aws_smithy_runtime_api=warn,aws_sigv4=warn,hyper=warn",
        )
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config_path =
        std::env::var("AWSREPORT_CONFIG").unwrap_or_else(|_| "awsreport.toml".to_string());
    let config = AppConfig::load(Path::new(&config_path))?;

    server::serve(config).await
}

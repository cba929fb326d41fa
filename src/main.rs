use anyhow::Result;
use clap::Parser;
use order_cart::{
    cli::{Args, CliApp},
    config::CartConfig,
    lifecycle::setup_tracing,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = CartConfig::from_env()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?
        .with_overrides(args.session, args.state_dir, args.menu);

    CliApp::new(config).run(args.command).await
}

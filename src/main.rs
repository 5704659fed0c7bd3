use clap::Parser;

use postboard::api::HttpApi;
use postboard::cli::{self, Cli};
use postboard::logging::init_tracing;
use postboard::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.log.level);

    tracing::debug!(base_url = %config.api.base_url, "starting");
    let api = HttpApi::new(&config.api)?;
    let store = Store::new();

    let mut stdout = std::io::stdout().lock();
    cli::run(cli.command, &store, &api, &mut stdout).await
}

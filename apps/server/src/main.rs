use anyhow::Context;
use petreg::domain::config::ApiConfig;
use petreg::kernel::config::load_config;
use petreg_server::{Server, init_logging};

#[petreg_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;

    Server::builder().config(cfg).build().await?.run().await
}

use clap::Parser;

use democrm_demo::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    democrm_observability::init();

    let cli = Cli::parse();
    democrm_demo::run(cli, &mut std::io::stdout().lock()).await
}

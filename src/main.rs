use clap::Parser;

use trendy_store::cli::{self, Cli};
use trendy_store::logging::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = cli::run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

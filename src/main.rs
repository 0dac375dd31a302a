// src/main.rs

use dropcatch::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("dropcatch error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    // `--version` / `--help` exit inside parse(), before logging or any IO.
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

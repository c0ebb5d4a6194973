use clap::Parser;
use pykelet_cli::{CliArgs, PykeletCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let result = match PykeletCli::from_args("pykelet", &args) {
        Ok(cli) => cli.run(args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

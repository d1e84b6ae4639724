use clap::Parser;
use semindex::cli::args::Cli;
use semindex::cli::dispatch;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command).await {
        eprintln!("error: {err}");
        std::process::exit(if err.is_fatal() { 2 } else { 1 });
    }
}

use area51::adapter::inbound::cli::command::Cli;
use area51::adapter::inbound::cli::{output, run};
use area51::infrastructure::operator::entry::Operator;
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run::execute(cli, &Operator).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

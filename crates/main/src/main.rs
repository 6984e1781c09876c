use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::{
    filter::Targets, layer::SubscriberExt, util::SubscriberInitExt as _, EnvFilter,
};

mod subcommand;

#[derive(clap::Parser)]
#[command(version, about = "Lead-capture intake for interest submissions")]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Serves `POST /interest` and `GET /health`
    Server(subcommand::server::Args),
    /// Validates a JSON payload and prints the normalized form
    Validate(subcommand::validate::Args),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // RUST_LOG replaces the default targets when set
    let env_filter = EnvFilter::try_from_default_env().ok();
    let targets = env_filter.is_none().then(|| {
        Targets::new()
            .with_target("interest_intake", Level::INFO)
            .with_target("server", Level::INFO)
            .with_target("command_use_case", Level::INFO)
            .with_target("in_memory_store", Level::INFO)
            .with_target("firestore_store", Level::INFO)
            .with_target("dynamodb_store", Level::INFO)
            .with_target("tower_http", Level::INFO)
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .with(targets)
        .init();
    let args = <Args as clap::Parser>::parse();
    match args.subcommand {
        Subcommand::Server(args) => subcommand::server::run(args)
            .await
            .map(|()| ExitCode::SUCCESS),
        Subcommand::Validate(args) => subcommand::validate::run(args),
    }
}

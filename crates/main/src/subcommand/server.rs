use std::{net::SocketAddr, sync::Arc, time::Duration};

use command_use_case::port::{InterestRepository, TracingSubmissionObserver};
use dynamodb_store::DynamoDbInterestStore;
use firestore_store::FirestoreInterestStore;
use in_memory_store::InMemoryInterestStore;
use server::App;
use write_model::SchemaVariant;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Backend {
    Firestore,
    #[value(name = "dynamodb")]
    DynamoDb,
    InMemory,
}

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Rule set applied to submissions (`strict-nomad` or `minimal`)
    #[arg(long, env = "SCHEMA_VARIANT", default_value = "strict-nomad")]
    schema_variant: SchemaVariant,
    #[arg(long, env = "INTEREST_BACKEND", value_enum, default_value_t = Backend::DynamoDb)]
    backend: Backend,
    /// Keeps submissions in memory regardless of `--backend`
    #[arg(long, env = "IS_OFFLINE")]
    offline: bool,
    #[arg(long, env = "DYNAMODB_TABLE")]
    dynamodb_table: Option<String>,
    /// Collection path, e.g. `interests`
    #[arg(long, env = "FIRESTORE_COLLECTION")]
    firestore_collection: Option<String>,
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    request_timeout_secs: u64,
}

impl Args {
    fn effective_backend(&self) -> Backend {
        if self.offline {
            Backend::InMemory
        } else {
            self.backend
        }
    }
}

async fn build_interest_repository(
    args: &Args,
) -> anyhow::Result<Arc<dyn InterestRepository + Send + Sync>> {
    let backend = args.effective_backend();
    tracing::info!(?backend, schema_variant = %args.schema_variant, "selecting repository");
    Ok(match backend {
        Backend::Firestore => Arc::new(
            FirestoreInterestStore::new(args.firestore_collection.clone())
                .await
                .map_err(|e| anyhow::anyhow!(e))?,
        ),
        Backend::DynamoDb => {
            let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Arc::new(DynamoDbInterestStore::new(
                &sdk_config,
                args.dynamodb_table.clone(),
            ))
        }
        Backend::InMemory => Arc::new(InMemoryInterestStore::new()),
    })
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let interest_repository = build_interest_repository(&args).await?;
    let app = App::new(
        interest_repository,
        args.schema_variant,
        Arc::new(TracingSubmissionObserver),
    );
    Ok(server::run(
        app,
        args.bind,
        Duration::from_secs(args.request_timeout_secs),
    )
    .await?)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(clap::Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let Cli { args } = Cli::try_parse_from(["test"])?;
        assert_eq!(args.schema_variant, SchemaVariant::StrictNomad);
        assert_eq!(args.backend, Backend::DynamoDb);
        assert!(!args.offline);
        assert_eq!(args.bind, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(args.request_timeout_secs, 10);
        Ok(())
    }

    #[test]
    fn test_flags() -> anyhow::Result<()> {
        let Cli { args } = Cli::try_parse_from([
            "test",
            "--schema-variant",
            "minimal",
            "--backend",
            "firestore",
            "--firestore-collection",
            "interests",
        ])?;
        assert_eq!(args.schema_variant, SchemaVariant::Minimal);
        assert_eq!(args.effective_backend(), Backend::Firestore);
        assert_eq!(args.firestore_collection.as_deref(), Some("interests"));

        let Cli { args } = Cli::try_parse_from(["test", "--backend", "dynamodb", "--offline"])?;
        assert_eq!(args.effective_backend(), Backend::InMemory);

        assert!(Cli::try_parse_from(["test", "--schema-variant", "strict"]).is_err());
        Ok(())
    }
}

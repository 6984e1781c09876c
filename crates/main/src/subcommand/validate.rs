use std::{io::Read as _, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use serde_json::{json, Value};
use write_model::{validate, RawSubmission, SchemaVariant};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, env = "SCHEMA_VARIANT", default_value = "strict-nomad")]
    schema_variant: SchemaVariant,
    /// JSON payload file. Reads stdin when omitted.
    file: Option<PathBuf>,
}

/// `Ok` carries the normalized interest, `Err` the same error body the HTTP API returns.
fn check(input: &str, schema_variant: SchemaVariant) -> Result<Value, Value> {
    let payload = if input.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str::<Value>(input).map_err(|_| {
            json!({ "error": "invalid_json", "message": "Invalid JSON format" })
        })?
    };
    validate(&RawSubmission::from(payload), schema_variant)
        .map(|interest| interest.to_json_value())
        .map_err(|e| json!({ "error": e.reason(), "message": e.to_string(), "details": e.details() }))
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };
    let (output, exit_code) = match check(&input, args.schema_variant) {
        Ok(interest) => (interest, ExitCode::SUCCESS),
        Err(error) => (error, ExitCode::FAILURE),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert_eq!(
            check(
                r#"{"persona":"nomade","email":" A@B.COM ","consent":true}"#,
                SchemaVariant::Minimal
            ),
            Ok(json!({ "persona": "nomade", "email": "a@b.com", "consent": true }))
        );
        assert_eq!(
            check(r#"{"persona":"nomade","email":"a@b.com"}"#, SchemaVariant::Minimal),
            Err(json!({
                "error": "consent_required",
                "message": "Consent is required",
                "details": { "field": "consent" },
            }))
        );
        assert_eq!(
            check("{", SchemaVariant::StrictNomad),
            Err(json!({ "error": "invalid_json", "message": "Invalid JSON format" }))
        );
        assert_eq!(
            check("", SchemaVariant::StrictNomad).map_err(|e| e["error"].clone()),
            Err(json!("invalid_persona"))
        );
    }
}

//! Skimmer CLI - pull required fields out of free-form documents.

use clap::Parser;
use skimmer_cli::cli::{resolve_fields, Cli, CliFormat, Engine};
use skimmer_cli::demo::DEMO_DOCUMENTS;
use skimmer_cli::{CliError, Config, Formatter};
use skimmer_domain::EntityExtractor;
use skimmer_extract::{LlmExtractor, PatternExtractor};
use skimmer_llm::AzureChatClient;
use skimmer_pipeline::{Orchestrator, PipelineConfig};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> skimmer_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|_| Config::default());

    // Command line overrides the config file.
    let pipeline_config = PipelineConfig {
        required_fields: resolve_fields(&cli.fields, &config.required_fields)?,
        max_attempts: cli.max_attempts.unwrap_or(config.max_attempts),
    };

    let formatter = Formatter::new(cli.format, !cli.no_color);

    match cli.engine {
        Engine::Pattern => {
            run_documents(PatternExtractor::new(), pipeline_config, &cli, &formatter).await
        }
        Engine::Azure => {
            let client = build_azure_client(&cli, &config)?;
            run_documents(LlmExtractor::new(client), pipeline_config, &cli, &formatter).await
        }
    }
}

/// Build the Azure client from flags, environment, and the config file.
fn build_azure_client(cli: &Cli, config: &Config) -> skimmer_cli::Result<AzureChatClient> {
    let azure = config.azure.as_ref();

    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| azure.map(|a| a.endpoint.clone()))
        .ok_or_else(|| CliError::MissingCredentials("endpoint".into()))?;
    let deployment = cli
        .deployment
        .clone()
        .or_else(|| azure.map(|a| a.deployment.clone()))
        .ok_or_else(|| CliError::MissingCredentials("deployment".into()))?;
    let api_key = cli
        .api_key
        .clone()
        .ok_or_else(|| CliError::MissingCredentials("api key".into()))?;

    let mut client = AzureChatClient::new(endpoint, api_key, deployment);
    if let Some(api_version) = cli
        .api_version
        .clone()
        .or_else(|| azure.and_then(|a| a.api_version.clone()))
    {
        client = client.with_api_version(api_version);
    }
    if let Some(temperature) = cli
        .temperature
        .or_else(|| azure.and_then(|a| a.temperature))
    {
        client = client.with_temperature(temperature);
    }

    Ok(client)
}

/// Run the demo set, or the single requested document.
async fn run_documents<E: EntityExtractor>(
    extractor: E,
    pipeline_config: PipelineConfig,
    cli: &Cli,
    formatter: &Formatter,
) -> skimmer_cli::Result<()> {
    let orchestrator = Orchestrator::new(extractor, pipeline_config)?;

    if cli.demo {
        for (i, (title, document)) in DEMO_DOCUMENTS.iter().enumerate() {
            if matches!(cli.format, CliFormat::Text) {
                println!("=== Document {}: {} ===", i + 1, title);
            }
            let report = orchestrator.process(document).await;
            println!("{}\n", formatter.format_report(&report)?);
        }
        return Ok(());
    }

    let document = read_document(cli)?;
    let report = orchestrator.process(&document).await;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Read the input document from the given file, or stdin. An empty document
/// is legal input; the pipeline runs its full attempt budget over it.
fn read_document(cli: &Cli) -> skimmer_cli::Result<String> {
    match &cli.document {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

//! `dstypes` — generate model source files from discovered data source
//! schemas.
//!
//! `dstypes generate` reads a discovered-schema JSON document (an array of
//! entities, as produced by a discovery driver) and writes one model file
//! per entity. `dstypes register` records a data source in the
//! configuration document; `dstypes connectors` lists the bundled
//! discovery-capable drivers.

use clap::{Args, Parser, Subcommand};
use datasource_types::{
    generate_all, write_models, ConfigFile, ConnectorCatalog, DataSourceConfig, DiscoveredSchema,
    GenerateError, GenerateSettings, Language, NamingConfig, DEFAULT_CONFIG_FILE,
    DISCOVERED_TYPES_DIR,
};
use std::collections::BTreeMap;
use std::fs;
use std::io::{read_to_string, stdin};
use std::path::{Path, PathBuf};
use std::process;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "dstypes", version, about = "Generate model source files from discovered data source schemas")]
struct Cli {
    /// Path to the configuration document.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate model files from a discovered-schema JSON document
    Generate(GenerateArgs),

    /// Register a data source in the configuration document
    Register(RegisterArgs),

    /// List bundled connectors that support schema discovery
    Connectors,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Discovered-schema JSON file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Registered data source whose naming overrides apply to this batch.
    #[arg(long)]
    source: Option<String>,

    /// Output directory for generated files.
    #[arg(long, default_value = DISCOVERED_TYPES_DIR)]
    out: PathBuf,

    /// Print generated source to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Emit @model/@property decorators carrying discovered metadata.
    #[arg(long)]
    decorators: bool,

    /// Override the configured target language (typescript or rust).
    #[arg(long)]
    language: Option<String>,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Data source name.
    #[arg(long)]
    name: String,

    /// Connector driver name; must support discovery.
    #[arg(long)]
    connector: String,

    /// Connection setting, repeatable: --set host=localhost
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

fn main() {
    let cli: Cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(error) = run(cli) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenerateError> {
    match cli.command {
        Command::Generate(args) => generate(&cli.config, &args),
        Command::Register(args) => register(&cli.config, &args),
        Command::Connectors => list_connectors(),
    }
}

fn generate(config_path: &Path, args: &GenerateArgs) -> Result<(), GenerateError> {
    let config: ConfigFile = ConfigFile::load_or_default(config_path)?;

    let source: Option<&DataSourceConfig> = match &args.source {
        Some(name) => Some(config.data_source(name).ok_or_else(|| {
            GenerateError::Config(format!("data source not registered: {name}"))
        })?),
        None => None,
    };
    let naming: NamingConfig = NamingConfig::resolve(&config, source)?;
    let language: Language = match &args.language {
        Some(raw) => raw.parse()?,
        None => config.resolve_language()?,
    };
    let settings = GenerateSettings {
        language,
        emit_decorators: args.decorators,
    };

    let input_json: String = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => read_to_string(stdin())?,
    };
    let schemas: Vec<DiscoveredSchema> = serde_json::from_str(&input_json)?;

    let report = generate_all(&schemas, &naming, &settings);
    for skipped in &report.skipped {
        warn!("skipped `{}`: {}", skipped.name, skipped.error);
    }

    if args.stdout {
        for model in &report.models {
            print!("{}", model.source_text);
        }
    } else {
        write_models(&report.models, &args.out)?;
        println!(
            "Generated {} model file(s) in {}",
            report.models.len(),
            args.out.display()
        );
    }
    if !report.skipped.is_empty() {
        eprintln!("Skipped {} entities; see warnings above", report.skipped.len());
    }
    Ok(())
}

fn register(config_path: &Path, args: &RegisterArgs) -> Result<(), GenerateError> {
    let catalog: ConnectorCatalog = ConnectorCatalog::bundled()?;
    let connector = catalog.resolve(&args.connector)?;

    let mut settings: BTreeMap<String, serde_json::Value> = BTreeMap::new();
    for pair in &args.set {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            GenerateError::Config(format!("expected KEY=VALUE, got `{pair}`"))
        })?;
        settings.insert(
            key.to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }

    let mut config: ConfigFile = ConfigFile::load_or_default(config_path)?;
    config.register_data_source(DataSourceConfig {
        name: args.name.clone(),
        connector: Some(connector.name.clone()),
        settings,
        ..Default::default()
    });
    config.save(config_path)?;
    println!(
        "Registered data source `{}` using connector `{}`",
        args.name, connector.name
    );
    Ok(())
}

fn list_connectors() -> Result<(), GenerateError> {
    let catalog: ConnectorCatalog = ConnectorCatalog::bundled()?;
    for connector in catalog.discovery_connectors() {
        let inputs: Vec<&str> = connector.inputs().collect();
        println!(
            "{:<12} {} (inputs: {})",
            connector.name,
            connector.description,
            inputs.join(", ")
        );
    }
    Ok(())
}

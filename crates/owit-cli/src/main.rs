use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::debug;

use owit_core::config::{self, CONFIG_FILE_NAME, OwitConfig};
use owit_core::ir::WitDocument;
use owit_core::parse;
use owit_core::parse::spec::OpenApiSpec;
use owit_core::transform::{self, Diagnostic, TranslateOptions, Translation};

#[derive(Parser)]
#[command(name = "owit", about = "OpenAPI to WIT translator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate an OpenAPI spec into a WIT document
    Generate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file, or `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// World name (defaults to the lower-cased API title)
        #[arg(long)]
        world: Option<String>,

        /// Fail when a response references an undeclared schema
        #[arg(long)]
        strict: bool,
    },

    /// Validate that an OpenAPI spec translates cleanly
    Validate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// World name (defaults to the lower-cased API title)
        #[arg(long)]
        world: Option<String>,

        /// Fail when a response references an undeclared schema
        #[arg(long)]
        strict: bool,
    },

    /// Inspect the WIT IR built from an OpenAPI spec
    Inspect {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new owit configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            world,
            strict,
        } => cmd_generate(input, output, world, strict),

        Commands::Validate {
            input,
            world,
            strict,
        } => cmd_validate(input, world, strict),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "owit", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OwitConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

/// Read and parse an OpenAPI document; `.json` files are parsed as JSON,
/// everything else as YAML.
fn load_spec(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    debug!("parsing {} as {ext}", path.display());

    let parsed = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(parsed)
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("  {}: {}", diagnostic.severity(), diagnostic);
    }
}

/// Write the document, creating parent directories as needed.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Layer command-line flags over the config file. `--world` replaces the
/// configured name; `--strict` can only switch strict mode on.
fn resolve_options(cfg: &OwitConfig, world: Option<String>, strict: bool) -> TranslateOptions {
    let mut options = cfg.translate_options();
    if world.is_some() {
        options.world_name = world;
    }
    options.strict |= strict;
    options
}

/// Send rendered WIT to `output`, or to `stdout` when `output` is `-`.
/// Returns `true` when a file was written.
fn deliver(output: &Path, text: &str, stdout: &mut impl Write) -> Result<bool> {
    if output.as_os_str() == "-" {
        stdout.write_all(text.as_bytes())?;
        return Ok(false);
    }
    write_output(output, text)?;
    Ok(true)
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    world: Option<String>,
    strict: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let options = resolve_options(&cfg, world, strict);

    let spec = load_spec(&input)?;
    let rendered = owit_wit::translate(&spec, &options)
        .with_context(|| format!("failed to translate {}", input.display()))?;

    report_diagnostics(&rendered.diagnostics);

    if deliver(&output, &rendered.text, &mut io::stdout().lock())? {
        eprintln!("Generated {} from {}", output.display(), input.display());
    }
    Ok(())
}

/// Run everything `generate` does short of writing: translate under
/// `options` and render the document.
fn validate_spec(spec: &OpenApiSpec, options: &TranslateOptions) -> Result<Translation> {
    let translation = transform::translate_with_options(spec, options)?;
    owit_wit::emitters::document::emit_document(&translation.document)?;
    Ok(translation)
}

fn cmd_validate(input: Option<PathBuf>, world: Option<String>, strict: bool) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let options = resolve_options(&cfg, world, strict);

    let parsed = load_spec(&input)?;

    eprintln!(
        "Valid OpenAPI {} spec: {}",
        parsed.openapi.as_deref().unwrap_or("(unversioned)"),
        parsed.info.title.as_deref().unwrap_or("(untitled)")
    );
    if let Some(ref version) = parsed.info.version {
        eprintln!("  Version: {}", version);
    }
    if let Some(ref paths) = parsed.paths {
        eprintln!("  Paths: {}", paths.len());
    }
    if let Some(ref components) = parsed.components {
        eprintln!("  Schemas: {}", components.schemas.len());
    }

    let translation = validate_spec(&parsed, &options)
        .with_context(|| format!("failed to translate {}", input.display()))?;
    eprintln!("  Records: {}", translation.document.records.len());
    eprintln!("  Functions: {}", translation.document.world.functions.len());
    eprintln!("  Diagnostics: {}", translation.diagnostics.len());
    report_diagnostics(&translation.diagnostics);

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let spec = load_spec(&input)?;
    let translation = transform::translate_with_options(&spec, &TranslateOptions::default())?;

    let summary = build_inspect_summary(&translation.document, &translation.diagnostics);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(doc: &WitDocument, diagnostics: &[Diagnostic]) -> serde_json::Value {
    let records: Vec<serde_json::Value> = doc
        .records
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "fields": r.fields.iter().map(|f| format!("{}: {}", f.name, f.ty)).collect::<Vec<_>>(),
            })
        })
        .collect();

    let functions: Vec<serde_json::Value> = doc
        .world
        .functions
        .iter()
        .map(|f| {
            serde_json::json!({
                "name": f.name,
                "method": f.method.as_str(),
                "path": f.path,
                "params": f.params.len(),
                "returns": f.returns.as_ref().map(ToString::to_string),
            })
        })
        .collect();

    serde_json::json!({
        "world": doc.world.name,
        "records": records,
        "functions": functions,
        "diagnostics": diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = include_str!("../../owit-core/tests/fixtures/petstore.yaml");
    const PEOPLE: &str = include_str!("../../owit-core/tests/fixtures/people.yaml");

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wit").join("nested").join("world.wit");

        write_output(&path, "world api {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "world api {\n}\n");
    }

    #[test]
    fn test_deliver_dash_goes_to_stdout() {
        let mut stdout = Vec::new();

        let wrote_file = deliver(Path::new("-"), "world api {\n}\n", &mut stdout).unwrap();
        assert!(!wrote_file);
        assert_eq!(String::from_utf8(stdout).unwrap(), "world api {\n}\n");
        assert!(!Path::new("-").exists());
    }

    #[test]
    fn test_deliver_path_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wit").join("world.wit");
        let mut stdout = Vec::new();

        assert!(deliver(&path, "world api {\n}\n", &mut stdout).unwrap());
        assert!(stdout.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "world api {\n}\n");
    }

    #[test]
    fn test_world_flag_overrides_config() {
        let cfg = OwitConfig {
            world: Some("from-config".to_string()),
            ..Default::default()
        };

        let options = resolve_options(&cfg, Some("from-flag".to_string()), false);
        assert_eq!(options.world_name.as_deref(), Some("from-flag"));

        let options = resolve_options(&cfg, None, false);
        assert_eq!(options.world_name.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_strict_flag_combines_with_config() {
        let lenient = OwitConfig::default();
        let strict = OwitConfig {
            strict: true,
            ..Default::default()
        };

        assert!(!resolve_options(&lenient, None, false).strict);
        assert!(resolve_options(&lenient, None, true).strict);
        // An absent flag never clears strict mode set in the config.
        assert!(resolve_options(&strict, None, false).strict);
    }

    #[test]
    fn test_validate_honours_strict_config() {
        let spec = parse::from_yaml(PEOPLE).unwrap();

        let lenient = resolve_options(&OwitConfig::default(), None, false);
        let translation = validate_spec(&spec, &lenient).unwrap();
        assert_eq!(translation.diagnostics.len(), 1);

        let cfg = OwitConfig {
            strict: true,
            ..Default::default()
        };
        let err = validate_spec(&spec, &resolve_options(&cfg, None, false)).unwrap_err();
        assert!(err.to_string().contains("AuditEntry"));
    }

    #[test]
    fn test_validate_uses_world_override() {
        let spec = parse::from_yaml(PETSTORE).unwrap();
        let options = resolve_options(&OwitConfig::default(), Some("shop".to_string()), false);

        let translation = validate_spec(&spec, &options).unwrap();
        assert_eq!(translation.document.world.name, "shop");
    }

    #[test]
    fn test_load_spec_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("openapi.yaml");
        fs::write(&path, PETSTORE).unwrap();

        let spec = load_spec(&path).unwrap();
        assert_eq!(spec.info.title.as_deref(), Some("PetStore"));
    }

    #[test]
    fn test_load_spec_reports_path_on_parse_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_spec(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_inspect_summary() {
        let spec = parse::from_yaml(PETSTORE).unwrap();
        let translation = transform::translate(&spec).unwrap();
        let summary = build_inspect_summary(&translation.document, &translation.diagnostics);

        assert_eq!(summary["world"], "petstore");
        assert_eq!(summary["records"][0]["fields"][1], "age: i32");
        assert_eq!(summary["functions"][0]["name"], "GetPets");
        assert_eq!(summary["functions"][0]["returns"], "Pet");
        assert_eq!(summary["diagnostics"].as_array().unwrap().len(), 0);
    }
}

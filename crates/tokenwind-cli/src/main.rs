use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokenwind_codegen::Formatter;
use tokenwind_config::ConfigOptions;
use tokenwind_tokens::Dictionary;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenwind")]
#[command(about = "tokenwind: design tokens to Tailwind v4 CSS")]
#[command(version)]
struct Cli {
    /// Log every skipped and mapped token
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a resolved token dictionary as a Tailwind v4 stylesheet
    Build {
        /// Dictionary JSON (`{"allTokens": [...]}` or a token array)
        tokens: PathBuf,

        /// Formatter config (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report tokens that would be skipped, without writing output
    Check {
        /// Dictionary JSON
        tokens: PathBuf,

        /// Formatter config (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build {
            tokens,
            config,
            output,
        } => cmd_build(&tokens, config.as_deref(), output.as_deref()),
        Command::Check { tokens, config } => cmd_check(&tokens, config.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_formatter(config: Option<&Path>) -> Result<Formatter> {
    let options = match config {
        Some(path) => {
            let source = read_source(path)?;
            let is_toml = path.extension().is_some_and(|ext| ext == "toml");
            let options = if is_toml {
                ConfigOptions::from_toml_str(&source)
            } else {
                ConfigOptions::from_json_str(&source)
            };
            options.with_context(|| format!("loading config {}", path.display()))?
        }
        None => ConfigOptions::default(),
    };
    Formatter::new(options).context("invalid config")
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let source = read_source(path)?;
    let dictionary =
        Dictionary::from_json(&source).with_context(|| format!("parsing {}", path.display()))?;
    debug!(tokens = dictionary.len(), path = %path.display(), "loaded dictionary");
    Ok(dictionary)
}

fn cmd_build(tokens: &Path, config: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let formatter = load_formatter(config)?;
    let dictionary = load_dictionary(tokens)?;
    let css = formatter.format(&dictionary);

    match output {
        Some(path) => {
            std::fs::write(path, &css).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote stylesheet");
            eprintln!("Built: {}", path.display());
        }
        None => print!("{css}"),
    }
    Ok(())
}

fn cmd_check(tokens: &Path, config: Option<&Path>) -> Result<()> {
    let formatter = load_formatter(config)?;
    let dictionary = load_dictionary(tokens)?;
    let processed = formatter.process(&dictionary);

    for diagnostic in &processed.diagnostics {
        eprintln!("skipped {diagnostic}");
    }
    if !processed.diagnostics.is_empty() {
        bail!(
            "{} of {} tokens skipped in {}",
            processed.diagnostics.len(),
            dictionary.len(),
            tokens.display()
        );
    }

    eprintln!("OK: {}", tokens.display());
    Ok(())
}

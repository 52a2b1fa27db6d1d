//! ug-shape - command line front end for the Uyghur shaper
//!
//! Reads a whole document, shapes it once and writes the result, so text can
//! be prepared for renderers that do no contextual shaping of their own.

mod args;

use anyhow::Context;
use args::{Args, Command};
use std::io::{Read, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ug_shaper::{needs_shaping, ShapeOptions, ShapingScanner};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let command = match args::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, args::USAGE);
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("ug-shape {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Shape(args) => match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{:#}", e);
                eprintln!("error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Resolve options: file first, then command line overrides
fn resolve_options(args: &Args) -> anyhow::Result<ShapeOptions> {
    let mut options = match &args.config {
        Some(path) => ShapeOptions::from_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => ShapeOptions::default(),
    };
    if let Some(policy) = args.ligature {
        options.ligature_placeholder = policy;
    }
    Ok(options)
}

/// Shape a complete document according to the arguments
fn shape_document(args: &Args, options: ShapeOptions, input: &str) -> anyhow::Result<String> {
    let scanner = ShapingScanner::new(options);

    if args.json {
        let value: serde_json::Value =
            serde_json::from_str(input).context("input is not valid JSON")?;
        return Ok(scanner.shape_value(&value)?);
    }

    if !args.force && !needs_shaping(input) {
        tracing::info!("No Uyghur letters found, copying input unchanged");
        return Ok(input.to_string());
    }

    let (shaped, stats) = scanner.shape_with_stats(input);
    tracing::info!(
        chars = stats.chars,
        letters = stats.letters,
        joins = stats.joins,
        ligatures = stats.ligatures,
        placeholder = ?scanner.options().ligature_placeholder,
        "Shaped document"
    );
    Ok(shaped)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = resolve_options(args)?;
    tracing::debug!(?options, "Resolved shaping options");

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let shaped = shape_document(args, options, &input)?;

    match &args.output {
        Some(path) => std::fs::write(path, shaped)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(shaped.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use ug_shaper::LigaturePlaceholder;

    #[test]
    fn test_shape_document_plain() {
        let args = Args::default();
        let shaped = shape_document(&args, ShapeOptions::default(), "\u{0628}\u{064A}").unwrap();
        assert_eq!(shaped, "\u{FE91}\u{FEF2}");
    }

    #[test]
    fn test_shape_document_passthrough_without_letters() {
        let args = Args::default();
        let shaped = shape_document(&args, ShapeOptions::default(), "plain text").unwrap();
        assert_eq!(shaped, "plain text");
    }

    #[test]
    fn test_shape_document_json() {
        let args = Args {
            json: true,
            ..Args::default()
        };
        let options = ShapeOptions {
            ligature_placeholder: LigaturePlaceholder::Omit,
        };
        let shaped = shape_document(&args, options, "\"\u{0644}\u{0627}\"").unwrap();
        assert_eq!(shaped, "\u{FEFB}");

        let err = shape_document(&args, options, "42").unwrap_err();
        assert!(err.to_string().contains("got number"));
        assert!(shape_document(&args, options, "{not json").is_err());
    }

    #[test]
    fn test_resolve_options_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");
        std::fs::write(&path, r#"{"ligature_placeholder": "omit"}"#).unwrap();

        let mut args = Args {
            config: Some(path),
            ..Args::default()
        };
        assert_eq!(
            resolve_options(&args).unwrap().ligature_placeholder,
            LigaturePlaceholder::Omit
        );

        args.ligature = Some(LigaturePlaceholder::Nul);
        assert_eq!(
            resolve_options(&args).unwrap().ligature_placeholder,
            LigaturePlaceholder::Nul
        );

        args.config = Some(temp_dir.path().join("missing.json"));
        assert!(resolve_options(&args).is_err());
    }

    #[test]
    fn test_run_with_files() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&input, "abc \u{062A}\u{0627}").unwrap();

        let args = Args {
            input: Some(input),
            output: Some(output.clone()),
            ..Args::default()
        };
        run(&args).unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), "abc \u{FE97}\u{FE8E}");
    }
}

//! Command line parsing

use std::path::PathBuf;
use ug_shaper::LigaturePlaceholder;

pub const USAGE: &str = "\
Usage: ug-shape [OPTIONS] [INPUT]

Shape Uyghur text into Arabic Presentation Forms A/B.
Reads INPUT (or stdin when absent or '-') and writes the shaped text to stdout.

Options:
  -o, --output FILE        Write to FILE instead of stdout
  -c, --config FILE        Load shaping options from a JSON file
  -l, --ligature POLICY    Lam-alef placeholder: 'nul' (default) or 'omit'
      --json               Treat input as one JSON value and shape it
  -f, --force              Shape even when no Uyghur letters are found
  -h, --help               Print help
  -V, --version            Print version";

/// What the invocation asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shape(Args),
    Help,
    Version,
}

/// Options of a shaping run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub ligature: Option<LigaturePlaceholder>,
    pub json: bool,
    pub force: bool,
}

/// Usage error, reported together with [`USAGE`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

/// Parse arguments, excluding the program name
pub fn parse<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--json" => parsed.json = true,
            "-f" | "--force" => parsed.force = true,
            "-o" | "--output" => parsed.output = Some(value(&arg, args.next())?.into()),
            "-c" | "--config" => parsed.config = Some(value(&arg, args.next())?.into()),
            "-l" | "--ligature" => {
                let policy = value(&arg, args.next())?;
                parsed.ligature = Some(
                    policy
                        .parse()
                        .map_err(|e: ug_shaper::ShapeError| UsageError(e.to_string()))?,
                );
            }
            "-" => set_input(&mut parsed, None)?,
            flag if flag.starts_with('-') => {
                return Err(UsageError(format!("unknown option '{}'", flag)));
            }
            path => set_input(&mut parsed, Some(PathBuf::from(path)))?,
        }
    }

    Ok(Command::Shape(parsed))
}

fn value(flag: &str, next: Option<String>) -> Result<String, UsageError> {
    next.ok_or_else(|| UsageError(format!("option '{}' requires a value", flag)))
}

fn set_input(args: &mut Args, input: Option<PathBuf>) -> Result<(), UsageError> {
    if args.input.is_some() {
        return Err(UsageError("more than one INPUT given".to_string()));
    }
    args.input = input;
    Ok(())
}

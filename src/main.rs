//! Purpose: `ownerfmt` CLI entry point.
//! Role: Binary crate root; parses args, loads inputs, prints formatted ownership values.
//! Invariants: Stdout carries only formatted values (plain text, or JSON for `summary`).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::ffi::OsString;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod directory_paths;

use directory_paths::{DIRECTORY_ENV, resolve_directory_path};
use ownerfmt::api::{
    Error, ErrorKind, OwnershipDescription, OwnershipFormatter, UserDirectory, summary_json,
    to_exit_code,
};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `ownerfmt --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    let config = DirectoryConfig {
        flag: cli.directory,
        env: std::env::var_os(DIRECTORY_ENV),
        email_suffix: cli.email_suffix,
    };

    command_dispatch::dispatch_command(cli.command, &config)
        .map_err(add_parse_hint)
        .map_err(|err| (err, color_mode))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "ownerfmt",
    version,
    about = "Format owner ids and emails of an ownership description",
    long_about = None,
    after_help = r#"EXAMPLES
  $ echo '{"primaryOwnerId":"alice","coOwnerIds":["bob"]}' | ownerfmt co-owner-ids
  alice,bob
  $ ownerfmt --directory users.json co-owner-emails --descr job-owner.json
  $ ownerfmt summary --descr job-owner.json

USER DIRECTORY
  {"users": {"alice": {"email": "alice@example.com"}, "bob": {}},
   "defaultEmailSuffix": "@example.com"}
  Lookup order: --directory, $OWNERFMT_DIRECTORY, ~/.ownerfmt/users.json"#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "User directory JSON file (default: ~/.ownerfmt/users.json)",
        value_hint = ValueHint::FilePath
    )]
    directory: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Email suffix for directory users without an explicit email (e.g. @example.com)"
    )]
    email_suffix: Option<String>,
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Args, Clone, Debug)]
struct DescrArgs {
    #[arg(
        long,
        help = "Ownership description JSON file; `-` or omitted reads stdin",
        value_hint = ValueHint::FilePath
    )]
    descr: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print the primary owner id (\"unknown\" when unspecified)")]
    OwnerId {
        #[command(flatten)]
        input: DescrArgs,
    },
    #[command(about = "Print the primary owner email (empty when unavailable)")]
    OwnerEmail {
        #[command(flatten)]
        input: DescrArgs,
    },
    #[command(about = "Print the owner id followed by co-owner ids, comma-separated")]
    CoOwnerIds {
        #[command(flatten)]
        input: DescrArgs,
    },
    #[command(about = "Print resolvable owner and co-owner emails, comma-separated")]
    CoOwnerEmails {
        #[command(flatten)]
        input: DescrArgs,
    },
    #[command(about = "Print all formatted values as one JSON object")]
    Summary {
        #[command(flatten)]
        input: DescrArgs,
    },
    #[command(
        about = "Generate shell completion scripts",
        after_help = r#"EXAMPLES
  $ ownerfmt completion bash > ~/.local/share/bash-completion/completions/ownerfmt
  $ ownerfmt completion zsh > ~/.zfunc/_ownerfmt
  $ ownerfmt completion fish > ~/.config/fish/completions/ownerfmt.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

struct DirectoryConfig {
    flag: Option<PathBuf>,
    env: Option<OsString>,
    email_suffix: Option<String>,
}

fn load_directory(config: &DirectoryConfig) -> Result<UserDirectory, Error> {
    let (path, source) = resolve_directory_path(config.flag.clone(), config.env.clone());
    let directory = if source.allows_missing() && !path.exists() {
        tracing::debug!(path = %path.display(), "no user directory; emails resolve empty");
        UserDirectory::new()
    } else {
        let directory = UserDirectory::load(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => err.with_hint(format!(
                "Create the file, or point --directory / ${DIRECTORY_ENV} at an existing one."
            )),
            _ => err,
        })?;
        tracing::debug!(
            path = %path.display(),
            users = directory.len(),
            "loaded user directory"
        );
        directory
    };
    Ok(match &config.email_suffix {
        Some(suffix) => directory.with_default_suffix(suffix.clone()),
        None => directory,
    })
}

fn read_description(input: &DescrArgs) -> Result<OwnershipDescription, Error> {
    match input.descr.as_deref() {
        Some(path) if path != Path::new("-") => {
            let contents = std::fs::read_to_string(path).map_err(|err| {
                let kind = match err.kind() {
                    io::ErrorKind::NotFound => ErrorKind::NotFound,
                    _ => ErrorKind::Io,
                };
                Error::new(kind)
                    .with_message("failed to read ownership description")
                    .with_path(path)
                    .with_source(err)
            })?;
            OwnershipDescription::from_json(&contents).map_err(|err| err.with_path(path))
        }
        _ => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read ownership description from stdin")
                    .with_source(err)
            })?;
            OwnershipDescription::from_json(&contents)
        }
    }
}

fn emit_line(value: &str) {
    println!("{value}");
}

fn emit_json(value: Value) -> Result<(), Error> {
    let json = encode_json(&value)?;
    println!("{json}");
    Ok(())
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode JSON output")
            .with_source(err)
    })
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim_start_matches("error: ").trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

fn add_parse_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::InvalidArgument || err.hint().is_some() {
        return err;
    }
    err.with_hint("Provide an ownership description object, not `null`.")
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::InvalidArgument => "invalid argument".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Parse => "malformed input".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));
    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!("path: {}", path.display()));
    }
    for cause in error_causes(err) {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, add_parse_hint, encode_json, error_json, error_text};
    use clap::Parser;
    use ownerfmt::api::{Error, ErrorKind};

    #[test]
    fn parses_global_directory_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ownerfmt",
            "co-owner-emails",
            "--descr",
            "d.json",
            "--directory",
            "users.json",
        ])
        .expect("parse");
        assert_eq!(cli.directory.as_deref(), Some(std::path::Path::new("users.json")));
        match cli.command {
            Command::CoOwnerEmails { input } => {
                assert_eq!(input.descr.as_deref(), Some(std::path::Path::new("d.json")));
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn error_json_carries_hint_and_path() {
        let err = Error::new(ErrorKind::NotFound)
            .with_message("failed to read user directory")
            .with_hint("create it")
            .with_path("/nope/users.json");
        let value = error_json(&err);
        assert_eq!(value["error"]["kind"], "NotFound");
        assert_eq!(value["error"]["hint"], "create it");
        assert_eq!(value["error"]["path"], "/nope/users.json");
        assert!(value["error"].get("causes").is_none());
    }

    #[test]
    fn unencodable_output_is_internal_error() {
        let mut value = std::collections::HashMap::new();
        value.insert((1u8, 2u8), "pair keys are not JSON object keys");
        let err = encode_json(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(ownerfmt::api::to_exit_code(err.kind()), 1);
        assert_eq!(error_json(&err)["error"]["kind"], "Internal");
        assert!(error_json(&err)["error"]["causes"].is_array());
    }

    #[test]
    fn invalid_argument_gets_default_hint() {
        let err = add_parse_hint(Error::new(ErrorKind::InvalidArgument));
        assert!(err.hint().is_some());
        let text = error_text(&err, false);
        assert!(text.starts_with("error: invalid argument"));
    }
}

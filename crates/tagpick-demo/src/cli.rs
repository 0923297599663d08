#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TAGPICK_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

use tagpick::{FieldSize, SelectPresetId};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tagpick demo: an interactive multi-select tag picker

USAGE:
    tagpick-demo [OPTIONS]

OPTIONS:
    --options=FILE       JSON array of option labels or {\"label\": ...} objects
    --value=A,B          Initially selected labels (comma separated)
    --label=TEXT         Field caption (default: 'Tags')
    --placeholder=TEXT   Placeholder shown while nothing is selected
    --theme=NAME         Theme: 'dusk' (default) or 'paper'
    --small              Compact chips and rows
    --no-mouse           Disable mouse event capture
    --log=FILE           Write tracing output to FILE
    --log-json           Write log records as JSON lines
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    type            Filter options
    Up / Down       Move the cursor
    Enter           Toggle the option under the cursor
    Backspace       Edit search, or remove the last tag when search is empty
    Esc             Leave the field (Tab to re-enter)
    Ctrl+C / q      Quit (q only while the field is not focused)

ENVIRONMENT VARIABLES:
    TAGPICK_DEMO_OPTIONS      Override --options
    TAGPICK_DEMO_VALUE        Override --value
    TAGPICK_DEMO_THEME        Override --theme
    TAGPICK_DEMO_LOG          Override --log
    TAGPICK_LOG               Log filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// JSON catalog file; a built-in catalog is used when absent.
    pub options_file: Option<PathBuf>,
    /// Initially selected labels.
    pub value: Vec<String>,
    pub label: String,
    pub placeholder: String,
    pub theme: SelectPresetId,
    pub size: FieldSize,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Tracing output file; logging is off when absent.
    pub log_file: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            options_file: None,
            value: Vec::new(),
            label: "Tags".into(),
            placeholder: "Type to search or add a tag".into(),
            theme: SelectPresetId::Dusk,
            size: FieldSize::Normal,
            mouse: true,
            log_file: None,
            log_json: false,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version`, or invalid input.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("tagpick-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }
}

/// Parse `args` with environment lookups supplied by `var`.
pub fn parse_from<I, F>(args: I, var: F) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();

    // Apply environment variable defaults first
    if let Some(val) = var("TAGPICK_DEMO_OPTIONS") {
        opts.options_file = Some(PathBuf::from(val));
    }
    if let Some(val) = var("TAGPICK_DEMO_VALUE") {
        opts.value = split_labels(&val);
    }
    if let Some(val) = var("TAGPICK_DEMO_THEME")
        && let Some(theme) = parse_theme(&val)
    {
        opts.theme = theme;
    }
    if let Some(val) = var("TAGPICK_DEMO_LOG") {
        opts.log_file = Some(PathBuf::from(val));
    }

    // Parse command-line args (override env vars)
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--no-mouse" => opts.mouse = false,
            "--small" => opts.size = FieldSize::Small,
            "--log-json" => opts.log_json = true,
            other => {
                if let Some(val) = other.strip_prefix("--options=") {
                    opts.options_file = Some(PathBuf::from(val));
                } else if let Some(val) = other.strip_prefix("--value=") {
                    opts.value = split_labels(val);
                } else if let Some(val) = other.strip_prefix("--label=") {
                    opts.label = val.to_string();
                } else if let Some(val) = other.strip_prefix("--placeholder=") {
                    opts.placeholder = val.to_string();
                } else if let Some(val) = other.strip_prefix("--theme=") {
                    opts.theme = parse_theme(val).ok_or_else(|| format!("Invalid --theme value: {val}"))?;
                } else if let Some(val) = other.strip_prefix("--log=") {
                    opts.log_file = Some(PathBuf::from(val));
                } else {
                    return Err(format!("Unknown argument: {other}"));
                }
            }
        }
    }

    Ok(Command::Run(opts))
}

fn split_labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_theme(name: &str) -> Option<SelectPresetId> {
    match name.to_ascii_lowercase().as_str() {
        "dusk" => Some(SelectPresetId::Dusk),
        "paper" => Some(SelectPresetId::Paper),
        _ => None,
    }
}

//! Command-line arguments of the `make-labels` binary.

use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser};

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;

/// Label file used when `-json` is not given.
pub const DEFAULT_LABELS_FILE: &str = "example.json";

/// make-labels: create or update GitHub issue labels from a JSON file
#[derive(Parser, Debug)]
#[command(name = "make-labels", version)]
#[command(about = "Create or update GitHub issue labels from a JSON file", long_about = None)]
#[command(override_usage = "make-labels [-json <FILE>] <OWNER>/<REPOSITORY>")]
#[command(after_help = "Don't forget to set the environment variable OCTOKIT_ACCESS_TOKEN.")]
pub struct Cli {
    /// Use this JSON file for user labels
    #[arg(short = 'j', long = "json", value_name = "FILE", default_value = DEFAULT_LABELS_FILE)]
    pub json: PathBuf,

    /// Exit with status 1 if any label could not be created or updated
    #[arg(long)]
    pub strict: bool,

    /// GitHub API base URL, for GitHub Enterprise or test servers
    #[arg(long, value_name = "URL", env = "MAKE_LABELS_API_URL")]
    pub api_url: Option<String>,

    /// Target repository, for example "rails/rails"
    #[arg(value_name = "OWNER/REPOSITORY")]
    pub repository: Vec<String>,
}

/// Flags whose value is the next argument when no `=` is used.
const VALUE_FLAGS: [&str; 3] = ["--json", "-j", "--api-url"];

/// Prepares raw process arguments for [`Cli`].
///
/// The single-dash `-json <file>` and `-json=<file>` forms are rewritten into
/// the `--json` form clap expects. Flag parsing stops at the first positional
/// argument: a `--` is inserted before it, so anything that follows is taken
/// as another positional value. `make-labels o/r -json x` therefore ends up
/// with three repository arguments and prints usage.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    // Program name
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = args.next() {
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let text = arg.to_string_lossy().into_owned();
        if text == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }
        if text == "-" || !text.starts_with('-') {
            normalized.push(OsString::from("--"));
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        let rewritten = match text.strip_prefix("-json") {
            Some("") => Some(OsString::from("--json")),
            Some(value) if value.starts_with('=') => Some(OsString::from(format!("--json{}", value))),
            _ => None,
        };
        let flag = rewritten.unwrap_or(arg);
        expects_value = VALUE_FLAGS.iter().any(|f| flag == *f);
        normalized.push(flag);
    }

    normalized
}

/// Full usage text, printed when the repository argument is missing or invalid.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

//! seass - CSS selector linter
//!
//! Usage:
//!   seass                    Lint the current directory using ./seass.toml
//!   seass styles/            Lint a project directory
//!   seass a.css b.css        Lint individual stylesheets, without configuration
//!
//! Exit status is 0 when clean, 1 when problems were found and 2 when the run
//! could not complete.

mod logger;
mod output;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use seass_project::{LintOptions, LintReport, lint_files, lint_project};

use output::Format;

/// seass - lint CSS selectors against the one-class-per-rule convention
#[derive(Parser, Debug)]
#[command(name = "seass")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lint the current directory (reads ./seass.toml)
    seass

    # Lint another project with a shared configuration
    seass --config ci/seass.toml web/styles

    # Lint two stylesheets and print JSON
    seass --format json a.css b.css
"#)]
struct Cli {
    /// Project directory, or stylesheets to lint individually
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Configuration file to use instead of <dir>/seass.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log nothing
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// What a run lints.
enum Target {
    Project(PathBuf),
    Files(Vec<String>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stderr().is_terminal();
    logger::init(logger::level_filter(cli.verbose, cli.quiet), color);

    match run(&cli, color) {
        Ok(code) => code,
        Err(error) => {
            if color {
                eprintln!("{}: {error:#}", "error".red().bold());
            } else {
                eprintln!("error: {error:#}");
            }
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli, color: bool) -> anyhow::Result<ExitCode> {
    let report = lint(cli)?;

    match cli.format {
        Format::Text => output::write_text(&mut io::stderr().lock(), &report, color)?,
        Format::Json => output::write_json(&mut io::stdout().lock(), &report)?,
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn lint(cli: &Cli) -> anyhow::Result<LintReport> {
    match resolve_target(&cli.paths)? {
        Target::Project(root) => {
            let options = LintOptions {
                config_path: cli.config.clone(),
            };
            lint_project(&root, &options)
                .with_context(|| format!("cannot lint '{}'", root.display()))
        }
        Target::Files(files) => {
            if cli.config.is_some() {
                log::warn!("--config has no effect when linting individual files");
            }
            lint_files(Path::new("."), &files).context("cannot lint stylesheets")
        }
    }
}

/// No paths means the current directory. A directory must be the only path.
fn resolve_target(paths: &[PathBuf]) -> anyhow::Result<Target> {
    match paths {
        [] => Ok(Target::Project(PathBuf::from("."))),
        [dir] if dir.is_dir() => Ok(Target::Project(dir.clone())),
        _ => {
            if let Some(dir) = paths.iter().find(|path| path.is_dir()) {
                bail!(
                    "'{}' is a directory; pass one directory or only stylesheets",
                    dir.display()
                );
            }
            Ok(Target::Files(
                paths
                    .iter()
                    .map(|path| path.to_string_lossy().replace('\\', "/"))
                    .collect(),
            ))
        }
    }
}

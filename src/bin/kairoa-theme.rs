//! Command-line front end for a file-backed theme store.
//!
//! Native tools (build scripts, screenshot runners, desktop shells) share
//! the theme with the web app by pointing at the same JSON store. Each run
//! initializes a controller from the store, applies the command, and prints
//! the resulting theme and root `class` attribute.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use kairoa_theme::{ClassList, FileStorage, Theme, ThemeController};

#[derive(Debug, Parser)]
#[command(name = "kairoa-theme", version, about = "Inspect and change the persisted Kairoa theme")]
struct Cli {
    /// JSON file holding the persisted theme
    #[arg(long, env = "KAIROA_THEME_STORE", default_value = ".kairoa-theme.json", global = true)]
    store: PathBuf,

    /// Print machine-readable JSON instead of styled text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the active theme (default)
    Show,
    /// List all themes in toggle order
    List,
    /// Activate a theme
    Set {
        /// One of: kairoa-light, kairoa-dark, solarized-light, solarized-dark
        theme: String,
    },
    /// Advance to the next theme
    Toggle,
    /// Resolve the startup theme without persisting it
    Init,
}

#[derive(Debug, Serialize)]
struct Report {
    theme: Theme,
    dark: bool,
    classes: String,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report<W: Write>(
    out: &mut W,
    controller: &ThemeController<FileStorage, ClassList>,
    json: bool,
) -> Result<()> {
    let theme = controller.get();
    let report = Report {
        theme,
        dark: theme.is_dark(),
        classes: controller.target().to_string(),
    };

    if json {
        let encoded = serde_json::to_string(&report).context("failed to encode report")?;
        writeln!(out, "{}", encoded)?;
        return Ok(());
    }

    let accent = if report.dark {
        Style::new().magenta().bold()
    } else {
        Style::new().yellow().bold()
    };
    writeln!(out, "{}", accent.apply_to(theme))?;
    writeln!(out, "{} {}", Style::new().dim().apply_to("class="), report.classes)?;
    Ok(())
}

fn print_list<W: Write>(out: &mut W, current: Theme, json: bool) -> Result<()> {
    if json {
        let encoded = serde_json::to_string(&Theme::ALL).context("failed to encode theme list")?;
        writeln!(out, "{}", encoded)?;
        return Ok(());
    }

    for theme in Theme::ALL {
        if theme == current {
            writeln!(
                out,
                "{} {}",
                Style::new().green().apply_to("*"),
                Style::new().bold().apply_to(theme)
            )?;
        } else {
            writeln!(out, "  {}", theme)?;
        }
    }
    Ok(())
}

/// Applies the parsed command to the store and writes the result to `out`.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let storage = FileStorage::new(&cli.store);
    let mut controller = ThemeController::new(storage, ClassList::new());
    controller.init();

    match cli.command.unwrap_or(Command::Show) {
        Command::Show | Command::Init => {}
        Command::List => return print_list(out, controller.get(), cli.json),
        Command::Set { theme } => {
            controller
                .set_tag(&theme)
                .with_context(|| format!("failed to set theme in {}", cli.store.display()))?;
        }
        Command::Toggle => {
            controller
                .toggle()
                .with_context(|| format!("failed to toggle theme in {}", cli.store.display()))?;
        }
    }

    print_report(out, &controller, cli.json)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

mod commands;
mod core;

use clap::{Parser, Subcommand};
use crate::core::composite::Composite;
use crate::core::config::{BumpConfig, FieldSource, PodspecConfig};
use crate::core::error::{print_error, ReleaseError, ReleaseResult};

/// Propagate release versions across the UI composite repository
#[derive(Parser)]
#[command(name = "composite-release")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Propagate a new version across the manifest, telemetry, README and project files
  Bump {
    /// New semantic version (e.g. 1.2.0 or 1.2.0-beta.1)
    #[arg(short = 'v', long = "version")]
    new_version: String,
    /// Target composite: calling or chat
    #[arg(short, long)]
    composite: String,
    /// Output the propagation report in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Update version fields inside the composite's podspec
  Podspec {
    /// New semantic version for spec.version
    #[arg(short = 'v', long = "version")]
    new_version: String,
    /// Target composite: calling or chat
    #[arg(short, long)]
    composite: String,
    /// New swift version; omitted = step skipped
    #[arg(short = 's', long = "swift")]
    swift: Option<String>,
    /// New minimum platform version; omitted = step skipped
    #[arg(short = 'p', long = "platform")]
    platform: Option<String>,
    /// Derive swift and platform versions from the Xcode project file
    /// instead of the flags above
    #[arg(long)]
    from_project: bool,
    /// Output the update report in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = run(cli.command) {
    handle_error(err);
  }
}

fn run(command: Commands) -> ReleaseResult<()> {
  // All target paths are fixed relative to the invocation directory
  let repo_root = std::env::current_dir()?;

  match command {
    Commands::Bump {
      new_version,
      composite,
      json,
    } => {
      let config = BumpConfig {
        repo_root,
        composite: composite.parse::<Composite>()?,
        new_version,
        json,
      };
      commands::run_bump(&config)
    }
    Commands::Podspec {
      new_version,
      composite,
      swift,
      platform,
      from_project,
      json,
    } => {
      let source = if from_project {
        FieldSource::Project
      } else {
        FieldSource::User { swift, platform }
      };
      let config = PodspecConfig {
        repo_root,
        composite: composite.parse::<Composite>()?,
        new_version,
        source,
        json,
      };
      commands::run_podspec(&config)
    }
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use git_version_stamp::cli::orchestration::{
    build_config, run_deps, run_emit, run_resolve, ConfigOverrides, EmitArgs,
};
use git_version_stamp::hooks::HookStyle;
use git_version_stamp::ui;

#[derive(Parser)]
#[command(
    name = "git-version-stamp",
    version,
    about = "Derive a build version from git and stamp it into build output"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Run as if started in this directory"
    )]
    dir: PathBuf,

    #[arg(long, help = "Path of the version file, relative to the output directory")]
    path: Option<String>,

    #[arg(long, help = "Global variable name used in injected HTML")]
    name: Option<String>,

    #[arg(long = "set-version", help = "Use this version instead of asking git")]
    set_version: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved version (default)
    Resolve,

    /// Write the version file and inject the version into HTML pages
    Emit {
        #[arg(long, default_value = "dist", help = "Output directory")]
        out_dir: PathBuf,

        #[arg(long, help = "HTML file to inject the version script into")]
        html: Vec<PathBuf>,

        #[arg(long, help = "Use the callback-based hook interface")]
        legacy_hooks: bool,
    },

    /// Print the paths whose changes alter the version
    Deps,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        path: args.path.clone(),
        name: args.name.clone(),
        version: args.set_version.clone(),
    };
    let config = match build_config(&args.dir, args.config.as_deref(), &overrides) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {:#}", e));
            std::process::exit(1);
        }
    };

    match args.command.unwrap_or(Command::Resolve) {
        Command::Resolve => match run_resolve(&args.dir, &config) {
            Ok(version) => println!("{}", version),
            Err(e) => {
                ui::display_error(&format!("{:#}", e));
                std::process::exit(1);
            }
        },
        Command::Emit {
            out_dir,
            html,
            legacy_hooks,
        } => {
            let style = if legacy_hooks {
                HookStyle::Legacy
            } else {
                HookStyle::Modern
            };
            let emit_args = EmitArgs {
                dir: args.dir.clone(),
                out_dir,
                html,
                style,
            };
            let report = run_emit(&emit_args, config)?;

            for warning in &report.warnings {
                ui::display_warning(warning);
            }
            for written in &report.written {
                ui::display_success(&format!("Wrote {}", written.display()));
            }
            for page in &report.injected {
                ui::display_success(&format!("Injected version into {}", page.display()));
            }
            for path in &report.watched {
                ui::display_status(&format!("Watching {}", path.display()));
            }
        }
        Command::Deps => match run_deps(&args.dir, config)? {
            Some(triggers) => {
                println!("{}", triggers.head_log.display());
                println!("{}", triggers.tags_dir.display());
            }
            None => ui::display_status("No rebuild triggers: version is fixed or no repository"),
        },
    }

    Ok(())
}

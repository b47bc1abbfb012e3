//! calculator — small arithmetic calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calculator::config;
use calculator::constants;
use calculator::demo;
use calculator::env;
use calculator::models;
use calculator::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, EvalArgs};
use config::Config;
use env::Env;
use models::{Evaluation, OutputFormat};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    init_logging(&env, cli.verbose);

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&cwd), &env).context("failed to load configuration")?;
    config.apply_overrides(cli.format, cli.precision);

    match cli.command {
        None | Some(Command::Demo) => run_demo(&config),
        Some(Command::Eval(args)) => run_eval(args, &config),
        Some(Command::Version) => run_version(),
    }
}

/// Install the stderr log subscriber.
///
/// `CALCULATOR_LOG` takes an `EnvFilter` directive; otherwise only
/// warnings are shown, or crate debug events with `--verbose`.
fn init_logging(env: &Env, verbose: bool) {
    let default_directive = if verbose {
        "calculator=debug,warn"
    } else {
        "warn"
    };
    let filter = env
        .non_empty(constants::ENV_LOG)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the demo script and print its results.
fn run_demo(config: &Config) -> Result<()> {
    let evaluations = demo::run().context("demo failed")?;
    if config.output.format == OutputFormat::Terminal {
        print!("{}", demo::header());
    }
    print_evaluations(&evaluations, config);
    Ok(())
}

/// Evaluate one operation from the command line.
fn run_eval(args: EvalArgs, config: &Config) -> Result<()> {
    let evaluation = Evaluation::compute(args.operation, args.lhs, args.rhs).with_context(|| {
        format!(
            "failed to evaluate {}",
            args.operation.describe(args.lhs, args.rhs)
        )
    })?;
    print_evaluations(&[evaluation], config);
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}  {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

fn print_evaluations(evaluations: &[Evaluation], config: &Config) {
    let renderer = output::renderer_for(config.output.format, config.output.precision);
    let rendered = renderer.render(evaluations);
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}

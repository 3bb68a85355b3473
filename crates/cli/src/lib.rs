pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use commands::recommend::ProfileArgs;

#[derive(Debug, Parser)]
#[command(
    name = "lumilab",
    about = "LumiLab operator CLI",
    long_about = "Run product recommendations, inspect the catalog and site content, and check configuration.",
    after_help = "Examples:\n  lumilab recommend --demo --json\n  lumilab recommend --wrinkle 0.6 --irritation 0.2 --hyperpigmentation 0.1\n  lumilab config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend products for a skin risk profile")]
    Recommend(RecommendArgs),
    #[command(about = "List every catalog product with match percentage and price tier")]
    Catalog {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Print the four how-it-works steps")]
    Steps,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

#[derive(Debug, Args)]
struct RecommendArgs {
    #[arg(long, allow_negative_numbers = true, required_unless_present = "demo")]
    wrinkle: Option<f64>,
    #[arg(long, allow_negative_numbers = true, required_unless_present = "demo")]
    irritation: Option<f64>,
    #[arg(long, allow_negative_numbers = true, required_unless_present = "demo")]
    hyperpigmentation: Option<f64>,
    #[arg(
        long,
        conflicts_with_all = ["wrinkle", "irritation", "hyperpigmentation"],
        help = "Use the demo risk profile"
    )]
    demo: bool,
    #[arg(long, help = "Emit machine-readable JSON output")]
    json: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let result = execute(cli.command);

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn execute(command: Command) -> commands::CommandResult {
    match command {
        Command::Recommend(args) => commands::recommend::run(
            ProfileArgs {
                wrinkle: args.wrinkle,
                irritation: args.irritation,
                hyperpigmentation: args.hyperpigmentation,
                demo: args.demo,
            },
            args.json,
        ),
        Command::Catalog { json } => commands::catalog::run(json),
        Command::Steps => commands::steps::run(),
        Command::Config => commands::config::run(),
    }
}

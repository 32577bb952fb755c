use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{preview, section, strategies};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

#[derive(Parser)]
#[command(name = "quickstruct")]
#[command(version = VERSION)]
#[command(about = "Scaffold Liquid sections with linked stylesheet and script assets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a section template plus its optional CSS and JS assets
    #[command(visible_alias = "new")]
    Section(section::SectionArgs),
    /// List the stylesheet and script loading strategies
    Strategies(strategies::StrategiesArgs),
    /// Print the template a section would get, without writing files
    Preview(preview::PreviewArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Preview(_) => ResponseMode::Raw,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if let ResponseMode::Raw = response_mode(&cli.command) {
        return match commands::run_raw(cli.command) {
            Ok((content, exit_code)) => {
                print!("{}", content);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                print_or_report(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        };
    }

    let (json_result, exit_code) = commands::run_json(cli.command);
    print_or_report(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn print_or_report(result: quickstruct::Result<serde_json::Value>) {
    if let Err(err) = output::print_json_result(result) {
        eprintln!("quickstruct: {}", err);
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

// Główny punkt wejścia dla narzędzi CLI
pub mod commands;
pub mod error;
pub mod utils;

use std::io;
use std::process::ExitCode;

use argh::FromArgs;

use commands::{check, decode, encode};

#[derive(FromArgs, PartialEq, Debug)]
/// anid: odwracalne kodowanie liczb do krótkich kluczy alfanumerycznych.
struct Cli {
    /// więcej logów (poziom debug, o ile RUST_LOG nie mówi inaczej)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum Command {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    Check(check::CheckArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Command::Encode(args) => encode::run(args, &mut out),
        Command::Decode(args) => decode::run(args, &mut out, &mut io::stderr()),
        Command::Check(args) => check::run(args, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Komenda zakończona błędem: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

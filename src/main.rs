use clap::Parser;

use marytts_client::Error;
use marytts_client::cli::commands::{configure, listing, phonemes, process, types};
use marytts_client::cli::{Args, Command};
use marytts_client::config::ResolveOptions;
use marytts_client::output::{self, OutputConfig};
use marytts_client::translation::RawProcessOptions;
use marytts_client::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
        verbose: args.verbose,
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let resolve = ResolveOptions {
        host: args.host,
        port: args.port,
        options: RawProcessOptions::default(),
    };

    match args.command {
        Command::Process {
            file,
            text,
            input_type,
            output_type,
            audio,
            voice,
            base64,
            no_base64,
            output,
        } => {
            let options = process::ProcessCommandOptions {
                file,
                text,
                host: resolve.host,
                port: resolve.port,
                options: RawProcessOptions {
                    input_type,
                    output_type,
                    locale: voice.locale,
                    audio,
                    voice: voice.voice,
                    base64: flag_pair(base64, no_base64),
                },
                output,
            };
            process::run_process(options).await?;
        }
        Command::Phonemes { words, voice, json } => {
            let options = phonemes::PhonemesOptions {
                words,
                host: resolve.host,
                port: resolve.port,
                locale: voice.locale,
                voice: voice.voice,
                json,
            };
            phonemes::run_phonemes(options).await?;
        }
        Command::Voices { json } => {
            listing::print_voices(&resolve, json).await?;
        }
        Command::Locales => {
            listing::print_locales(&resolve).await?;
        }
        Command::Types => {
            types::print_types();
        }
        Command::Configure { show } => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}

/// Collapses a `--flag`/`--no-flag` pair into an optional override.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Maps a failure to a sysexits-style exit code.
fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<Error>() {
        Some(Error::Transport { .. }) => exitcode::UNAVAILABLE,
        Some(Error::Status { .. }) => exitcode::PROTOCOL,
        Some(Error::InvalidAddress(_)) => exitcode::CONFIG,
        None => exitcode::SOFTWARE,
    }
}

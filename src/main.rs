use asn2prefix::cli::Args;
use asn2prefix::logging;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("{}: {e}", "warning".yellow());
    }

    match asn2prefix::run(&args).await {
        Ok(out) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|_| stdout.flush()) {
                log::error!("Error writing output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{}: {e}", "error".red());
            ExitCode::FAILURE
        }
    }
}

mod args;
mod embed;
mod error;

use args::EmbedArgs;
use blob2c::OutputMode;
use bytesize::ByteSize;
use error::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: EmbedArgs = argh::from_env();

    if args.version {
        println!(
            "{} version: {}",
            env!("CARGO_BIN_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: EmbedArgs) -> Result<(), CliError> {
    let invocation = args.validate()?;
    let report = embed::embed(&invocation)?;

    if invocation.verbose {
        let size = ByteSize(report.input_len as u64);
        for path in report.files.paths() {
            println!(
                "Wrote {} ({} mode, {size} of input)",
                path.display(),
                invocation.mode
            );
        }
    }

    Ok(())
}

fn report_error(err: &CliError) {
    eprintln!("Error: {err}");

    match err {
        CliError::UnknownMode(_) => {
            eprintln!("The list of known modes is:");
            for name in OutputMode::names() {
                eprintln!("\t{name}");
            }
        }
        CliError::Embed(blob2c::Error::Emit(_)) => {
            eprintln!("Error during writing output into file");
        }
        _ => {}
    }
}

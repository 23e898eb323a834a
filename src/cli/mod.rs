use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
pub mod logging;
mod report;
mod run;

/// Validate the positional arguments, then translate.
///
/// Usage errors are reported on stdout and map to [`ExitStatus::Failure`]
/// before any file is read. Everything after that propagates as `Err`.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(input) = args.input_file.as_deref() else {
        report::print_usage_error("No input file provided.");
        return Ok(ExitStatus::Failure);
    };

    if !input.exists() {
        report::print_usage_error(&format!("File '{}' not found.", input.display()));
        return Ok(ExitStatus::Failure);
    }

    let output = run::run(&args, input)?;
    report::print_complete(&output);

    Ok(ExitStatus::Success)
}

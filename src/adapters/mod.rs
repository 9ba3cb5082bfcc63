#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs, print_gas_list, print_output};
    use crate::solubility::calculator::compute_summary;

    let args = Args::parse();

    if args.list_gases {
        print_gas_list();
        return Ok(());
    }

    let (sample, cond) = parse_inputs(&args)?;

    let out = compute_summary(&sample, &cond);

    print_output(&out, &args)?;

    Ok(())
}

use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::chemistry::Gas;
use crate::error::AppError;
use crate::models::{Conditions, Sample};
use crate::solubility::calculator::CalculationSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dissolved-gas calculator (Henry's law) — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "GAS",
        help = "Gas name, e.g. 'methane' or 'carbon dioxide' (with --x, overrides JSON inputs)"
    )]
    gas: Option<String>,
    #[arg(long, value_name = "PPM", help = "Headspace concentration in ppm")]
    x: Option<f64>,
    #[arg(long, value_name = "DEG_C", help = "Water temperature in °C [default: 22]")]
    temp: Option<f64>,
    #[arg(long, value_name = "PSU", help = "Salinity in PSU [default: 34]")]
    salinity: Option<f64>,
    #[arg(
        long,
        value_name = "ATM",
        help = "Ambient pressure in atm (wins over --depth)"
    )]
    pressure: Option<f64>,
    #[arg(
        long,
        value_name = "M",
        help = "Water depth in m (adds 1 atm per 10 m when --pressure is absent)"
    )]
    depth: Option<f64>,
    #[arg(long, help = "Disable the temperature correction")]
    no_temp_adj: bool,
    #[arg(long, help = "Disable the salinity correction")]
    no_sal_adj: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with sample and optional conditions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the sample (overrides --input)"
    )]
    sample_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the conditions (optional, supplements --sample-json)"
    )]
    conditions_json: Option<String>,
    #[arg(long, help = "List the supported gas names and exit")]
    pub list_gases: bool,
}

fn conditions_from_flags(args: &Args) -> Conditions {
    let defaults = Conditions::default();
    Conditions {
        t_c: args.temp.unwrap_or(defaults.t_c),
        s: args.salinity.unwrap_or(defaults.s),
        p_atm: args.pressure,
        z_m: args.depth,
        temp_adj: !args.no_temp_adj,
        sal_adj: !args.no_sal_adj,
    }
}

fn parse_inline_sample(
    sample_json: &str,
    conditions_json: Option<&String>,
) -> Result<(Sample, Conditions), AppError> {
    let sample: Sample =
        serde_json::from_str(sample_json).map_err(|source| AppError::ParseSampleJson { source })?;

    let conditions = match conditions_json {
        Some(s) => serde_json::from_str::<Conditions>(s)
            .map_err(|source| AppError::ParseConditionsJson { source })?,
        None => Conditions::default(),
    };

    Ok((sample, conditions))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Sample, Conditions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.sample, parsed.conditions.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Sample, Conditions), AppError> {
    if let (Some(gas), Some(x)) = (&args.gas, args.x) {
        let gas = gas.parse::<Gas>()?;
        return Ok((Sample { x, gas }, conditions_from_flags(args)));
    }

    match (&args.sample_json, &args.input) {
        (Some(sample_json), _) => parse_inline_sample(sample_json, args.conditions_json.as_ref()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingSampleData),
    }
}

#[derive(serde::Deserialize)]
struct CmdInput {
    sample: Sample,
    #[serde(default)]
    conditions: Option<Conditions>,
}

pub fn print_gas_list() {
    for gas in Gas::ALL {
        println!("{gas}");
    }
}

pub fn print_output(out: &CalculationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("Gas: {}", out.gas);
        println!("Cw: {:.6e} mol/L", out.dissolved_mol_per_l);
        println!("Cw: {:.6e} µmol/L", out.dissolved_umol_per_l);
        println!("KH: {:.6e} mol/(L·atm)", out.kh_mol_per_l_atm);
        println!("P: {:.3} atm", out.pressure_atm);
        println!("T: {:.2} K", out.temperature_k);
        println!("S: {:.1} PSU", out.salinity_psu);
    }

    Ok(())
}

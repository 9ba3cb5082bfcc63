use serde::Serialize;

use crate::chemistry::{Gas, KELVIN_OFFSET, PPM, UMOL_PER_MOL, ambient_pressure_atm, select_model};
use crate::models::{Conditions, Sample};

/// Compact result for higher-level callers (e.g. CLI or API).
///
/// Fields:
/// - `gas`: the gas the sample was measured for
/// - `dissolved_mol_per_l`: equilibrium aqueous concentration, mol/L
/// - `dissolved_umol_per_l`: the same concentration in µmol/L (×1e6)
/// - `kh_mol_per_l_atm`: the solubility constant used, mol/(L·atm)
/// - `pressure_atm`: the ambient pressure used, atm
/// - `temperature_k`: sample temperature, K
/// - `salinity_psu`: sample salinity, PSU
#[derive(Serialize, Debug, Clone)]
pub struct CalculationSummary {
    pub gas: Gas,
    pub dissolved_mol_per_l: f64,
    pub dissolved_umol_per_l: f64,
    pub kh_mol_per_l_atm: f64,
    pub pressure_atm: f64,
    pub temperature_k: f64,
    pub salinity_psu: f64,
}

/// Equilibrium dissolved-gas concentration (mol/L) for a headspace sample.
///
/// Implements the Henry's-law mass balance `Cw = KH · x · P`:
///
/// 1. Convert units: `TK = t_c + 273.15`, headspace ppm to mole fraction.
/// 2. Resolve ambient pressure: an explicit `p_atm` wins and `z_m` is ignored;
///    otherwise 1 atm at the surface plus 1 atm per 10 m of `z_m`.
/// 3. Select and evaluate the solubility model for the gas and the
///    `temp_adj`/`sal_adj` flags (see [`select_model`]).
/// 4. Multiply out.
///
/// Pure and deterministic: repeated calls with identical arguments return
/// bit-identical results. Inputs are not validated; a negative `x` or a
/// sub-absolute-zero `t_c` produce numerically defined but physically
/// meaningless values.
pub fn dissolved_mol_per_l(sample: &Sample, cond: &Conditions) -> f64 {
    let tk = cond.t_c + KELVIN_OFFSET;
    let xp = sample.x / PPM;
    let p = ambient_pressure_atm(cond.p_atm, cond.z_m);
    let kh =
        select_model(sample.gas, cond.temp_adj, cond.sal_adj).solubility_mol_per_l_atm(tk, cond.s);
    kh * xp * p
}

/// Solubility constant KH (mol/(L·atm)) for a gas under the given conditions.
///
/// Convenient when the caller wants the Henry's-law constant itself rather
/// than a concentration, e.g. to apply it to several headspace readings.
pub fn kh_from_conditions(gas: Gas, cond: &Conditions) -> f64 {
    let tk = cond.t_c + KELVIN_OFFSET;
    select_model(gas, cond.temp_adj, cond.sal_adj).solubility_mol_per_l_atm(tk, cond.s)
}

/// Compute a `CalculationSummary` for the given sample and conditions.
///
/// Runs the same arithmetic as [`dissolved_mol_per_l`] and additionally reports
/// the intermediate quantities (KH, resolved pressure, temperature in K) that a
/// reader needs to check a result against the underlying formulas.
pub fn compute_summary(sample: &Sample, cond: &Conditions) -> CalculationSummary {
    let tk = cond.t_c + KELVIN_OFFSET;
    let p = ambient_pressure_atm(cond.p_atm, cond.z_m);
    let kh =
        select_model(sample.gas, cond.temp_adj, cond.sal_adj).solubility_mol_per_l_atm(tk, cond.s);
    let cw = kh * (sample.x / PPM) * p;

    CalculationSummary {
        gas: sample.gas,
        dissolved_mol_per_l: cw,
        dissolved_umol_per_l: cw * UMOL_PER_MOL,
        kh_mol_per_l_atm: kh,
        pressure_atm: p,
        temperature_k: tk,
        salinity_psu: cond.s,
    }
}

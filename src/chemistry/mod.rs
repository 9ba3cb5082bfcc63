//! Gas-solubility chemistry: constants, the gas catalog, and the Henry's-law
//! solubility-constant (KH) models.
//!
//! This module provides:
//! - The closed catalog of supported gases with reference solubilities (Ko) and
//!   van't Hoff temperature coefficients (dT), from the Sander (2015) compilation
//! - The Wiesenburg & Guinasso (1979) joint temperature/salinity fits for methane
//!   and hydrogen
//! - Model selection: which KH formula applies for a gas and a pair of correction
//!   flags
//! - Ambient-pressure resolution from an explicit value or a water depth
//!
//! Units conventions:
//! - Temperatures are Kelvin inside the formulas; callers convert from °C
//! - Salinity is PSU, pressure is atm, depth is m
//! - Ko values are stored in mol/(L·atm), pre-converted from the literature
//!   mol/(m³·Pa) scale by multiplying with 101.325
//! - The Wiesenburg & Guinasso fits produce nmol/(L·atm) and are divided by 1e9
//!
//! Design notes:
//! - The three KH formulas form a closed tagged union (`KhModel`); the dispatch
//!   policy lives in `select_model` and the formula evaluation in
//!   `KhModel::solubility_mol_per_l_atm`, so both are independently testable
//! - The salinity fits are joint functions of temperature and salinity and are not
//!   decomposable; with `temp_adj` off even methane and hydrogen fall back to the
//!   plain reference constant, salinity ignored
//! - No input validation: out-of-range temperatures or salinities propagate
//!   through the arithmetic
//!
//! # Examples
//! ```rust
//! use headspace_rs::chemistry::{Gas, select_model};
//!
//! let model = select_model(Gas::Methane, true, true);
//! let kh = model.solubility_mol_per_l_atm(295.15, 34.0);
//! assert!(kh > 0.0);
//! ```
//!
//! # References
//! - Wiesenburg, D. A. & Guinasso, N. L. (1979): Equilibrium solubilities of
//!   methane, carbon monoxide, and hydrogen in water and sea water.
//!   J. Chem. Eng. Data 24, 356-360.
//! - Sander, R. (2015): Compilation of Henry's law constants (version 4.0) for
//!   water as solvent. Atmos. Chem. Phys. 15, 4399-4981.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Offset between °C and K.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Reference temperature (K) of the catalog Ko values.
pub const T_REF_K: f64 = 298.15;
/// Conversion factor mol/(m³·Pa) -> mol/(L·atm).
pub const L_ATM_PER_M3_PA: f64 = 101.325;
/// Parts per million in one mole fraction.
pub const PPM: f64 = 1.0e6;
/// Micromoles per mole.
pub const UMOL_PER_MOL: f64 = 1.0e6;
/// Nanomoles per mole.
pub const NMOL_PER_MOL: f64 = 1.0e9;
/// Pressure (atm) at the water surface.
pub const SURFACE_PRESSURE_ATM: f64 = 1.0;
/// Metres of water column per additional atmosphere (hydrostatic approximation).
pub const DEPTH_M_PER_ATM: f64 = 10.0;

/// Gases in the solubility catalog.
///
/// Serialized names are the canonical lowercase keys, spaces included
/// (e.g. `"nitrous oxide"`); parsing is exact-match only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gas {
    Methane,
    Ethane,
    Propane,
    Butane,
    Pentane,
    Hexane,
    Hydrogen,
    Oxygen,
    Nitrogen,
    #[serde(rename = "nitrous oxide")]
    NitrousOxide,
    Argon,
    #[serde(rename = "hydrogen sulfide")]
    HydrogenSulfide,
    #[serde(rename = "carbon dioxide")]
    CarbonDioxide,
}

/// Reference solubility and temperature dependence for the generic van't Hoff
/// model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasProperties {
    /// Solubility constant at 298.15 K, mol/(L·atm).
    pub ko: f64,
    /// Van't Hoff temperature coefficient, K.
    pub d_t: f64,
}

impl Gas {
    pub const ALL: [Gas; 13] = [
        Gas::Methane,
        Gas::Ethane,
        Gas::Propane,
        Gas::Butane,
        Gas::Pentane,
        Gas::Hexane,
        Gas::Hydrogen,
        Gas::Oxygen,
        Gas::Nitrogen,
        Gas::NitrousOxide,
        Gas::Argon,
        Gas::HydrogenSulfide,
        Gas::CarbonDioxide,
    ];

    /// Canonical lowercase name, as accepted by `FromStr` and serde.
    pub fn key(self) -> &'static str {
        match self {
            Gas::Methane => "methane",
            Gas::Ethane => "ethane",
            Gas::Propane => "propane",
            Gas::Butane => "butane",
            Gas::Pentane => "pentane",
            Gas::Hexane => "hexane",
            Gas::Hydrogen => "hydrogen",
            Gas::Oxygen => "oxygen",
            Gas::Nitrogen => "nitrogen",
            Gas::NitrousOxide => "nitrous oxide",
            Gas::Argon => "argon",
            Gas::HydrogenSulfide => "hydrogen sulfide",
            Gas::CarbonDioxide => "carbon dioxide",
        }
    }

    /// Catalog entry for the generic model.
    ///
    /// Ko is converted from the Sander (2015) mol/(m³·Pa) values at the
    /// definition site; dT is the matching temperature coefficient.
    pub fn properties(self) -> GasProperties {
        match self {
            Gas::Methane => GasProperties { ko: 1.4e-5 * L_ATM_PER_M3_PA, d_t: 1900.0 },
            Gas::Ethane => GasProperties { ko: 1.9e-5 * L_ATM_PER_M3_PA, d_t: 2400.0 },
            Gas::Propane => GasProperties { ko: 1.5e-5 * L_ATM_PER_M3_PA, d_t: 2700.0 },
            Gas::Butane => GasProperties { ko: 1.2e-5 * L_ATM_PER_M3_PA, d_t: 3100.0 },
            Gas::Pentane => GasProperties { ko: 8.0e-6 * L_ATM_PER_M3_PA, d_t: 3400.0 },
            Gas::Hexane => GasProperties { ko: 6.0e-6 * L_ATM_PER_M3_PA, d_t: 3800.0 },
            Gas::Hydrogen => GasProperties { ko: 7.8e-6 * L_ATM_PER_M3_PA, d_t: 530.0 },
            Gas::Oxygen => GasProperties { ko: 1.3e-5 * L_ATM_PER_M3_PA, d_t: 1500.0 },
            Gas::Nitrogen => GasProperties { ko: 6.4e-6 * L_ATM_PER_M3_PA, d_t: 1300.0 },
            Gas::NitrousOxide => GasProperties { ko: 2.4e-4 * L_ATM_PER_M3_PA, d_t: 2600.0 },
            Gas::Argon => GasProperties { ko: 1.4e-5 * L_ATM_PER_M3_PA, d_t: 1500.0 },
            Gas::HydrogenSulfide => GasProperties { ko: 1.0e-3 * L_ATM_PER_M3_PA, d_t: 2100.0 },
            Gas::CarbonDioxide => GasProperties { ko: 3.3e-4 * L_ATM_PER_M3_PA, d_t: 2400.0 },
        }
    }

    /// Wiesenburg & Guinasso (1979) fit, for the two gases that have one.
    pub fn salinity_fit(self) -> Option<SalinityFit> {
        match self {
            Gas::Methane => Some(METHANE_WG79),
            Gas::Hydrogen => Some(HYDROGEN_WG79),
            _ => None,
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Gas {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gas::ALL
            .into_iter()
            .find(|gas| gas.key() == s)
            .ok_or_else(|| AppError::UnknownGas { name: s.to_string() })
    }
}

/// Coefficients of a Wiesenburg & Guinasso (1979) solubility fit: ln(KH) in
/// nmol/(L·atm) as a joint function of temperature and salinity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalinityFit {
    pub a: [f64; 4],
    pub b: [f64; 3],
}

/// Methane fit (Wiesenburg & Guinasso 1979).
pub const METHANE_WG79: SalinityFit = SalinityFit {
    a: [-415.2807, 596.8104, 379.2599, -62.0757],
    b: [-0.059160, 0.032174, -0.0048198],
};

/// Hydrogen fit (Wiesenburg & Guinasso 1979).
pub const HYDROGEN_WG79: SalinityFit = SalinityFit {
    a: [-317.4669, 455.8526, 297.5313, -49.2778],
    b: [-0.070143, 0.041069, -0.0063763],
};

impl SalinityFit {
    /// Evaluate the fit at `tk` (K) and salinity `s` (PSU), in mol/(L·atm).
    pub fn solubility_mol_per_l_atm(&self, tk: f64, s: f64) -> f64 {
        let t100 = tk / 100.0;
        let ln_kh_nmol = self.a[0]
            + self.a[1] * (100.0 / tk)
            + self.a[2] * t100.ln()
            + self.a[3] * t100
            + s * (self.b[0] + self.b[1] * t100 + self.b[2] * t100 * t100);
        ln_kh_nmol.exp() / NMOL_PER_MOL
    }
}

/// A selected Henry's-law solubility model, ready to evaluate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KhModel {
    /// Catalog constant, no corrections.
    Reference { ko: f64 },
    /// Catalog constant with van't Hoff temperature correction.
    VantHoff { ko: f64, d_t: f64 },
    /// Joint temperature/salinity fit (methane and hydrogen only).
    WiesenburgGuinasso(SalinityFit),
}

impl KhModel {
    /// Solubility constant KH in mol/(L·atm) at `tk` (K) and salinity `s` (PSU).
    ///
    /// `s` only enters the Wiesenburg-Guinasso variant; the other two ignore it.
    pub fn solubility_mol_per_l_atm(&self, tk: f64, s: f64) -> f64 {
        match *self {
            KhModel::Reference { ko } => ko,
            KhModel::VantHoff { ko, d_t } => ko * (d_t * (1.0 / tk - 1.0 / T_REF_K)).exp(),
            KhModel::WiesenburgGuinasso(fit) => fit.solubility_mol_per_l_atm(tk, s),
        }
    }
}

/// Pick the KH model for a gas and the requested corrections.
///
/// Methane and hydrogen get their Wiesenburg-Guinasso fit only when both
/// corrections are enabled; the fit is joint in temperature and salinity and
/// cannot be applied for one without the other. Every other combination uses
/// the catalog constant, temperature-corrected when `temp_adj` is set.
pub fn select_model(gas: Gas, temp_adj: bool, sal_adj: bool) -> KhModel {
    if temp_adj && sal_adj {
        if let Some(fit) = gas.salinity_fit() {
            return KhModel::WiesenburgGuinasso(fit);
        }
    }
    let GasProperties { ko, d_t } = gas.properties();
    if temp_adj {
        KhModel::VantHoff { ko, d_t }
    } else {
        KhModel::Reference { ko }
    }
}

/// Ambient pressure (atm): an explicit pressure wins over depth; otherwise one
/// atmosphere at the surface plus one per ten metres of water.
pub fn ambient_pressure_atm(p_atm: Option<f64>, z_m: Option<f64>) -> f64 {
    match (p_atm, z_m) {
        (Some(p), _) => p,
        (None, Some(z)) => SURFACE_PRESSURE_ATM + z / DEPTH_M_PER_ATM,
        (None, None) => SURFACE_PRESSURE_ATM,
    }
}

pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod solubility;

pub use crate::chemistry::{Gas, GasProperties, KhModel, SalinityFit, select_model};
pub use crate::error::AppError;
pub use crate::models::{Conditions, Sample};
pub use crate::solubility::calculator::{
    CalculationSummary, compute_summary, dissolved_mol_per_l, kh_from_conditions,
};

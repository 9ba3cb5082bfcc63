use serde::{Deserialize, Serialize};

use crate::chemistry::Gas;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub gas: Gas,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub t_c: f64,
    pub s: f64,
    pub p_atm: Option<f64>,
    pub z_m: Option<f64>,
    pub temp_adj: bool,
    pub sal_adj: bool,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            t_c: 22.0,
            s: 34.0,
            p_atm: None,
            z_m: None,
            temp_adj: true,
            sal_adj: true,
        }
    }
}

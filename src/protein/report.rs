//! Result bundle for one submitted sequence

use std::fmt;

use log::debug;

use crate::protein::properties::{arange, linspace, PH_MAX, PH_MIN};
use crate::protein::sequence::ProteinSequence;

/// pH sweep shown in the net charge table: 4.0 to 10.0, step 0.5
pub const TABLE_PH_START: f64 = 4.0;
pub const TABLE_PH_STOP: f64 = 10.5;
pub const TABLE_PH_STEP: f64 = 0.5;

/// Samples in the full-range charge curve
pub const CURVE_POINTS: usize = 200;

pub const CALIBRATION_NOTE: &str = "The Calibrated Con value may be over-estimated or under-estimated \
relative to actual A280nm absorbance measurements, and should always be interpreted by dividing \
the measured result by the Calibrated Con.";

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinReport {
    pub sequence: ProteinSequence,
    pub molecular_weight: f64,
    pub extinction_coefficient: u64,
    pub isoelectric_point: f64,
    pub calibrated_concentration: f64,
    /// `(pH, net charge)` from pH 4.0 to 10.0
    pub charge_table: Vec<(f64, f64)>,
    /// `(pH, net charge)` over 0 to 14
    pub charge_curve: Vec<(f64, f64)>,
}

impl ProteinReport {
    pub fn analyze(sequence: &ProteinSequence) -> ProteinReport {
        debug!("Analyzing sequence of length {}", sequence.len());

        let table_grid = arange(TABLE_PH_START, TABLE_PH_STOP, TABLE_PH_STEP);
        let curve_grid = linspace(PH_MIN, PH_MAX, CURVE_POINTS);

        ProteinReport {
            sequence: sequence.clone(),
            molecular_weight: sequence.molecular_weight(),
            extinction_coefficient: sequence.extinction_coefficient(),
            isoelectric_point: sequence.isoelectric_point(),
            calibrated_concentration: sequence.calibrated_concentration_proxy(),
            charge_table: sequence.charge_curve(&table_grid),
            charge_curve: sequence.charge_curve(&curve_grid),
        }
    }
}

impl fmt::Display for ProteinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Molecular Weight: {:.2} Da", self.molecular_weight)?;
        writeln!(f, "Extinction Coefficient (280nm): {} M^-1 cm^-1", self.extinction_coefficient)?;
        writeln!(f, "Isoelectric Point (pI): {:.2}", self.isoelectric_point)?;
        write!(f, "Calibrated Con (A280nm): {:.6}", self.calibrated_concentration)
    }
}

//! Physicochemical properties of a protein sequence
//!
//! Every function here is a pure function of the residue composition (and the
//! pH where one is taken). Methods on [`ProteinSequence`] are infallible; the
//! free functions accept raw `&str` input and reject any non-standard residue
//! with [`InvalidResidueError`] before computing anything.

use log::debug;

use crate::protein::residues::{
    get_amino_acid_molecular_weight, get_extinction_coefficient, IonizableGroup, STANDARD_RESIDUES,
    WATER_MASS,
};
use crate::protein::sequence::{InvalidResidueError, ProteinSequence};

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Number of samples in the isoelectric point search (step 0.01)
pub const PI_GRID_POINTS: usize = 1401;

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// The last value is `stop` exactly rather than the accumulated step.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Values `start, start + step, ...` strictly below `stop`
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || stop <= start {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// The `(pH, charge)` sample whose charge is closest to zero.
///
/// Only a strictly smaller |charge| replaces the current best, so on a tie the
/// earliest sample wins. `None` for an empty slice.
pub fn closest_to_neutral(samples: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut best: Option<(f64, f64)> = None;
    for &(ph, charge) in samples {
        match best {
            Some((_, best_charge)) if charge.abs() >= best_charge.abs() => {}
            _ => best = Some((ph, charge)),
        }
    }
    best
}

impl ProteinSequence {
    /// Average molecular weight in Da, corrected for the water released by
    /// each of the `len - 1` peptide bonds
    pub fn molecular_weight(&self) -> f64 {
        let mut total_weight = 0.0;
        for residue in self.as_str().chars() {
            total_weight += get_amino_acid_molecular_weight(residue).unwrap_or(0.0);
        }

        if self.len() > 1 {
            total_weight -= (self.len() - 1) as f64 * WATER_MASS;
        }
        total_weight
    }

    /// Molar extinction coefficient at 280nm (M^-1 cm^-1)
    pub fn extinction_coefficient(&self) -> u64 {
        self.composition()
            .map(|(residue, count)| get_extinction_coefficient(residue) * count as u64)
            .sum()
    }

    /// Expected net charge at `ph`.
    ///
    /// Each group is treated independently; the termini contribute once each
    /// regardless of length.
    pub fn net_charge(&self, ph: f64) -> f64 {
        let mut charge = 0.0;
        charge += IonizableGroup::NTerminus.charge_contribution(ph, 1.0);
        charge += IonizableGroup::CTerminus.charge_contribution(ph, 1.0);

        for group in IonizableGroup::SIDE_CHAINS {
            let count = group.residue().map_or(0, |residue| self.count(residue));
            charge += group.charge_contribution(ph, count as f64);
        }
        charge
    }

    /// `(pH, net charge)` for every pH in `grid`, in grid order
    pub fn charge_curve(&self, grid: &[f64]) -> Vec<(f64, f64)> {
        grid.iter().map(|&ph| (ph, self.net_charge(ph))).collect()
    }

    /// Isoelectric point: the sampled pH in [0, 14] whose net charge is closest
    /// to zero. Ties go to the lowest pH.
    pub fn isoelectric_point(&self) -> f64 {
        let curve = self.charge_curve(&linspace(PH_MIN, PH_MAX, PI_GRID_POINTS));
        let (ph, charge) = closest_to_neutral(&curve).unwrap_or((PH_MIN, f64::NAN));
        debug!("pI search over {PI_GRID_POINTS} points: pH {ph:.2} (charge {charge:.6})");
        ph
    }

    /// Extinction coefficient divided by molecular weight; 0 when the weight is not positive
    pub fn calibrated_concentration_proxy(&self) -> f64 {
        let weight = self.molecular_weight();
        if weight > 0.0 {
            self.extinction_coefficient() as f64 / weight
        } else {
            0.0
        }
    }

    /// Residues absorbing at 280nm, with their counts
    pub fn chromophores(&self) -> Vec<(char, usize)> {
        STANDARD_RESIDUES
            .iter()
            .filter(|&&r| get_extinction_coefficient(r) > 0)
            .map(|&r| (r, self.count(r)))
            .collect()
    }
}

pub fn calc_mw(sequence: &str) -> Result<f64, InvalidResidueError> {
    Ok(ProteinSequence::new(sequence)?.molecular_weight())
}

pub fn calc_extinction(sequence: &str) -> Result<u64, InvalidResidueError> {
    Ok(ProteinSequence::new(sequence)?.extinction_coefficient())
}

pub fn net_charge(sequence: &str, ph: f64) -> Result<f64, InvalidResidueError> {
    Ok(ProteinSequence::new(sequence)?.net_charge(ph))
}

pub fn calc_pi(sequence: &str) -> Result<f64, InvalidResidueError> {
    Ok(ProteinSequence::new(sequence)?.isoelectric_point())
}

pub fn calibrated_concentration_proxy(sequence: &str) -> Result<f64, InvalidResidueError> {
    Ok(ProteinSequence::new(sequence)?.calibrated_concentration_proxy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::sequence::DEFAULT_SEQUENCE;

    fn terminus_only_charge(ph: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf(ph - 8.0)) - 1.0 / (1.0 + 10f64.powf(3.1 - ph))
    }

    #[test]
    fn test_molecular_weight() {
        assert_eq!(calc_mw("").unwrap(), 0.0);
        assert!((calc_mw("A").unwrap() - 89.09).abs() < 1e-9);
        assert!((calc_mw("AA").unwrap() - (2.0 * 89.09 - 18.015)).abs() < 1e-9);

        // Ala-Gly: 89.09 + 75.07 - 18.015
        let weight = calc_mw("AG").unwrap();
        assert!((weight - 146.145).abs() < 0.001);
    }

    #[test]
    fn test_molecular_weight_sums_in_sequence_order() {
        // Residue by residue, left to right, then the water term
        let mut expected = 0.0;
        for residue in DEFAULT_SEQUENCE.chars() {
            expected += get_amino_acid_molecular_weight(residue).unwrap();
        }
        expected -= 39.0 * WATER_MASS;
        let weight = calc_mw(DEFAULT_SEQUENCE).unwrap();
        assert_eq!(weight.to_bits(), expected.to_bits());
        assert_eq!(weight, 4777.535);
    }

    #[test]
    fn test_molecular_weight_order_independent() {
        let a = calc_mw("MKWVT").unwrap();
        let b = calc_mw("TVWKM").unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_extinction_coefficient() {
        assert_eq!(calc_extinction("WYC").unwrap(), 5500 + 1490 + 125);
        assert_eq!(calc_extinction("CYW").unwrap(), 7115);
        assert_eq!(calc_extinction("WW").unwrap(), 11000);
        assert_eq!(calc_extinction("").unwrap(), 0);
        assert_eq!(calc_extinction("AGLKDERHMFSTVIPNQ").unwrap(), 0);
    }

    #[test]
    fn test_terminus_only_charge() {
        for seq in ["", "G", "AAAA", "MFSTVIPNQLGAW"] {
            for ph in [0.0, 3.1, 5.55, 7.0, 8.0, 14.0] {
                let charge = net_charge(seq, ph).unwrap();
                assert!((charge - terminus_only_charge(ph)).abs() < 1e-12, "{seq} at pH {ph}");
            }
        }
    }

    #[test]
    fn test_side_chain_contributions() {
        // At very low pH every basic group is fully protonated, acids neutral.
        let charge = net_charge("KKR", 0.0).unwrap();
        assert!((charge - 4.0).abs() < 0.01);

        // At very high pH acids are fully deprotonated, bases neutral.
        let charge = net_charge("DEY", 14.0).unwrap();
        assert!((charge + 4.0).abs() < 0.01);

        let single = net_charge("D", 7.0).unwrap();
        let double = net_charge("DD", 7.0).unwrap();
        let side = single - terminus_only_charge(7.0);
        assert!((double - terminus_only_charge(7.0) - 2.0 * side).abs() < 1e-12);
    }

    #[test]
    fn test_net_charge_non_increasing() {
        let grid = linspace(0.0, 14.0, PI_GRID_POINTS);
        for seq in [DEFAULT_SEQUENCE, "", "DDDDEEEC", "KKKRRRHHH", "ACDEFGHIKLMNPQRSTVWY"] {
            let curve = ProteinSequence::new(seq).unwrap().charge_curve(&grid);
            for pair in curve.windows(2) {
                assert!(pair[1].1 <= pair[0].1 + 1e-12, "{seq}: {:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_isoelectric_point_is_grid_minimum() {
        let grid = linspace(0.0, 14.0, PI_GRID_POINTS);
        for seq in [DEFAULT_SEQUENCE, "", "DE", "KK", "WYCHKR"] {
            let protein = ProteinSequence::new(seq).unwrap();
            let pi = protein.isoelectric_point();
            assert!((0.0..=14.0).contains(&pi));
            let at_pi = protein.net_charge(pi).abs();
            for &ph in &grid {
                assert!(at_pi <= protein.net_charge(ph).abs());
            }
        }
    }

    #[test]
    fn test_isoelectric_point_values() {
        // Termini only: midway between pKa 3.1 and 8.0
        assert!((calc_pi("").unwrap() - 5.55).abs() < 1e-9);
        assert!((calc_pi("G").unwrap() - 5.55).abs() < 1e-9);
        assert!((calc_pi("DE").unwrap() - 3.34).abs() < 1e-9);
        assert!((calc_pi("KK").unwrap() - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_closest_to_neutral_tie_breaks_low() {
        let samples = [(1.0, 0.5), (2.0, -0.5), (3.0, 0.5)];
        assert_eq!(closest_to_neutral(&samples), Some((1.0, 0.5)));

        let samples = [(1.0, 0.75), (2.0, -0.25), (3.0, 0.25), (4.0, -1.0)];
        assert_eq!(closest_to_neutral(&samples), Some((2.0, -0.25)));

        assert_eq!(closest_to_neutral(&[]), None);
    }

    #[test]
    fn test_net_charge_accumulates_each_group_in_turn() {
        let ph = 7.0;
        let protein = ProteinSequence::new("DDEHKKKRY").unwrap();
        let mut expected = 0.0;
        expected += 1.0 / (1.0 + 10f64.powf(ph - 8.0));
        expected -= 1.0 / (1.0 + 10f64.powf(3.1 - ph));
        for (count, pka) in [(2.0, 3.9), (1.0, 4.1), (0.0, 8.3), (1.0, 10.1)] {
            expected -= count / (1.0 + 10f64.powf(pka - ph));
        }
        for (count, pka) in [(1.0, 6.0), (3.0, 10.5), (1.0, 12.5)] {
            expected += count / (1.0 + 10f64.powf(ph - pka));
        }
        assert_eq!(protein.net_charge(ph).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_calibrated_concentration_proxy() {
        assert_eq!(calibrated_concentration_proxy("").unwrap(), 0.0);
        assert_eq!(calibrated_concentration_proxy("AG").unwrap(), 0.0);

        let expected = 5500.0 / 204.23;
        assert!((calibrated_concentration_proxy("W").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_residue_rejected_everywhere() {
        let expected = InvalidResidueError { residue: 'X', position: 2 };
        assert_eq!(calc_mw("AX").unwrap_err(), expected);
        assert_eq!(calc_extinction("AX").unwrap_err(), expected);
        assert_eq!(net_charge("AX", 7.0).unwrap_err(), expected);
        assert_eq!(calc_pi("AX").unwrap_err(), expected);
        assert_eq!(calibrated_concentration_proxy("AX").unwrap_err(), expected);
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let protein = ProteinSequence::new(DEFAULT_SEQUENCE).unwrap();
        assert_eq!(protein.molecular_weight().to_bits(), protein.molecular_weight().to_bits());
        assert_eq!(protein.net_charge(7.4).to_bits(), protein.net_charge(7.4).to_bits());
        assert_eq!(protein.isoelectric_point().to_bits(), calc_pi(DEFAULT_SEQUENCE).unwrap().to_bits());
    }

    #[test]
    fn test_grids() {
        let grid = linspace(0.0, 14.0, PI_GRID_POINTS);
        assert_eq!(grid.len(), 1401);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[1400], 14.0);
        assert!((grid[700] - 7.0).abs() < 1e-12);

        assert_eq!(linspace(0.0, 14.0, 200).len(), 200);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);

        let table = arange(4.0, 10.5, 0.5);
        assert_eq!(table.len(), 13);
        assert_eq!(table[0], 4.0);
        assert_eq!(table[12], 10.0);
        assert!(arange(1.0, 0.0, 0.5).is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_chromophores() {
        let protein = ProteinSequence::new(DEFAULT_SEQUENCE).unwrap();
        assert_eq!(protein.chromophores(), vec![('C', 0), ('W', 1), ('Y', 1)]);
    }
}

//! Residue property tables
//!
//! Average masses, pKa values and 280nm extinction coefficients for the 20
//! standard amino acids. Masses are for the free amino acid in Daltons (Da);
//! the water released by each peptide bond is subtracted when residues are
//! joined into a chain.

/// Mass of one water molecule, lost at every peptide bond (Da)
pub const WATER_MASS: f64 = 18.015;

/// The 20 standard residue codes, in alphabetical order of their code
pub const STANDARD_RESIDUES: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
];

/// Position of a residue code in [`STANDARD_RESIDUES`], `None` if the code is not standard
pub fn residue_index(residue: char) -> Option<usize> {
    match residue {
        'A' => Some(0),
        'C' => Some(1),
        'D' => Some(2),
        'E' => Some(3),
        'F' => Some(4),
        'G' => Some(5),
        'H' => Some(6),
        'I' => Some(7),
        'K' => Some(8),
        'L' => Some(9),
        'M' => Some(10),
        'N' => Some(11),
        'P' => Some(12),
        'Q' => Some(13),
        'R' => Some(14),
        'S' => Some(15),
        'T' => Some(16),
        'V' => Some(17),
        'W' => Some(18),
        'Y' => Some(19),
        _ => None,
    }
}

/// Get the average mass of an amino acid by its single-letter code
pub fn get_amino_acid_molecular_weight(amino_acid: char) -> Option<f64> {
    let weight = match amino_acid {
        'A' => 89.09,   // Alanine
        'R' => 174.20,  // Arginine
        'N' => 132.12,  // Asparagine
        'D' => 133.10,  // Aspartic acid
        'C' => 121.16,  // Cysteine
        'E' => 147.13,  // Glutamic acid
        'Q' => 146.15,  // Glutamine
        'G' => 75.07,   // Glycine
        'H' => 155.16,  // Histidine
        'I' => 131.18,  // Isoleucine
        'L' => 131.18,  // Leucine
        'K' => 146.19,  // Lysine
        'M' => 149.21,  // Methionine
        'F' => 165.19,  // Phenylalanine
        'P' => 115.13,  // Proline
        'S' => 105.09,  // Serine
        'T' => 119.12,  // Threonine
        'W' => 204.23,  // Tryptophan
        'Y' => 181.19,  // Tyrosine
        'V' => 117.15,  // Valine
        _ => return None,
    };
    Some(weight)
}

/// Molar extinction coefficient at 280nm (M^-1 cm^-1).
///
/// Only the chromophores contribute; every other standard residue absorbs nothing.
pub fn get_extinction_coefficient(amino_acid: char) -> u64 {
    match amino_acid {
        'W' => 5500,
        'Y' => 1490,
        'C' => 125,
        _ => 0,
    }
}

/// Sign of the charge a group carries when ionized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// Positive while protonated (N-terminus, H, K, R)
    Positive,
    /// Negative once deprotonated (C-terminus, D, E, C, Y)
    Negative,
}

/// A group that can gain or lose a proton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IonizableGroup {
    NTerminus,
    CTerminus,
    Asp,
    Glu,
    Cys,
    Tyr,
    His,
    Lys,
    Arg,
}

impl IonizableGroup {
    /// Side chains that carry a charge, acidic ones first
    pub const SIDE_CHAINS: [IonizableGroup; 7] = [
        IonizableGroup::Asp,
        IonizableGroup::Glu,
        IonizableGroup::Cys,
        IonizableGroup::Tyr,
        IonizableGroup::His,
        IonizableGroup::Lys,
        IonizableGroup::Arg,
    ];

    /// Side chain group of a residue, `None` for residues that never ionize
    pub fn from_residue(residue: char) -> Option<Self> {
        let group = match residue {
            'D' => IonizableGroup::Asp,
            'E' => IonizableGroup::Glu,
            'C' => IonizableGroup::Cys,
            'Y' => IonizableGroup::Tyr,
            'H' => IonizableGroup::His,
            'K' => IonizableGroup::Lys,
            'R' => IonizableGroup::Arg,
            _ => return None,
        };
        Some(group)
    }

    /// Residue code carrying this group, `None` for the termini
    pub fn residue(self) -> Option<char> {
        match self {
            IonizableGroup::NTerminus | IonizableGroup::CTerminus => None,
            IonizableGroup::Asp => Some('D'),
            IonizableGroup::Glu => Some('E'),
            IonizableGroup::Cys => Some('C'),
            IonizableGroup::Tyr => Some('Y'),
            IonizableGroup::His => Some('H'),
            IonizableGroup::Lys => Some('K'),
            IonizableGroup::Arg => Some('R'),
        }
    }

    pub fn pka(self) -> f64 {
        match self {
            IonizableGroup::NTerminus => 8.0,
            IonizableGroup::CTerminus => 3.1,
            IonizableGroup::Asp => 3.9,
            IonizableGroup::Glu => 4.1,
            IonizableGroup::Cys => 8.3,
            IonizableGroup::Tyr => 10.1,
            IonizableGroup::His => 6.0,
            IonizableGroup::Lys => 10.5,
            IonizableGroup::Arg => 12.5,
        }
    }

    pub fn charge(self) -> Charge {
        match self {
            IonizableGroup::NTerminus
            | IonizableGroup::His
            | IonizableGroup::Lys
            | IonizableGroup::Arg => Charge::Positive,
            IonizableGroup::CTerminus
            | IonizableGroup::Asp
            | IonizableGroup::Glu
            | IonizableGroup::Cys
            | IonizableGroup::Tyr => Charge::Negative,
        }
    }

    /// Signed charge carried by `count` copies of this group at `ph` (Henderson-Hasselbalch)
    pub fn charge_contribution(self, ph: f64, count: f64) -> f64 {
        let pka = self.pka();
        match self.charge() {
            Charge::Positive => count / (1.0 + 10f64.powf(ph - pka)),
            Charge::Negative => -(count / (1.0 + 10f64.powf(pka - ph))),
        }
    }
}

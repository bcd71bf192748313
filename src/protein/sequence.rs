//! Validated amino-acid sequences

use std::fmt;
use std::str::FromStr;

use log::trace;
use thiserror::Error;

use crate::protein::residues::{residue_index, STANDARD_RESIDUES};

/// Reference sequence used as the initial input and in regression tests
pub const DEFAULT_SEQUENCE: &str = "MKWVTFISLLFLFSSAYSRGVFRRDTHKSEIAHRFKDLGE";

/// A character outside the 20 standard residue codes
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid residue '{residue}' at position {position}")]
pub struct InvalidResidueError {
    pub residue: char,
    /// 1-based position in the sequence
    pub position: usize,
}

/// Upper-case the input and strip every whitespace character (spaces, tabs, newlines)
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A sequence of standard residue codes.
///
/// Residue counts are taken once at construction. Molecular weight is the one
/// property summed over the residues themselves, in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProteinSequence {
    residues: String,
    counts: [usize; 20],
}

impl ProteinSequence {
    /// Validate `sequence` as given. No case folding or whitespace removal happens here.
    pub fn new(sequence: &str) -> Result<Self, InvalidResidueError> {
        let mut counts = [0usize; 20];
        for (i, residue) in sequence.chars().enumerate() {
            match residue_index(residue) {
                Some(idx) => counts[idx] += 1,
                None => {
                    trace!("Rejecting residue {residue:?} at position {}", i + 1);
                    return Err(InvalidResidueError { residue, position: i + 1 });
                }
            }
        }
        Ok(ProteinSequence {
            residues: sequence.to_string(),
            counts,
        })
    }

    /// Normalize raw user input, then validate it
    pub fn parse(raw: &str) -> Result<Self, InvalidResidueError> {
        Self::new(&normalize_sequence(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        // ASCII only after validation
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of occurrences of `residue`; 0 for non-standard codes
    pub fn count(&self, residue: char) -> usize {
        residue_index(residue).map_or(0, |idx| self.counts[idx])
    }

    /// Residue counts paired with their codes, skipping residues that do not occur
    pub fn composition(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        STANDARD_RESIDUES
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &n)| n > 0)
            .map(|(&r, &n)| (r, n))
    }
}

impl FromStr for ProteinSequence {
    type Err = InvalidResidueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}

//! Color definitions for residues and charge values

use ratatui::style::Color;

/// Get the display color for a residue by its chemistry
pub fn get_residue_color(residue: char) -> Color {
    match residue {
        'W' | 'Y' | 'C' => Color::Yellow,   // absorbs at 280nm
        'D' | 'E' => Color::Red,            // acidic
        'H' | 'K' | 'R' => Color::Blue,     // basic
        'A' | 'V' | 'L' | 'I' | 'M' | 'F' | 'P' | 'G' => Color::Gray,
        'S' | 'T' | 'N' | 'Q' => Color::Green,
        _ => Color::Magenta,
    }
}

/// Positive charges blue, negative red, near-neutral white
pub fn get_charge_color(charge: f64) -> Color {
    if charge > 0.05 {
        Color::LightBlue
    } else if charge < -0.05 {
        Color::LightRed
    } else {
        Color::White
    }
}

//! Display formatting functions for the UI and the plain text report

use std::fmt::Write;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use crate::protein::{InvalidResidueError, ProteinReport, ProteinSequence, CALIBRATION_NOTE};
use crate::ui::colors::get_residue_color;

/// Format sequence with a space every `block` characters
pub fn format_blocks(sequence: &str, block: usize) -> String {
    let mut result = String::new();
    let len = sequence.chars().count();

    for (i, c) in sequence.chars().enumerate() {
        result.push(c);
        let count = i + 1;
        if block > 0 && count % block == 0 && count < len {
            result.push(' ');
        }
    }

    result
}

/// One colored span per residue, blocks of ten separated by a space.
///
/// The text is kept as typed; lower-case residues take the color of their upper-case code.
pub fn colored_sequence_spans(sequence: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, residue) in sequence.chars().enumerate() {
        if i > 0 && i % 10 == 0 {
            spans.push(Span::raw(" "));
        }
        let color = get_residue_color(residue.to_ascii_uppercase());
        spans.push(Span::styled(residue.to_string(), Style::default().fg(color)));
    }
    spans
}

/// Summary lines shown in the results panel
pub fn create_report_lines(report: &ProteinReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Length: "),
            Span::styled(format!("{} aa", report.sequence.len()), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Molecular Weight: "),
            Span::styled(format!("{:.2} Da", report.molecular_weight), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Extinction Coefficient (280nm): "),
            Span::styled(
                format!("{} M^-1 cm^-1", report.extinction_coefficient),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Isoelectric Point (pI): "),
            Span::styled(format!("{:.2}", report.isoelectric_point), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Calibrated Con (A280nm): "),
            Span::styled(format!("{:.6}", report.calibrated_concentration), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![Span::raw("")]),
    ];

    let chromophores: Vec<String> = report
        .sequence
        .chromophores()
        .into_iter()
        .map(|(residue, count)| format!("{residue}={count}"))
        .collect();
    lines.push(Line::from(vec![
        Span::raw("Chromophores: "),
        Span::styled(chromophores.join(" "), Style::default().fg(Color::Yellow)),
    ]));
    lines.push(Line::from(vec![Span::raw("")]));
    lines.push(Line::from(vec![
        Span::styled(CALIBRATION_NOTE, Style::default().fg(Color::DarkGray)),
    ]));

    lines
}

/// Axis labels spread evenly over `[min, max]`
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<Span<'static>> {
    if count < 2 {
        return vec![Span::raw(format!("{min:.1}"))];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| Span::styled(format!("{:.1}", min + i as f64 * step), Style::default().fg(Color::DarkGray)))
        .collect()
}

/// Chart y bounds covering `values` and zero, padded so the curve does not touch the frame
pub fn charge_axis_bounds(values: &[(f64, f64)]) -> [f64; 2] {
    let (lo, hi) = values
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), &(_, q)| (lo.min(q), hi.max(q)));
    let pad = ((hi - lo) * 0.05).max(0.5);
    [(lo - pad).floor(), (hi + pad).ceil()]
}

/// Plain text rendition: summary, caveat, then the pH table
pub fn format_plain_report(report: &ProteinReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Sequence: {}", format_blocks(report.sequence.as_str(), 10));
    let _ = writeln!(out, "Length: {} aa", report.sequence.len());
    let _ = writeln!(out, "{report}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{CALIBRATION_NOTE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Net Charge Table (pH 4.0 ~ 10.0, step 0.5)");
    let _ = writeln!(out, "{:>6}  {:>12}", "pH", "Net Charge");
    for &(ph, charge) in &report.charge_table {
        let _ = writeln!(out, "{ph:>6.1}  {charge:>12.4}");
    }
    out
}

/// Normalise `raw`, analyse it and format the plain report.
///
/// The residue error is handed back to the caller, which decides the exit status.
pub fn plain_report_for(raw: &str) -> Result<String, InvalidResidueError> {
    let protein = ProteinSequence::parse(raw)?;
    Ok(format_plain_report(&ProteinReport::analyze(&protein)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::DEFAULT_SEQUENCE;

    #[test]
    fn test_format_blocks() {
        assert_eq!(format_blocks("ABCDEFGHIJKL", 10), "ABCDEFGHIJ KL");
        assert_eq!(format_blocks("ABCDEFGHIJ", 10), "ABCDEFGHIJ");
        assert_eq!(format_blocks("AUGCCC", 3), "AUG CCC");
        assert_eq!(format_blocks("", 3), "");
        assert_eq!(format_blocks("ABC", 0), "ABC");
    }

    #[test]
    fn test_colored_sequence_spans() {
        let spans = colored_sequence_spans("ACDEFGHIKLM");
        // 11 residues plus one separator
        assert_eq!(spans.len(), 12);
        assert_eq!(spans[10].content, " ");
        assert_eq!(spans[1].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_colored_sequence_spans_lower_case() {
        let upper = colored_sequence_spans("CDKW");
        let lower = colored_sequence_spans("cdkw");
        for (u, l) in upper.iter().zip(&lower) {
            assert_eq!(u.style.fg, l.style.fg);
        }
        assert_eq!(lower[0].content, "c");
        assert_eq!(lower[0].style.fg, Some(Color::Yellow));
        assert_eq!(lower[1].style.fg, Some(Color::Red));
        assert_eq!(colored_sequence_spans("x")[0].style.fg, Some(Color::Magenta));
    }

    #[test]
    fn test_axis_labels() {
        let labels = axis_labels(0.0, 14.0, 3);
        let text: Vec<&str> = labels.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["0.0", "7.0", "14.0"]);
        assert_eq!(axis_labels(1.0, 1.0, 1).len(), 1);
    }

    #[test]
    fn test_charge_axis_bounds_include_zero() {
        let [lo, hi] = charge_axis_bounds(&[(0.0, 3.2), (14.0, 1.1)]);
        assert!(lo <= 0.0);
        assert!(hi >= 3.2);

        let [lo, hi] = charge_axis_bounds(&[]);
        assert!(lo < 0.0 && hi > 0.0);
    }

    #[test]
    fn test_plain_report() {
        let seq = ProteinSequence::new(DEFAULT_SEQUENCE).unwrap();
        let report = ProteinReport::analyze(&seq);
        let text = format_plain_report(&report);

        assert!(text.starts_with("Sequence: MKWVTFISLL FLFSSAYSRG VFRRDTHKSE IAHRFKDLGE\n"));
        assert!(text.contains("Length: 40 aa"));
        assert!(text.contains("Isoelectric Point (pI): 10.39"));
        assert!(text.contains("Net Charge Table (pH 4.0 ~ 10.0, step 0.5)"));
        assert!(text.contains("   4.0"));
        assert!(text.contains("  10.0"));

        let table_rows = text
            .lines()
            .skip_while(|l| !l.trim_start().starts_with("pH"))
            .skip(1)
            .count();
        assert_eq!(table_rows, 13);
    }

    #[test]
    fn test_plain_report_for_raw_input() {
        let text = plain_report_for(" mkwvtfisll flfssaysrg\nvfrrdthkse iahrfkdlge ").unwrap();
        assert!(text.starts_with("Sequence: MKWVTFISLL FLFSSAYSRG VFRRDTHKSE IAHRFKDLGE\n"));
        assert!(text.contains("Molecular Weight: 4777.53 Da"));

        let err = plain_report_for("MKB").unwrap_err();
        assert_eq!(err, InvalidResidueError { residue: 'B', position: 3 });
        assert_eq!(err.to_string(), "invalid residue 'B' at position 3");
    }

    #[test]
    fn test_report_lines() {
        let seq = ProteinSequence::new("WYC").unwrap();
        let lines = create_report_lines(&ProteinReport::analyze(&seq));
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(rendered[0], "Length: 3 aa");
        assert_eq!(rendered[2], "Extinction Coefficient (280nm): 7115 M^-1 cm^-1");
        assert!(rendered.iter().any(|l| l == "Chromophores: C=1 W=1 Y=1"));
    }
}

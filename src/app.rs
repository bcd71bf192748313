use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn, debug, trace};

use crate::protein::{normalize_sequence, ProteinReport, ProteinSequence};

/// Session state of the interactive calculator
pub struct App {
    pub input: String,
    /// Last submitted sequence after normalization
    pub sequence: String,
    pub report: Option<ProteinReport>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(initial_sequence: &str) -> App {
        debug!("Creating new App instance with {} input characters", initial_sequence.len());
        App {
            input: initial_sequence.to_string(),
            sequence: normalize_sequence(initial_sequence),
            report: None,
            error: None,
            should_quit: false,
        }
    }

    pub fn on_key(&mut self, c: char) {
        trace!("Appending {c:?} to input");
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        debug!("Clearing input line");
        self.input.clear();
    }

    /// Normalize and analyze the current input. Empty input is ignored.
    pub fn submit(&mut self) {
        if self.input.is_empty() {
            debug!("Submit ignored: input is empty");
            return;
        }

        let normalized = normalize_sequence(&self.input);
        match ProteinSequence::new(&normalized) {
            Ok(protein) => {
                let report = ProteinReport::analyze(&protein);
                info!(
                    "Analyzed {} residues: MW {:.2} Da, pI {:.2}",
                    protein.len(),
                    report.molecular_weight,
                    report.isoelectric_point
                );
                self.sequence = normalized;
                self.report = Some(report);
                self.error = None;
            }
            Err(e) => {
                warn!("Rejected input: {e}");
                self.error = Some(e.to_string());
                self.report = None;
            }
        }
    }

    /// Drop every piece of session state, including the input
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.input.clear();
        self.sequence.clear();
        self.report = None;
        self.error = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter submits, Ctrl+R resets, Ctrl+U clears the line, Esc or Ctrl+C quits
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char(c) if !ctrl => self.on_key(c),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.on_backspace(),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new("")
    }
}

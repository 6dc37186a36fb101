//! Interactive node selection for `choose`.

use std::io::{self, IsTerminal};

use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;
use kegdex_core::Chooser;

/// Fuzzy selector on the terminal. Declines when stdin or stderr is not a
/// terminal, or when the user cancels.
pub struct FuzzyChooser {
    prompt: String,
}

impl FuzzyChooser {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }
}

impl Chooser for FuzzyChooser {
    fn choose(&self, lines: &[String]) -> Option<usize> {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            tracing::debug!("not a terminal, cannot choose among {} nodes", lines.len());
            return None;
        }
        match FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .items(lines)
            .default(0)
            .interact_opt()
        {
            Ok(selection) => selection,
            Err(e) => {
                tracing::warn!("selector failed: {e}");
                None
            }
        }
    }
}

//! Interactive selection seam.
//!
//! Searches that produce several hits hand the display lines to a
//! [`Chooser`] and get back the index of the chosen line. Terminal I/O lives
//! in the implementation, never in the dex.

/// Picks one of several display lines.
pub trait Chooser {
    /// Index into `lines` of the chosen item, or `None` when cancelled.
    fn choose(&self, lines: &[String]) -> Option<usize>;
}

impl<F> Chooser for F
where
    F: Fn(&[String]) -> Option<usize>,
{
    fn choose(&self, lines: &[String]) -> Option<usize> {
        self(lines)
    }
}

/// A chooser that always cancels.
/// Used when no interactive terminal is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChooser;

impl Chooser for NoChooser {
    fn choose(&self, _lines: &[String]) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_choosers() {
        let last = |lines: &[String]| lines.len().checked_sub(1);
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(last.choose(&lines), Some(1));
        assert_eq!(last.choose(&[]), None);
    }

    #[test]
    fn no_chooser_cancels() {
        assert_eq!(NoChooser.choose(&["a".to_string()]), None);
    }
}

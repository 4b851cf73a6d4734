use std::{collections::VecDeque, fmt};

use tracing::debug;

use crate::{
    calculate_with_limits,
    config::Limits,
    util::format::{ERROR_MARKER, format_number},
};

/// What the user sees after evaluating an expression.
///
/// Every failure (a parse error, an evaluation error, or a result that is NaN
/// or infinite) collapses into [`Outcome::Error`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A finite result.
    Value(f64),
    /// Any failure.
    Error,
}

impl Outcome {
    /// Returns the result, if there is one.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Error => None,
        }
    }

    /// Returns `true` for [`Outcome::Error`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", format_number(*v)),
            Self::Error => write!(f, "{ERROR_MARKER}"),
        }
    }
}

/// A successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    expression: String,
    value:      f64,
}

impl HistoryEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(expression: impl Into<String>, value: f64) -> Self {
        Self { expression: expression.into(),
               value }
    }

    /// The expression text as it was entered.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The evaluated result.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Recovers the expression from a displayed history line.
    ///
    /// Returns the text before the first `=`, trimmed. A line without `=` is
    /// returned trimmed as a whole.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::HistoryEntry;
    ///
    /// assert_eq!(HistoryEntry::parse_line("2+2 = 4.0"), "2+2");
    /// assert_eq!(HistoryEntry::parse_line(" sqrt(2) "), "sqrt(2)");
    /// ```
    #[must_use]
    pub fn parse_line(line: &str) -> &str {
        line.split_once('=')
            .map_or(line, |(expression, _)| expression)
            .trim()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, format_number(self.value))
    }
}

/// An ordered record of successful evaluations, oldest first.
///
/// A bounded history evicts its oldest entry once full.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries:  VecDeque<HistoryEntry>,
    capacity: Option<usize>,
}

impl History {
    /// Creates an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `capacity` entries.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self { entries:  VecDeque::with_capacity(capacity),
               capacity: Some(capacity), }
    }

    /// Appends an entry, evicting the oldest one if the history is full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry);
    }

    /// Iterates over the entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the entry at `index`, counting from the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the expression stored at `index`, ready to be edited or
    /// evaluated again.
    #[must_use]
    pub fn recall(&self, index: usize) -> Option<&str> {
        self.get(index).map(HistoryEntry::expression)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A calculator session: evaluates expressions and records the successful
/// ones.
///
/// # Example
/// ```
/// use reckon::calculator::{Calculator, Outcome};
///
/// let mut calc = Calculator::new();
///
/// assert_eq!(calc.evaluate("2+3*4"), Outcome::Value(14.0));
/// assert_eq!(calc.evaluate("2+").to_string(), "Error");
/// assert_eq!(calc.evaluate("1/0"), Outcome::Error);
///
/// assert_eq!(calc.history().len(), 1);
/// assert_eq!(calc.history().get(0).unwrap().to_string(), "2+3*4 = 14.0");
/// assert_eq!(calc.history().recall(0), Some("2+3*4"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    limits:  Limits,
    history: History,
}

impl Calculator {
    /// Creates a session with default limits and an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given limits and history.
    #[must_use]
    pub const fn with_parts(limits: Limits, history: History) -> Self {
        Self { limits, history }
    }

    /// The limits applied to every expression.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// The recorded history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Mutable access to the recorded history.
    pub const fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Evaluates `expression` and records it when the result is finite.
    ///
    /// The specific failure is logged at debug level and otherwise discarded.
    pub fn evaluate(&mut self, expression: &str) -> Outcome {
        match calculate_with_limits(expression, &self.limits) {
            Ok(value) if value.is_finite() => {
                self.history.push(HistoryEntry::new(expression, value));
                Outcome::Value(value)
            },
            Ok(value) => {
                debug!(expression, value, "result is not finite");
                Outcome::Error
            },
            Err(error) => {
                debug!(expression, %error, "expression rejected");
                Outcome::Error
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_history_evicts_oldest() {
        let mut history = History::bounded(2);
        history.push(HistoryEntry::new("1", 1.0));
        history.push(HistoryEntry::new("2", 2.0));
        history.push(HistoryEntry::new("3", 3.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.recall(0), Some("2"));
        assert_eq!(history.recall(1), Some("3"));
        assert_eq!(history.recall(2), None);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = History::bounded(0);
        history.push(HistoryEntry::new("1", 1.0));
        assert!(history.is_empty());
    }

    #[test]
    fn only_finite_results_are_recorded() {
        let mut calc = Calculator::new();
        for expression in ["1+1", "1/0", "sqrt(-1)", "foo(1)", "2+", "sqrt(16)"] {
            calc.evaluate(expression);
        }

        let recorded: Vec<_> = calc.history().entries().map(HistoryEntry::expression).collect();
        assert_eq!(recorded, ["1+1", "sqrt(16)"]);
        assert_eq!(calc.history().get(1).map(HistoryEntry::value), Some(4.0));
    }

    #[test]
    fn displayed_entry_recalls_its_expression() {
        let mut calc = Calculator::new();
        calc.evaluate("0.1 + 0.2");

        let shown = calc.history().get(0).map(ToString::to_string).unwrap();
        assert_eq!(shown, "0.1 + 0.2 = 0.30000000000000004");
        assert_eq!(HistoryEntry::parse_line(&shown), "0.1 + 0.2");
        assert_eq!(calc.evaluate(HistoryEntry::parse_line(&shown)),
                   Outcome::Value(0.1 + 0.2));
    }

    #[test]
    fn clear_empties_history() {
        let mut calc = Calculator::new();
        calc.evaluate("1");
        calc.evaluate("2");
        calc.history_mut().clear();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn session_limits_apply() {
        let mut calc = Calculator::with_parts(Limits { max_depth:     1,
                                                       max_input_len: 8, },
                                              History::new());
        assert_eq!(calc.evaluate("(1)"), Outcome::Value(1.0));
        assert!(calc.evaluate("((1))").is_error());
        assert!(calc.evaluate("1+1+1+1+1").is_error());
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(Outcome::Value(2.5).value(), Some(2.5));
        assert_eq!(Outcome::Error.value(), None);
        assert_eq!(Outcome::Value(2.5).to_string(), "2.5");
    }
}

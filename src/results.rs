use std::fmt;

/// A non-fatal problem found while reading a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A value paired with the warnings produced while computing it.
///
/// There is no failure state: a reader that cannot produce anything returns an
/// empty value plus a warning. Warnings are only ever appended, so composing
/// results through `map`, `flat_map` and `combine` keeps every warning in the
/// order it was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadResult<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> ReadResult<T> {
    pub fn of(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// `value` with exactly one warning attached.
    pub fn warning(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            warnings: vec![Warning::new(message)],
        }
    }

    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(Warning::new(message));
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadResult<U> {
        ReadResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> ReadResult<U>) -> ReadResult<U> {
        let mut warnings = self.warnings;
        let next = f(self.value);
        warnings.extend(next.warnings);
        ReadResult {
            value: next.value,
            warnings,
        }
    }

    /// Combines independently read siblings. Every input contributes its value
    /// and its warnings, in input order; no input can suppress another.
    pub fn combine(results: impl IntoIterator<Item = ReadResult<T>>) -> ReadResult<Vec<T>> {
        results.into_iter().collect()
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }
}

impl<T> ReadResult<Vec<T>> {
    /// Like [`ReadResult::combine`], but for readers that each yield a sequence:
    /// the sequences are concatenated instead of nested.
    pub fn concat(results: impl IntoIterator<Item = ReadResult<Vec<T>>>) -> ReadResult<Vec<T>> {
        let mut value = Vec::new();
        let mut warnings = Vec::new();
        for result in results {
            value.extend(result.value);
            warnings.extend(result.warnings);
        }
        ReadResult { value, warnings }
    }
}

impl<T> FromIterator<ReadResult<T>> for ReadResult<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = ReadResult<T>>>(iter: I) -> Self {
        let mut value = Vec::new();
        let mut warnings = Vec::new();
        for result in iter {
            value.push(result.value);
            warnings.extend(result.warnings);
        }
        ReadResult { value, warnings }
    }
}

//! Custom-data input pipeline: comma-separated text to a validated X/Y pair.

use crate::error::{Axis, InputError};

/// An X/Y pair of equal-length sample sequences.
///
/// The length invariant is established on construction and the fields are
/// private, so a `NumericSeries` can be handed to any renderer or exporter
/// without re-checking.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl NumericSeries {
    /// Pair two sequences, rejecting differing lengths.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InputError> {
        if x.len() != y.len() {
            return Err(InputError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Pair two sequences the caller built with equal lengths.
    pub(crate) fn from_equal(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len(), "x and y must have equal lengths");
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate `(x, y)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Points in the `[x, y]` layout used by the plot widget.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(x, y)| [x, y]).collect()
    }

    /// Like [`points`](Self::points), without pairs holding `inf` or `NaN`.
    pub fn finite_points(&self) -> Vec<[f64; 2]> {
        self.iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| [x, y])
            .collect()
    }

    /// `(min, max)` over finite values of both axes, or `None` when nothing is finite.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        Some((finite_range(&self.x)?, finite_range(&self.y)?))
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// The two text fields as submitted from the input dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub x_text: String,
    pub y_text: String,
}

impl RawInput {
    pub fn new(x_text: impl Into<String>, y_text: impl Into<String>) -> Self {
        Self {
            x_text: x_text.into(),
            y_text: y_text.into(),
        }
    }

    pub fn parse(&self) -> Result<NumericSeries, InputError> {
        parse_and_validate(&self.x_text, &self.y_text)
    }
}

/// Parse one comma-separated field, stopping at the first bad token.
pub fn parse_field(text: &str, axis: Axis) -> Result<Vec<f64>, InputError> {
    text.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumberFormat {
                    axis,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Turn the two dialog fields into a validated series pair.
///
/// X is parsed before Y, so a bad token in X is reported even when Y is
/// also malformed. Lengths are compared only after both fields parse.
pub fn parse_and_validate(x_text: &str, y_text: &str) -> Result<NumericSeries, InputError> {
    let x = parse_field(x_text, Axis::X)?;
    let y = parse_field(y_text, Axis::Y)?;
    NumericSeries::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(parse_field(" 1.5 ,\t2 ", Axis::X).unwrap(), vec![1.5, 2.0]);
    }

    #[test]
    fn empty_text_is_one_empty_token() {
        assert_eq!(
            parse_field("", Axis::Y),
            Err(InputError::InvalidNumberFormat {
                axis: Axis::Y,
                token: String::new()
            })
        );
    }

    #[test]
    fn bounds_skip_non_finite() {
        let s = NumericSeries::new(vec![1.0, f64::NAN, 3.0], vec![-1.0, 0.0, f64::INFINITY]).unwrap();
        assert_eq!(s.bounds(), Some(((1.0, 3.0), (-1.0, 0.0))));
    }

    #[test]
    fn from_equal_keeps_every_sample() {
        let s = NumericSeries::from_equal(vec![1.0, 2.0], vec![3.0, 4.0]);
        assert_eq!(s.len(), 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "equal lengths")]
    fn from_equal_rejects_unequal_lengths() {
        NumericSeries::from_equal(vec![1.0, 2.0, 3.0], vec![1.0]);
    }
}

//! Error types for PlotDesk.
//!
//! Input validation failures are kept in their own comparable type so the
//! pipeline stays a pure function; everything that touches files or the
//! rasterizer goes through [`PlotError`].

use std::fmt;

use thiserror::Error;

/// Result type alias for PlotDesk operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Which of the two input fields a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Rejection reasons for user-supplied X/Y text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token in one of the fields is not a decimal numeral.
    #[error("invalid number {token:?} in {axis} data")]
    InvalidNumberFormat { axis: Axis, token: String },

    /// Both fields parsed but hold a different number of values.
    #[error("X and Y data differ in length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
}

/// Errors that can occur while plotting, saving, loading or exporting.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The figure could not be turned into pixels.
    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidNumberFormat,
    LengthMismatch,
    IoFailure,
}

impl ErrorKind {
    /// Text for the modal warning.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidNumberFormat => "Пожалуйста, введите числовые данные через запятую.",
            ErrorKind::LengthMismatch => "Длины списков данных для X и Y должны быть одинаковыми.",
            ErrorKind::IoFailure => "Не удалось выполнить операцию с файлом.",
        }
    }
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::InvalidNumberFormat { .. } => ErrorKind::InvalidNumberFormat,
            InputError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::Input(e) => e.kind(),
            PlotError::Io(_) | PlotError::Image(_) | PlotError::Render(_) | PlotError::Config(_) => {
                ErrorKind::IoFailure
            }
        }
    }

    /// Create a Render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_like_errors_classify_as_io_failure() {
        let e = PlotError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.kind(), ErrorKind::IoFailure);
        assert_eq!(PlotError::render("x").kind(), ErrorKind::IoFailure);
        assert_eq!(PlotError::config("x").kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn input_errors_keep_their_kind() {
        let e: PlotError = InputError::LengthMismatch { x_len: 2, y_len: 3 }.into();
        assert_eq!(e.kind(), ErrorKind::LengthMismatch);
        assert_eq!(
            e.kind().user_message(),
            "Длины списков данных для X и Y должны быть одинаковыми."
        );
    }
}

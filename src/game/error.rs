use std::path::PathBuf;

/// Errors raised while reading or validating a tile grid description.
///
/// Any of these aborts grid construction; a partially built grid is never
/// handed to the simulation.
#[derive(Debug, thiserror::Error)]
pub enum GridConfigError {
    /// The grid file could not be read.
    #[error("failed to read grid config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The grid file was read but is not valid JSON/RON for a grid config.
    #[error("failed to parse grid config {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    /// The file extension is neither `.json` nor `.ron`.
    #[error("unsupported grid config format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Columns or rows is zero.
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    ZeroDimension { columns: usize, rows: usize },

    /// `passable_tiles` does not hold exactly `rows * columns` entries.
    #[error("passable mask has {actual} entries, expected {expected} (rows * columns)")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Errors raised while resolving a theme's colors.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme '{theme}': {field} is not a valid hex color: '{value}'")]
    InvalidColor {
        theme: String,
        field: &'static str,
        value: String,
    },

    #[error("theme '{theme}' has an empty liquid palette")]
    EmptyPalette { theme: String },
}

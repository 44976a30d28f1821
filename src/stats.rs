use crate::data::model::{Column, DataError, Table};

// ---------------------------------------------------------------------------
// Feature statistics – max / min / mean over one numeric column
// ---------------------------------------------------------------------------

/// Summary of one numeric column, plus where the maximum lives.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStats {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Row index of the maximum value (first occurrence on ties).
    pub top_row: usize,
}

/// Compute max, min, and mean for one numeric column.
///
/// The whole column is converted to floats first; a non-numeric cell fails
/// the conversion. Computation only, no printing — the caller formats.
pub fn feature_stats(table: &Table, column: Column) -> Result<FeatureStats, DataError> {
    let values = table.numeric_column(column)?;
    if values.is_empty() {
        return Err(DataError::EmptyTable);
    }

    let mut max = values[0];
    let mut min = values[0];
    let mut top_row = 0;
    let mut sum = 0.0;
    for (row, &value) in values.iter().enumerate() {
        if value > max {
            max = value;
            top_row = row;
        }
        if value < min {
            min = value;
        }
        sum += value;
    }

    Ok(FeatureStats {
        max,
        min,
        mean: sum / values.len() as f64,
        top_row,
    })
}

// ---------------------------------------------------------------------------
// Age statistics – release-year span and the oldest song
// ---------------------------------------------------------------------------

/// Release-year span and the oldest song's identifying fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeStats {
    /// Newest year minus oldest year.
    pub span: i64,
    /// Row index of the oldest song (first occurrence on ties).
    pub oldest_row: usize,
    pub oldest_artist: String,
    pub oldest_key: String,
    pub oldest_mode: String,
}

/// Compute the release-year span and look up the oldest song.
///
/// The column is converted to integers; fractional or non-numeric text fails
/// the conversion.
pub fn age_stats(table: &Table, column: Column) -> Result<AgeStats, DataError> {
    let years = table.integer_column(column)?;
    if years.is_empty() {
        return Err(DataError::EmptyTable);
    }

    let mut max = years[0];
    let mut min = years[0];
    let mut oldest_row = 0;
    for (row, &year) in years.iter().enumerate() {
        if year > max {
            max = year;
        }
        if year < min {
            min = year;
            oldest_row = row;
        }
    }

    Ok(AgeStats {
        span: max - min,
        oldest_row,
        oldest_artist: table.cell(oldest_row, Column::Artist)?.to_string(),
        oldest_key: table.cell(oldest_row, Column::Key)?.to_string(),
        oldest_mode: table.cell(oldest_row, Column::Mode)?.to_string(),
    })
}

/// Truncate toward zero for display. The reports intentionally truncate
/// rather than round, for parity with the original output format.
pub fn truncated(value: f64) -> i64 {
    value as i64
}

use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Column – the fixed 14-column schema
// ---------------------------------------------------------------------------

/// One attribute of the song dataset, in file column order.
///
/// The enum is the single source of truth for the attribute → storage
/// position mapping, shared by the loader, the record model, and the
/// statistics engine. The menu numbering in the session is the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Artist,
    Release,
    NumOfStreams,
    Bpm,
    Key,
    Mode,
    Danceability,
    Valence,
    Energy,
    Acousticness,
    Instrumentalness,
    Liveness,
    Speechiness,
}

impl Column {
    /// All columns, in file order.
    pub const ALL: [Column; 14] = [
        Column::Title,
        Column::Artist,
        Column::Release,
        Column::NumOfStreams,
        Column::Bpm,
        Column::Key,
        Column::Mode,
        Column::Danceability,
        Column::Valence,
        Column::Energy,
        Column::Acousticness,
        Column::Instrumentalness,
        Column::Liveness,
        Column::Speechiness,
    ];

    /// The seven percentage-valued features, in charting order.
    pub const FEATURES: [Column; 7] = [
        Column::Danceability,
        Column::Valence,
        Column::Energy,
        Column::Acousticness,
        Column::Instrumentalness,
        Column::Liveness,
        Column::Speechiness,
    ];

    /// Storage position of this column within a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The column at a given position, if in range.
    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    /// Column name as shown in the analysis menu.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Artist => "artist(s)",
            Column::Release => "release",
            Column::NumOfStreams => "num_of_streams",
            Column::Bpm => "bpm",
            Column::Key => "key",
            Column::Mode => "mode",
            Column::Danceability => "danceability",
            Column::Valence => "valence",
            Column::Energy => "energy",
            Column::Acousticness => "acousticness",
            Column::Instrumentalness => "instrumentalness",
            Column::Liveness => "liveness",
            Column::Speechiness => "speechiness",
        }
    }

    /// Whether the column holds numbers. Text columns (title, artist, key,
    /// mode) have no meaningful summary statistics.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Column::Title | Column::Artist | Column::Key | Column::Mode
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// DataError – typed access failures
// ---------------------------------------------------------------------------

/// Errors raised by typed access to the loaded table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    Parse {
        column: Column,
        row: usize,
        value: String,
    },

    #[error("row index {index} is out of bounds (the table has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },

    #[error("the table has no rows")]
    EmptyTable,
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full in-memory dataset: one row of 14 text cells per song.
///
/// Loaded once at startup and never mutated. Cells stay text until a
/// consumer asks for a numeric interpretation, so malformed numbers only
/// surface at conversion time.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Wrap loaded rows. Every row must have exactly [`Column::ALL`] cells;
    /// the loader enforces this.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == Column::ALL.len()));
        Table { rows }
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounds-checked access to one row.
    pub fn row(&self, index: usize) -> Result<&[String], DataError> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(DataError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            })
    }

    /// One cell as text.
    pub fn cell(&self, row: usize, column: Column) -> Result<&str, DataError> {
        Ok(self.row(row)?[column.index()].as_str())
    }

    /// One cell parsed as a float.
    pub fn numeric_cell(&self, row: usize, column: Column) -> Result<f64, DataError> {
        let text = self.cell(row, column)?;
        text.parse().map_err(|_| DataError::Parse {
            column,
            row,
            value: text.to_string(),
        })
    }

    /// A whole column parsed as floats.
    pub fn numeric_column(&self, column: Column) -> Result<Vec<f64>, DataError> {
        (0..self.len())
            .map(|row| self.numeric_cell(row, column))
            .collect()
    }

    /// A whole column parsed as integers.
    pub fn integer_column(&self, column: Column) -> Result<Vec<i64>, DataError> {
        (0..self.len())
            .map(|row| {
                let text = self.cell(row, column)?;
                text.parse().map_err(|_| DataError::Parse {
                    column,
                    row,
                    value: text.to_string(),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Song – one parsed, typed row
// ---------------------------------------------------------------------------

/// One song with typed fields and its percentage feature vector.
///
/// Built transiently from a table row when the user asks for a per-song
/// chart; not stored anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub key: String,
    pub mode: String,
    pub release: f64,
    pub num_of_streams: f64,
    pub bpm: f64,
    pub danceability: f64,
    pub valence: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
}

impl Song {
    /// Build a song from one table row. The index is bounds-checked and the
    /// ten numeric cells must parse.
    pub fn build(table: &Table, row_index: usize) -> Result<Song, DataError> {
        let text = |column: Column| table.cell(row_index, column).map(str::to_owned);
        let number = |column: Column| table.numeric_cell(row_index, column);

        Ok(Song {
            title: text(Column::Title)?,
            artist: text(Column::Artist)?,
            key: text(Column::Key)?,
            mode: text(Column::Mode)?,
            release: number(Column::Release)?,
            num_of_streams: number(Column::NumOfStreams)?,
            bpm: number(Column::Bpm)?,
            danceability: number(Column::Danceability)?,
            valence: number(Column::Valence)?,
            energy: number(Column::Energy)?,
            acousticness: number(Column::Acousticness)?,
            instrumentalness: number(Column::Instrumentalness)?,
            liveness: number(Column::Liveness)?,
            speechiness: number(Column::Speechiness)?,
        })
    }

    /// The seven percentage features, in the same order as
    /// [`Column::FEATURES`].
    pub fn percentages(&self) -> [f64; 7] {
        [
            self.danceability,
            self.valence,
            self.energy,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.speechiness,
        ]
    }
}

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use super::model::{Column, Table};

/// Load the song dataset from a delimited text file.
///
/// The first line is a header and is skipped. Every data cell is kept as
/// text; numeric interpretation happens later, when a consumer asks for it.
/// A missing or unreadable file is fatal.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let headers = reader.headers().context("reading CSV header")?;
    if headers.len() != Column::ALL.len() {
        bail!(
            "{}: expected {} columns, found {}",
            path.display(),
            Column::ALL.len(),
            headers.len()
        );
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = "title,artist(s),release,num_of_streams,bpm,key,mode,\
                          danceability,valence,energy,acousticness,instrumentalness,\
                          liveness,speechiness";

    #[test]
    fn loads_all_rows_with_14_fields() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "{HEADER}").unwrap();
        writeln!(tmp, "Song A,Artist A,2019,1000,120,C,Major,50,40,60,10,0,15,5").unwrap();
        writeln!(tmp, "Song B,Artist B,1998,2000,95,G,Minor,70,55,45,20,1,12,8").unwrap();

        let table = load_csv(tmp.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(0).unwrap().len(), 14);
        assert_eq!(table.cell(1, Column::Title).unwrap(), "Song B");
        assert_eq!(table.cell(0, Column::Mode).unwrap(), "Major");
    }

    #[test]
    fn header_is_not_a_data_row() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "{HEADER}").unwrap();
        writeln!(tmp, "Only,One,2020,1,100,A,Minor,1,2,3,4,5,6,7").unwrap();

        let table = load_csv(tmp.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, Column::Title).unwrap(), "Only");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("no_such_file.csv")).is_err());
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "title,artist").unwrap();
        writeln!(tmp, "Song A,Artist A").unwrap();

        assert!(load_csv(tmp.path()).is_err());
    }
}

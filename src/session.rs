use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;

use crate::chart::{self, BarChart, ScatterChart};
use crate::data::model::{Column, Song, Table};
use crate::stats::{age_stats, feature_stats, truncated};

// ---------------------------------------------------------------------------
// Interactive session – menu loop plus end-of-session charts
// ---------------------------------------------------------------------------

/// The interactive analysis session.
///
/// Owns the loaded table and the chart output paths. All console I/O goes
/// through the reader/writer handed to [`Session::run`], so tests can drive
/// the menu with in-memory buffers.
pub struct Session {
    table: Table,
    /// Where the bonus song's bar chart is written.
    pub bar_chart_path: PathBuf,
    /// Where the bpm/danceability scatter plot is written.
    pub scatter_path: PathBuf,
}

impl Session {
    pub fn new(table: Table) -> Session {
        Session {
            table,
            bar_chart_path: PathBuf::from(chart::BAR_CHART_PATH),
            scatter_path: PathBuf::from(chart::SCATTER_PATH),
        }
    }

    /// Run the full session: menu loop, then the scatter plot, then the
    /// bonus song's bar chart.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        self.print_menu(output)?;
        self.menu_loop(input, output)?;

        let scatter = ScatterChart::for_table(&self.table)?;
        chart::render_scatter(&scatter, &self.scatter_path)?;

        write!(output, "Bonus - Enter any row number: ")?;
        output.flush()?;
        match read_choice(input)? {
            Some(row) if row >= 0 => {
                let song = Song::build(&self.table, row as usize)?;
                let bar = BarChart::for_song(&song);
                chart::render_bar_chart(&bar, &self.bar_chart_path)?;
            }
            Some(row) => bail!("row number must be non-negative, got {row}"),
            None => info!("no bonus row requested"),
        }
        Ok(())
    }

    /// Print the banner and the 14 analysis options, once at startup.
    fn print_menu<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Spotify Statistics\n")?;
        writeln!(output, "Song analysis options: ")?;
        for (i, column) in Column::ALL.iter().enumerate() {
            writeln!(output, "{i} {column}")?;
        }
        writeln!(output, "Choose -1 to end the program.")?;
        Ok(())
    }

    /// Dispatch menu choices until -1 or end of input.
    fn menu_loop<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        // 0 maps to the title column, a no-op, so the first pass only
        // prompts.
        let mut choice: i64 = 0;
        loop {
            if choice == -1 {
                return Ok(());
            }
            self.dispatch(choice, output)?;

            write!(output, "\nPlease enter a song feature to analyze: ")?;
            output.flush()?;
            match read_choice(input)? {
                Some(next) => choice = next,
                None => {
                    info!("end of input, closing the menu");
                    return Ok(());
                }
            }
        }
    }

    /// Handle one menu choice. Text columns are a deliberate no-op; out of
    /// range prints a message and nothing else.
    fn dispatch<W: Write>(&self, choice: i64, output: &mut W) -> Result<()> {
        let column = match usize::try_from(choice).ok().and_then(Column::from_index) {
            Some(column) => column,
            None => {
                writeln!(output, "You must enter a valid menu option.")?;
                return Ok(());
            }
        };

        if column == Column::Release {
            let stats = age_stats(&self.table, column)?;
            writeln!(output, "Span of years: {}", stats.span)?;
            writeln!(output, "Artist of oldest song: {}", stats.oldest_artist)?;
            writeln!(
                output,
                "Key and mode of oldest song: {} {}",
                stats.oldest_key, stats.oldest_mode
            )?;
        } else if column.is_numeric() {
            let stats = feature_stats(&self.table, column)?;
            writeln!(output, "Highest value: {}", truncated(stats.max))?;
            writeln!(output, "Lowest value: {}", truncated(stats.min))?;
            writeln!(output, "Mean value: {}", truncated(stats.mean))?;
            let title = self.table.cell(stats.top_row, Column::Title)?;
            writeln!(output, "Top song in selected feature: {title}")?;
        }
        Ok(())
    }
}

/// Read the next line and parse it as an integer choice.
///
/// `Ok(None)` on end of input. Non-integer text is an unrecoverable parse
/// failure and propagates.
fn read_choice<R: BufRead>(input: &mut R) -> Result<Option<i64>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("reading choice")? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map(Some)
        .with_context(|| format!("'{trimmed}' is not a valid menu number"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn song_row(title: &str, release: &str, bpm: &str, energy: &str) -> Vec<String> {
        Column::ALL
            .iter()
            .map(|column| match column {
                Column::Title => title.to_string(),
                Column::Artist => format!("{title} artist"),
                Column::Release => release.to_string(),
                Column::NumOfStreams => "1000".to_string(),
                Column::Bpm => bpm.to_string(),
                Column::Key => "C".to_string(),
                Column::Mode => "Major".to_string(),
                Column::Energy => energy.to_string(),
                _ => "10".to_string(),
            })
            .collect()
    }

    fn session() -> Session {
        Session::new(Table::new(vec![
            song_row("First", "2001", "100", "30"),
            song_row("Second", "1998", "120", "90"),
            song_row("Third", "2010", "80", "60"),
        ]))
    }

    fn run_menu(session: &Session, input: &str) -> String {
        let mut output = Vec::new();
        session
            .menu_loop(&mut Cursor::new(input), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn minus_one_exits_immediately() {
        let out = run_menu(&session(), "-1\n");
        // The sentinel pass prompts once, computes nothing.
        assert_eq!(out, "\nPlease enter a song feature to analyze: ");
    }

    #[test]
    fn text_columns_are_no_ops() {
        let s = session();
        for choice in [0, 1, 5, 6] {
            let mut output = Vec::new();
            s.dispatch(choice, &mut output).unwrap();
            assert!(output.is_empty(), "choice {choice} should print nothing");
        }
    }

    #[test]
    fn out_of_range_choice_prints_validation_message() {
        let s = session();
        for choice in [-5, 14, 99] {
            let mut output = Vec::new();
            s.dispatch(choice, &mut output).unwrap();
            assert_eq!(
                String::from_utf8(output).unwrap(),
                "You must enter a valid menu option.\n"
            );
        }
    }

    #[test]
    fn feature_choice_reports_truncated_stats_and_top_song() {
        let out = run_menu(&session(), "9\n-1\n");
        assert!(out.contains("Highest value: 90"));
        assert!(out.contains("Lowest value: 30"));
        assert!(out.contains("Mean value: 60"));
        assert!(out.contains("Top song in selected feature: Second"));
    }

    #[test]
    fn release_choice_reports_age_stats() {
        let out = run_menu(&session(), "2\n-1\n");
        assert!(out.contains("Span of years: 12"));
        assert!(out.contains("Artist of oldest song: Second artist"));
        assert!(out.contains("Key and mode of oldest song: C Major"));
    }

    #[test]
    fn invalid_then_valid_choice_keeps_the_loop_alive() {
        let out = run_menu(&session(), "20\n4\n-1\n");
        assert!(out.contains("You must enter a valid menu option."));
        assert!(out.contains("Highest value: 120"));
    }

    #[test]
    fn non_integer_choice_is_an_error() {
        let s = session();
        let mut output = Vec::new();
        let result = s.menu_loop(&mut Cursor::new("banana\n"), &mut output);
        assert!(result.is_err());
    }

    #[test]
    fn end_of_input_closes_the_menu() {
        let out = run_menu(&session(), "");
        assert!(out.ends_with("Please enter a song feature to analyze: "));
    }

    #[test]
    fn menu_lists_all_columns_and_exit_hint() {
        let s = session();
        let mut output = Vec::new();
        s.print_menu(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("Spotify Statistics\n"));
        assert!(text.contains("0 title\n"));
        assert!(text.contains("2 release\n"));
        assert!(text.contains("13 speechiness\n"));
        assert!(text.contains("Choose -1 to end the program.\n"));
    }
}

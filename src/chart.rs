use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use plotters::prelude::*;

use crate::data::model::{Column, DataError, Song, Table};

/// Default output path for the per-song feature bar chart. Fixed name, so a
/// rerun overwrites the previous image.
pub const BAR_CHART_PATH: &str = "bonus_graph.png";

/// Default output path for the bpm vs. danceability scatter plot.
pub const SCATTER_PATH: &str = "danceability_vs_bpm.png";

/// Canvas size for both charts, in pixels.
const CANVAS: (u32, u32) = (1200, 700);

const CAPTION_FONT: (&str, u32) = ("sans-serif", 30);

// ---------------------------------------------------------------------------
// Chart specs – everything that defines a chart, before any drawing
// ---------------------------------------------------------------------------

/// The per-song feature bar chart: seven named bars on a 0–100 axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Feature names along the x-axis, in fixed order.
    pub categories: [&'static str; 7],
    pub values: [f64; 7],
    pub y_max: u32,
    pub y_tick: u32,
}

impl BarChart {
    pub fn for_song(song: &Song) -> BarChart {
        let mut categories = [""; 7];
        for (slot, column) in categories.iter_mut().zip(Column::FEATURES) {
            *slot = column.name();
        }

        BarChart {
            title: format!("Song Stats for {}", song.title),
            x_label: "Feature",
            y_label: "Percentage",
            categories,
            values: song.percentages(),
            y_max: 100,
            y_tick: 10,
        }
    }
}

/// The whole-table scatter plot of bpm against danceability.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series_label: &'static str,
    /// One (bpm, danceability) pair per row, coerced to integers.
    pub points: Vec<(i64, i64)>,
}

impl ScatterChart {
    pub fn for_table(table: &Table) -> Result<ScatterChart, DataError> {
        let bpm = table.integer_column(Column::Bpm)?;
        let danceability = table.integer_column(Column::Danceability)?;

        Ok(ScatterChart {
            title: "Danceability vs. Beats per Minute",
            x_label: "BPM",
            y_label: "Danceability",
            series_label: "Song Stats",
            points: bpm.into_iter().zip(danceability).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the bar chart as a PNG at `path`, overwriting any existing file.
/// Returns the written path.
pub fn render_bar_chart(chart: &BarChart, path: &Path) -> Result<PathBuf> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;

    let bars = chart.categories.len() as i32;
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..bars, 0f64..chart.y_max as f64)
        .context("building bar chart axes")?;

    ctx.configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .x_labels(chart.categories.len())
        .y_labels((chart.y_max / chart.y_tick + 1) as usize)
        .x_label_formatter(&|x| {
            chart
                .categories
                .get(*x as usize)
                .map(|name| name.to_string())
                .unwrap_or_default()
        })
        .draw()
        .context("drawing bar chart mesh")?;

    ctx.draw_series(chart.values.iter().enumerate().map(|(i, &value)| {
        Rectangle::new([(i as i32, 0.0), (i as i32 + 1, value)], BLUE.filled())
    }))
    .context("drawing bars")?;

    root.present().context("writing bar chart file")?;
    info!("bar chart saved to {}", path.display());
    Ok(path.to_path_buf())
}

/// Draw the scatter plot as a PNG at `path`, overwriting any existing file.
/// Returns the written path.
pub fn render_scatter(chart: &ScatterChart, path: &Path) -> Result<PathBuf> {
    let (x_min, x_max) = padded_range(chart.points.iter().map(|&(x, _)| x));
    let (y_min, y_max) = padded_range(chart.points.iter().map(|&(_, y)| y));

    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .context("building scatter axes")?;

    ctx.configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .draw()
        .context("drawing scatter mesh")?;

    ctx.draw_series(
        chart
            .points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )
    .context("drawing scatter points")?
    .label(chart.series_label)
    .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

    ctx.configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .context("drawing scatter legend")?;

    root.present().context("writing scatter file")?;
    info!("scatter plot saved to {}", path.display());
    Ok(path.to_path_buf())
}

/// Axis range covering `values` with a little breathing room on each side.
fn padded_range(values: impl Iterator<Item = i64>) -> (i64, i64) {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    let mut any = false;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if !any {
        return (0, 1);
    }
    (min - 5, max + 5)
}

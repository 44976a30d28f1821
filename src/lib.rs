//! songstats – terminal-based song dataset analyzer.
//!
//! Loads a 14-column CSV of songs, answers interactive requests for
//! per-attribute summary statistics, and writes two static chart images: a
//! feature bar chart for one chosen song and a bpm-vs-danceability scatter
//! plot over the whole dataset.

pub mod chart;
pub mod data;
pub mod session;
pub mod stats;

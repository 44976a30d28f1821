use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Result;

use songstats::data::loader::load_csv;
use songstats::session::Session;

/// Default dataset location, relative to the working directory.
const DATA_PATH: &str = "spotify_data.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DATA_PATH), PathBuf::from);
    let table = load_csv(&path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(table).run(&mut stdin.lock(), &mut stdout.lock())
}

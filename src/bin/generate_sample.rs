//! Writes a small deterministic `spotify_data.csv` so the analyzer can be
//! tried without a real export. Every numeric cell is an integer, matching
//! the format the session's integer conversions expect.

use songstats::data::model::Column;

/// Minimal deterministic PRNG (64-bit LCG), enough to vary the sample data.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform integer in `[lo, hi]`.
    fn in_range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let titles = [
        "Midnight Drive", "Paper Planes", "Golden Hour", "Static Bloom",
        "Undertow", "Glass Houses", "North Star", "Violet Sky",
        "Afterglow", "Copper Wire", "Low Tide", "Second Wind",
        "Night Market", "Slow Burn", "Wildflower", "Echo Park",
        "Borrowed Time", "Silver Lining", "Half Moon", "Last Train",
    ];
    let artists = [
        "The Lantern Club", "Mara Quinn", "Delta Haze", "Oscar Vane",
        "June & The Tides", "Kite Theory", "Nova Reyes", "Paloma West",
    ];
    let keys = ["A", "B", "C#", "D", "E", "F#", "G"];
    let modes = ["Major", "Minor"];

    let mut writer =
        csv::Writer::from_path("spotify_data.csv").expect("creating spotify_data.csv");
    writer
        .write_record(Column::ALL.iter().map(|column| column.name()))
        .expect("writing header");

    for (i, title) in titles.iter().enumerate() {
        let artist = artists[i % artists.len()];
        let release = rng.in_range(1975, 2023);
        let streams = rng.in_range(1_000_000, 3_000_000_000);
        let bpm = rng.in_range(70, 190);
        let key = keys[rng.in_range(0, keys.len() as i64 - 1) as usize];
        let mode = modes[rng.in_range(0, 1) as usize];

        let mut record = vec![
            title.to_string(),
            artist.to_string(),
            release.to_string(),
            streams.to_string(),
            bpm.to_string(),
            key.to_string(),
            mode.to_string(),
        ];
        // The seven percentage features.
        for _ in 0..7 {
            record.push(rng.in_range(0, 100).to_string());
        }

        writer.write_record(&record).expect("writing row");
    }

    writer.flush().expect("flushing spotify_data.csv");
    println!("Wrote {} songs to spotify_data.csv", titles.len());
}

/// Data layer: the column schema, core types, and loading.
///
/// Architecture:
/// ```text
///  spotify_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (text cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  rows × 14 columns, immutable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Song     │  one typed row + feature vector
///   └──────────┘
/// ```

pub mod loader;
pub mod model;

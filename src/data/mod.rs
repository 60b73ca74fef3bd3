/// Data layer: table model, loading, cleaning, aggregation, filtering, export.
///
/// Architecture:
/// ```text
///   unicorn_insight_dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (all cells text / null)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cleaner  │  rename index, coerce valuation → Float / Null, drop Null
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  industry → summed valuation, largest first
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  rows of one industry, sorted by valuation
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered_<industry>_unicorns.csv
///   └──────────┘
/// ```

pub mod aggregate;
pub mod cleaner;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;

/// Data layer: core types, loading, classification, and filtering.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  rows of CellValue, unique-value index
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  schema   │      │  filter   │
///   │ numeric / │      │ category  │
///   │ categor.  │      │ subsets   │
///   └──────────┘      └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;

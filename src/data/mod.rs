//! Data layer: core types, loading, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  catalog .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Catalog
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Catalog   │  Vec<EarthquakeRecord>, file order
//!   └──────────┘
//!        │
//!        ├────────────────────┐
//!        ▼                    ▼
//!   ┌──────────┐        ┌───────────┐
//!   │  filter   │        │ aggregate  │
//!   │ magnitude │        │ histogram, │
//!   │ threshold │        │ proportions│
//!   └──────────┘        └───────────┘
//! ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

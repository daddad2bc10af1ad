/// dismon_core: transform library for the global disaster risk dashboard.
///
/// Pure, synchronous, in-memory transforms over EM-DAT disaster records.
/// CSV loading and all rendering live outside this crate — callers hand in
/// a cleaned record table and get back the same shape (scored, filtered,
/// or summarized).
///
/// # Module structure
///
/// ```
/// dismon_core
/// ├── model       — shared data types (DisasterRecord, SeverityError)
/// ├── hazards     — natural-hazard whitelist: registry, TOML loader, filter
/// ├── analysis
/// │   ├── severity — composite impact scoring + batch min-max normalization
/// │   ├── views    — year/type/country view filtering
/// │   ├── summary  — impact KPI aggregation over a filtered view
/// │   └── stats    — z-score and percentage-share batch transforms
/// ├── format      — human-readable magnitude formatting (K/M/B)
/// └── fixtures (test only) — representative cleaned-extract payloads
/// ```

/// Public modules
pub mod analysis;
pub mod fixtures;
pub mod format;
pub mod hazards;
pub mod model;

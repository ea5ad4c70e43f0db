//! psicotest-core
//!
//! Pure domain types shared by the scoring engine, the exporters and the
//! HTTP layer: answer maps, item keys, scoring results, interpretation
//! records and the persisted report record.

pub mod error;
pub mod models;

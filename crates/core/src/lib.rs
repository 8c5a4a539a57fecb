//! `payrecon-core` — Payroll reconciliation engine.
//!
//! Pure engine crate: receives raw tab-separated text, returns classified
//! result rows. No CLI or IO dependencies.

pub mod amount;
pub mod engine;
pub mod error;
pub mod model;
pub mod name;
pub mod parse;
pub mod reconcile;

pub use engine::{run, CompareRequest};
pub use error::{CompareError, Dataset, ParseError};
pub use model::{
    ColumnRule, Comparison, LabelLanguage, Labels, ReconcileMode, Record, RegistryLayout,
    ResultRow, RunMeta, Status, Summary,
};

//! Configuration for the payroll engine.
//!
//! Currently this covers the progressive tax withholding schedule: a
//! built-in default plus a YAML loader for future revisions.

mod loader;
mod types;

pub use loader::load_tax_schedule;
pub use types::{TaxBracket, TaxSchedule};

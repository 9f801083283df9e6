//! Tax schedule loading.
//!
//! Loads a [`TaxSchedule`] from a YAML file, so rate revisions for future
//! periods ship as configuration rather than code changes.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::TaxSchedule;

/// Loads and validates a tax schedule from a YAML file.
///
/// # File format
///
/// ```yaml
/// version: "2026-27"
/// brackets:
///   - over: "370"
///     base_tax: "0"
///     marginal_rate: "0.10"
///   - over: "900"
///     base_tax: "53"
///     marginal_rate: "0.19"
/// ```
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file cannot be read, `ConfigParseError`
/// if it is not valid YAML for a schedule, and `InvalidTaxSchedule` if the
/// parsed schedule fails validation.
pub fn load_tax_schedule<P: AsRef<Path>>(path: P) -> PayrollResult<TaxSchedule> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let schedule: TaxSchedule =
        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    schedule.validate()?;
    Ok(schedule)
}

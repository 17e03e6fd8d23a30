use std::path::Path;

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;
use crate::model::config::ProcessConfig;

/// Missing keys fall back to `ProcessConfig::default_v1()`.
pub fn load_config(path: &Path) -> Result<ProcessConfig, InputError> {
    let reader = open_maybe_gz(path)?;
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

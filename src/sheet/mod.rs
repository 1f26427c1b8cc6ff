// src/sheet/mod.rs

pub mod import;
pub mod template;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// rust_xlsxwriter wants a &str path.
pub(crate) fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid output path".to_string()))
}

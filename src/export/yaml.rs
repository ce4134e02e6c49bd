//! YAML Export functionality
//!
//! Exports the complete data set to YAML format for human-readable backup.

use crate::error::TrakrResult;
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full data set to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrakrResult<()> {
    let export = FullExport::from_storage(storage)?;

    // Header comment so the file is self-describing
    writeln!(writer, "# Trakr Full Data Export")
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Keep it secure - it contains all your financial data."
    )
    .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TrakrResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| crate::error::TrakrError::Import(e.to_string()))?;

    export
        .validate()
        .map_err(crate::error::TrakrError::Import)?;

    Ok(export)
}

//! Saving configurations as JSON.
//!
//! Always writes the current format; legacy shapes exist only on the
//! import side. Serialization cannot fail for model types, so the only
//! error source here is the filesystem.

use crate::error::ExportError;
use rackstack_model::Rack;
use std::path::Path;
use tracing::info;

/// Pretty-printed JSON for the whole configuration.
#[must_use]
pub fn to_json(racks: &[Rack]) -> String {
    serde_json::to_string_pretty(racks).expect("model types always serialize")
}

/// Write the configuration to a file.
pub fn write_json(racks: &[Rack], path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, to_json(racks))?;
    info!(racks = racks.len(), path = %path.display(), "configuration saved");
    Ok(())
}

//! JSON report export.

use std::path::Path;

use anyhow::Context;

use crate::use_cases::integrity::IntegrityReport;

/// Write `report` as pretty JSON to `path`, creating parent directories.
pub fn write_json_report(path: &Path, report: &IntegrityReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

use crate::errors::{PipelineError, PipelineResult};
use log::info;
use std::path::Path;
use std::process::Command;

/// Platform command that hands a file to the default viewer.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

pub fn open_in_browser(path: &Path) -> PipelineResult<()> {
    let (program, args) = opener();

    Command::new(program)
        .args(args)
        .arg(path)
        .spawn()
        .map_err(|e| PipelineError::Viewer(format!("Failed to run {program}: {e}")))?;

    info!("🌐 Opened {} in the browser", path.display());
    Ok(())
}

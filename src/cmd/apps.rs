use crate::data::{InfoPanelData, Persistable};
use crate::ui::link::{parse_link, LinkOpener, SystemOpener};
use anyhow::{bail, Result};

pub fn run() -> Result<()> {
    let info = InfoPanelData::load()?;
    write_apps(&info, &mut std::io::stdout())
}

/// Opens the named app's link, like pressing "Try" on its card.
pub fn run_try(name: &str) -> Result<()> {
    let info = InfoPanelData::load()?;
    try_app(&info, name, &SystemOpener, &mut std::io::stdout())
}

pub(crate) fn write_apps<W: std::io::Write>(data: &InfoPanelData, out: &mut W) -> Result<()> {
    writeln!(out, "Apps")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<4} {:<18} {}", "#", "Name", "Description")?;
    for (i, app) in data.apps.iter().enumerate() {
        writeln!(out, "  {:<4} {:<18} {}", i + 1, app.name, app.description)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} app(s)", data.apps.len())?;
    Ok(())
}

pub(crate) fn try_app<W: std::io::Write>(
    data: &InfoPanelData,
    name: &str,
    opener: &dyn LinkOpener,
    out: &mut W,
) -> Result<()> {
    let app = match data.find_app(name) {
        Some(a) => a,
        None => bail!("App '{}' not found. Run `whatday apps` to list them.", name),
    };
    if parse_link(&app.url).is_none() {
        writeln!(out, "{} has no usable link.", app.name)?;
        return Ok(());
    }
    opener.open(&app.url);
    writeln!(out, "Opening {} ({})", app.name, app.url)?;
    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::tournament::{TournamentInput, TournamentSnapshot};

pub fn load_input(path: &Path) -> Result<TournamentInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read tournament input {}", path.display()))?;
    parse_input(&raw).with_context(|| format!("parse tournament input {}", path.display()))
}

pub fn parse_input(raw: &str) -> Result<TournamentInput> {
    serde_json::from_str(raw).context("invalid tournament json")
}

pub fn snapshot_json(snapshot: &TournamentSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("serialize snapshot")
}

pub fn save_snapshot(path: &Path, snapshot: &TournamentSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("create snapshot dir")?;
        }
    }
    let json = snapshot_json(snapshot)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write snapshot")?;
    fs::rename(&tmp, path).context("swap snapshot")?;
    Ok(())
}

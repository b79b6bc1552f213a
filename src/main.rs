use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use wc26_standings::config::{self, AppConfig};
use wc26_standings::{logging, snapshot_io, tournament};

fn main() -> Result<()> {
    config::load_dotenv();
    let cfg = AppConfig::from_env();
    logging::init(cfg.log_level);

    let input_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: wc26_standings <tournament.json>"))?;

    let input = snapshot_io::load_input(&input_path)?;
    let snapshot = tournament::run(&input, &cfg.pipeline);

    for note in &snapshot.errors {
        eprintln!("[WARN] {note}");
    }

    match cfg.snapshot_out.as_deref() {
        Some(out) => {
            snapshot_io::save_snapshot(out, &snapshot)
                .with_context(|| format!("save snapshot to {}", out.display()))?;
            println!(
                "Wrote {} groups, {} bracket matches ({} slots resolved) to {}",
                snapshot.groups.len(),
                snapshot.bracket.len(),
                snapshot.resolved_slots(),
                out.display()
            );
        }
        None => println!("{}", snapshot_io::snapshot_json(&snapshot)?),
    }

    Ok(())
}

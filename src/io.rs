use crate::model::League;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Export JSON de la league (jolie mise en forme)
pub fn export_league_json<P: AsRef<Path>>(path: P, league: &League) -> anyhow::Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(league)?;
    fs::write(path, s).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export CSV du classement: header `rank,name,wins`
///
/// Les lignes suivent l'ordre de `league` ; passer une league déjà triée.
#[cfg(feature = "csv")]
pub fn export_league_csv<P: AsRef<Path>>(path: P, league: &League) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["rank", "name", "wins"])?;
    for (idx, p) in league.iter().enumerate() {
        let rank = (idx + 1).to_string();
        let wins = p.wins.to_string();
        w.write_record([rank.as_str(), p.name.as_str(), wins.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

use crate::store::PlayerStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Extrait le vainqueur d'une ligne `"<Name> wins"`.
pub fn extract_winner(line: &str) -> Option<&str> {
    line.trim()
        .strip_suffix(" wins")
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Saisie des résultats de parties ligne par ligne.
#[derive(Debug)]
pub struct Game<S: PlayerStore> {
    store: S,
}

impl<S: PlayerStore> Game<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Enregistre une victoire par ligne reconnue et renvoie le nombre enregistré.
    ///
    /// Les lignes vides sont ignorées, les autres lignes non reconnues sont
    /// signalées sur `out` sans interrompre la saisie.
    pub fn record_results<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<usize> {
        let mut recorded = 0;
        for (idx, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("reading line {}", idx + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            match extract_winner(&line) {
                Some(name) => {
                    self.store
                        .record_win(name)
                        .with_context(|| format!("recording win for {name}"))?;
                    let wins = self.store.player_score(name)?;
                    writeln!(out, "{name}: {wins}")?;
                    recorded += 1;
                }
                None => writeln!(out, "ignored: {}", line.trim())?,
            }
        }
        Ok(recorded)
    }
}

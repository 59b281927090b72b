use super::{validate_name, PlayerStore, StoreError};
use crate::model::League;

/// Store purement mémoire, sans persistance.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    league: League,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self {
            league: League::new(),
        }
    }
}

impl From<League> for InMemoryPlayerStore {
    fn from(league: League) -> Self {
        Self { league }
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn league(&mut self) -> Result<League, StoreError> {
        Ok(self.league.sorted())
    }

    fn player_score(&mut self, name: &str) -> Result<u64, StoreError> {
        Ok(self.league.find(name).map(|p| p.wins).unwrap_or(0))
    }

    fn record_win(&mut self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        self.league
            .record_win(name)
            .map_err(|_| StoreError::WinsOverflow(name.to_string()))?;
        Ok(())
    }
}

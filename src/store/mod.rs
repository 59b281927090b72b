mod backing;
mod memory;
mod types;

pub use backing::Backing;
pub use memory::InMemoryPlayerStore;
pub use types::StoreError;

use crate::model::League;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Interface offerte aux appelants (serveur, CLI, ...).
pub trait PlayerStore {
    /// League triée par victoires décroissantes.
    fn league(&mut self) -> Result<League, StoreError>;
    /// Victoires du joueur, `0` s'il est inconnu.
    fn player_score(&mut self, name: &str) -> Result<u64, StoreError>;
    /// Ajoute une victoire, en créant le joueur si besoin.
    fn record_win(&mut self, name: &str) -> Result<(), StoreError>;
}

impl<S: PlayerStore + ?Sized> PlayerStore for &mut S {
    fn league(&mut self) -> Result<League, StoreError> {
        (**self).league()
    }
    fn player_score(&mut self, name: &str) -> Result<u64, StoreError> {
        (**self).player_score(name)
    }
    fn record_win(&mut self, name: &str) -> Result<(), StoreError> {
        (**self).record_win(name)
    }
}

/// Store adossé à une ressource JSON (fichier, buffer...).
///
/// Aucun cache : chaque appel relit la ressource en entier, et chaque
/// mutation la réécrit en entier depuis l'offset 0.
#[derive(Debug)]
pub struct FileSystemPlayerStore<B: Backing> {
    backing: B,
}

impl<B: Backing> FileSystemPlayerStore<B> {
    /// Lie le store à `backing`; une ressource strictement vide reçoit `[]`.
    ///
    /// Un contenu non vide n'est pas validé ici : une erreur de décodage
    /// n'apparaîtra qu'au premier accès à la league.
    pub fn new(mut backing: B) -> Result<Self, StoreError> {
        backing.seek(SeekFrom::Start(0))?;
        let mut existing = Vec::new();
        backing.read_to_end(&mut existing)?;

        if existing.is_empty() {
            #[cfg(feature = "logging")]
            tracing::debug!("empty player store, seeding with []");
            backing.write_all(b"[]").map_err(StoreError::Init)?;
            backing.flush().map_err(StoreError::Init)?;
        }
        backing.seek(SeekFrom::Start(0))?;

        Ok(Self { backing })
    }

    /// Rend la ressource à son propriétaire.
    pub fn into_inner(self) -> B {
        self.backing
    }

    fn read_league(&mut self) -> Result<League, StoreError> {
        self.backing.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        self.backing.read_to_end(&mut data)?;
        self.backing.seek(SeekFrom::Start(0))?;
        serde_json::from_slice(&data).map_err(StoreError::Decode)
    }

    fn write_league(&mut self, league: &League) -> Result<(), StoreError> {
        let json = serde_json::to_vec(league).map_err(StoreError::Encode)?;
        self.backing.truncate()?;
        self.backing.seek(SeekFrom::Start(0))?;
        self.backing.write_all(&json)?;
        self.backing.flush()?;
        #[cfg(feature = "logging")]
        tracing::debug!(players = league.len(), bytes = json.len(), "league rewritten");
        Ok(())
    }
}

impl<B: Backing> PlayerStore for FileSystemPlayerStore<B> {
    fn league(&mut self) -> Result<League, StoreError> {
        Ok(self.read_league()?.sorted())
    }

    fn player_score(&mut self, name: &str) -> Result<u64, StoreError> {
        let league = self.read_league()?;
        Ok(league.find(name).map(|p| p.wins).unwrap_or(0))
    }

    fn record_win(&mut self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        let mut league = self.read_league()?;
        league
            .record_win(name)
            .map_err(|_| StoreError::WinsOverflow(name.to_string()))?;
        self.write_league(&league)
    }
}

/// Ouvre (ou crée) `path` en lecture/écriture et construit le store.
pub fn open_file_store<P: AsRef<Path>>(path: P) -> Result<FileSystemPlayerStore<File>, StoreError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    FileSystemPlayerStore::new(file)
}

pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

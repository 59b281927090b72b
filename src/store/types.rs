use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// L'amorçage `[]` d'une ressource vide a échoué.
    #[error("initializing empty player store: {0}")]
    Init(#[source] io::Error),
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("player store i/o: {0}")]
    Io(#[from] io::Error),
    /// Contenu présent mais pas un tableau de joueurs valide.
    #[error("decoding league: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("encoding league: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid player name: {0:?}")]
    InvalidName(String),
    /// Le compteur de victoires a atteint `u64::MAX`.
    #[error("win count overflow for player {0:?}")]
    WinsOverflow(String),
}

#![forbid(unsafe_code)]
//! League — store minimal de victoires par joueur, persisté en JSON.
//!
//! - Une seule ressource (fichier) contenant `[{"Name": .., "Wins": ..}]`.
//! - Relecture complète à chaque appel, réécriture complète à chaque victoire.
//! - Classement par victoires décroissantes, stable à égalité.

pub mod game;
pub mod io;
pub mod model;
pub mod store;

pub use game::{extract_winner, Game};
pub use model::{League, Player};
pub use store::{
    open_file_store, Backing, FileSystemPlayerStore, InMemoryPlayerStore, PlayerStore, StoreError,
};

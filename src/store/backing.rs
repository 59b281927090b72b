use std::fs::File;
use std::io::{self, Cursor, Read, Seek, Write};

/// Ressource d'octets positionnable sur laquelle repose un store.
///
/// Le store ne l'ouvre ni ne la ferme : il la reçoit déjà ouverte.
pub trait Backing: Read + Write + Seek {
    /// Ramène le contenu à zéro octet (la position n'est pas modifiée).
    fn truncate(&mut self) -> io::Result<()>;
}

impl Backing for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

impl Backing for &File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }
}

impl Backing for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        Ok(())
    }
}

impl<B: Backing + ?Sized> Backing for &mut B {
    fn truncate(&mut self) -> io::Result<()> {
        (**self).truncate()
    }
}

// ImeClip - Structure Entry
// Represente une selection ou un element de l'historique
//
// Une entree est un tampon d'octets possede. Le contenu est traite
// comme du texte opaque : il est generalement en UTF-8 mais ce n'est
// verifie qu'a l'affichage (voir history/truncate.rs), jamais a l'ecriture.
//
// # Deduplication
// `content_equals` compare les octets bruts (longueur puis contenu),
// utilise par `HistoryRing::push` pour ignorer les repetitions immediates.

use crate::history::truncate::truncate_selection;

/// Une entree de l'historique ou la selection primaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    bytes: Vec<u8>,
}

impl Entry {
    /// Cree une entree en copiant les octets fournis.
    pub fn new(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Cree une entree a partir d'un tampon deja possede.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Remplace le contenu en reutilisant le tampon existant.
    pub fn overwrite(&mut self, bytes: &[u8]) {
        self.bytes.clear();
        self.bytes.extend_from_slice(bytes);
    }

    /// Octets bruts de l'entree.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Taille du contenu en octets.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Retourne true si l'entree ne contient rien.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Verifie si le contenu est identique a celui d'un tampon.
    pub fn content_equals(&self, other: &[u8]) -> bool {
        self.bytes.len() == other.len() && self.bytes == other
    }

    /// Apercu sur une ligne, tronque au milieu si necessaire.
    pub fn preview(&self) -> String {
        truncate_selection(&self.bytes)
    }

    /// Consomme l'entree et retourne son tampon.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

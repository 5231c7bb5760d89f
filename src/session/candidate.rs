// ImeClip - Candidat de la liste de selection
//
// Un candidat associe la forme affichee (tronquee, sur une ligne) au
// texte brut d'origine. Seul le texte brut est valide vers l'hote.

use crate::history::entry::Entry;

/// Element selectionnable presente a l'utilisateur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Forme affichee
    pub display: String,
    /// Texte brut valide en cas de selection
    pub raw: Vec<u8>,
}

impl Candidate {
    /// Construit un candidat a partir d'une entree de l'historique.
    pub fn from_entry(entry: Entry) -> Self {
        Self {
            display: entry.preview(),
            raw: entry.into_bytes(),
        }
    }
}

// ImeClip - Types d'erreur centralises
//
// Ce module definit l'enumeration `ClipError` et le type alias
// `ClipResult<T>` utilises par les fonctions internes d'I/O et de parsing.
//
// # Categories d'erreurs
// - `Storage` : erreur d'I/O disque (lecture/ecriture de history.dat)
// - `Format`  : fichier d'historique illisible (entete absent)
// - `Config`  : erreur d'ecriture ou de lecture de la configuration
// - `Hotkey`  : description de raccourci invalide
//
// Le moteur ne remonte jamais ces erreurs a l'hote : elles sont
// journalisees puis ignorees.

use thiserror::Error;

/// Enumeration de toutes les erreurs possibles dans ImeClip.
#[derive(Debug, Error)]
pub enum ClipError {
    /// Erreur de lecture/ecriture disque
    #[error("[Storage] {0}")]
    Storage(#[from] std::io::Error),
    /// Donnees persistees inexploitables
    #[error("[Format] {0}")]
    Format(String),
    /// Erreur de configuration
    #[error("[Config] {0}")]
    Config(String),
    /// Raccourci clavier invalide
    #[error("[Hotkey] {0}")]
    Hotkey(String),
}

/// Type Result specialise pour ImeClip.
pub type ClipResult<T> = Result<T, ClipError>;

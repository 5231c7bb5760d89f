// ImeClip - Arbre de modules (crate library)
//
// Moteur d'historique du presse-papiers pour methodes de saisie. L'hote
// (framework de saisie) transmet les touches et les changements de
// presse-papiers, le moteur publie une liste de candidats et valide le
// texte choisi.
//
// # Modules
// - `config`    : lecture/ecriture de la configuration (clipboard.conf)
// - `constants` : constantes globales (tailles, troncature, raccourcis)
// - `engine`    : orchestrateur, cycle de vie et persistance
// - `error`     : types d'erreur centralises (ClipError, ClipResult)
// - `history`   : historique en memoire, entrees et troncature d'affichage
// - `input`     : raccourcis clavier et interfaces de l'hote
// - `session`   : machine a etats de la liste de selection
// - `storage`   : format binaire et fichier history.dat

/// Configuration du moteur et parseur de fichiers.
pub mod config;
/// Constantes globales.
pub mod constants;
/// Orchestrateur du moteur.
pub mod engine;
/// Types d'erreur centralises.
pub mod error;
/// Gestion de l'historique en memoire.
pub mod history;
/// Raccourcis clavier et interfaces de l'hote.
pub mod input;
/// Session de selection.
pub mod session;
/// Persistance de l'historique sur disque.
pub mod storage;

pub use config::settings::Config;
pub use engine::ClipboardEngine;
pub use error::{ClipError, ClipResult};
pub use input::chord::{Hotkey, Key, KeyChord, KeyEvent, Modifiers, NamedKey};
pub use input::host::{HistorySink, HotkeyContext, SelectionHost};
pub use session::candidate::Candidate;
pub use session::machine::KeyOutcome;

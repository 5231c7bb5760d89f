// ImeClip - Constantes globales
//
// Ce module centralise les constantes du moteur d'historique :
// - Bornes de l'historique (capacite max, valeur par defaut)
// - Seuils de troncature pour l'affichage des candidats
// - Raccourcis par defaut (declencheur, pagination, validation)
// - Noms de fichiers et repertoires
//
// Les constantes sont utilisees par les modules history, storage,
// config, session et engine pour garantir la coherence des valeurs.

use crate::input::chord::{Key, KeyChord, Modifiers, NamedKey};

/// Capacite maximale de l'historique (borne haute de `history_len`)
pub const MAX_LEN: usize = 128;

/// Nombre d'entrees conservees par defaut
pub const DEFAULT_HISTORY_LEN: usize = 5;

/// En dessous de cette taille (octets), l'apercu est une copie exacte
pub const TRUNCATE_LIMIT: usize = 127;

/// Taille (octets) de la tete et de la queue d'un apercu tronque
pub const TRUNCATE_HALF: usize = 60;

/// Separateur insere entre la tete et la queue : deux espaces, U+2026, deux espaces
pub const TRUNCATE_SEPARATOR: &str = "  \u{2026}  ";

/// Raccourci par defaut ouvrant la liste de l'historique
pub const DEFAULT_TRIGGER_KEY: KeyChord = KeyChord {
    key: Key::Char(';'),
    modifiers: Modifiers::CTRL,
};

/// Raccourcis globaux de repli pour la page precedente
pub const DEFAULT_PREV_PAGE_KEYS: [KeyChord; 2] = [
    KeyChord { key: Key::Char('-'), modifiers: Modifiers::empty() },
    KeyChord { key: Key::Named(NamedKey::Up), modifiers: Modifiers::empty() },
];

/// Raccourcis globaux de repli pour la page suivante
pub const DEFAULT_NEXT_PAGE_KEYS: [KeyChord; 2] = [
    KeyChord { key: Key::Char('='), modifiers: Modifiers::empty() },
    KeyChord { key: Key::Named(NamedKey::Down), modifiers: Modifiers::empty() },
];

/// Touche validant le premier candidat de la page
pub const CHOOSE_KEY: KeyChord = KeyChord {
    key: Key::Named(NamedKey::Space),
    modifiers: Modifiers::empty(),
};

/// Nom du dossier application (config et etat)
pub const APP_DIR_NAME: &str = "imeclip";

/// Sous-dossier de l'etat persistant
pub const STATE_SUBDIR: &str = "clipboard";

/// Nom du fichier d'historique
pub const HISTORY_FILENAME: &str = "history.dat";

/// Nom du fichier de configuration
pub const CONFIG_FILENAME: &str = "clipboard.conf";

/// Section du fichier de configuration
pub const CONFIG_SECTION: &str = "clipboard";

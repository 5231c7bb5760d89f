// ImeClip - Configuration du moteur et valeurs par defaut
//
// Ce module definit la structure `Config` : taille de l'historique et
// raccourci d'ouverture de la liste.
//
// # Chargement
// `Config::load(path)` lit le fichier et applique les valeurs parsees.
// Les valeurs manquantes ou invalides conservent leur defaut, et
// `history_len` est clampe dans [1, MAX_LEN]. Le chargement n'echoue jamais.
//
// # Rechargement
// Pas d'etat global : un rechargement construit une nouvelle `Config`
// puis la passe a `ClipboardEngine::reload_config`.
//
// # Chemins
// Configuration : <config_dir>/imeclip/clipboard.conf
// Historique    : <state_dir>/imeclip/clipboard/history.dat

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::parser::{self, ParsedConfig};
use crate::constants::*;
use crate::error::{ClipError, ClipResult};
use crate::history::ring::clamp_capacity;
use crate::input::chord::Hotkey;

/// Configuration complete du moteur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Nombre maximal d'entrees dans l'historique (1..=MAX_LEN)
    pub history_len: usize,
    /// Raccourci ouvrant la liste de l'historique
    pub trigger_key: Hotkey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_len: DEFAULT_HISTORY_LEN,
            trigger_key: Hotkey::single(DEFAULT_TRIGGER_KEY),
        }
    }
}

impl Config {
    /// Charge la configuration depuis un fichier. Utilise les defauts pour les valeurs manquantes.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(_) => Self::default(),
        }
    }

    /// Construit une configuration a partir d'un texte.
    pub fn from_text(text: &str) -> Self {
        let mut config = Self::default();
        config.apply_parsed(&parser::parse_config(text));
        config
    }

    /// Applique les valeurs parsees sur les parametres.
    fn apply_parsed(&mut self, parsed: &ParsedConfig) {
        let Some(section) = parsed.get(CONFIG_SECTION) else {
            return;
        };
        if let Some(v) = section.get("history_len") {
            match parser::parse_usize(v) {
                Some(n) => self.history_len = clamp_capacity(n),
                None => warn!(value = %v, "ignoring invalid history_len"),
            }
        }
        if let Some(v) = section.get("trigger_key") {
            match v.parse::<Hotkey>() {
                Ok(hotkey) => self.trigger_key = hotkey,
                Err(e) => warn!(error = %e, "ignoring invalid trigger_key"),
            }
        }
    }

    /// Texte canonique de la configuration.
    pub fn to_text(&self) -> String {
        let mut parsed = ParsedConfig::new();
        let section = parsed.entry(CONFIG_SECTION.to_string()).or_default();
        section.insert("history_len".into(), self.history_len.to_string());
        section.insert("trigger_key".into(), self.trigger_key.to_string());
        parser::serialize_config(&parsed)
    }

    /// Sauvegarde la configuration (cree le dossier parent au besoin).
    pub fn save(&self, path: &Path) -> ClipResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_text())
            .map_err(|e| ClipError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Retourne le chemin du fichier de configuration.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILENAME)
}

/// Retourne le chemin du fichier d'historique.
pub fn history_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(STATE_SUBDIR)
        .join(HISTORY_FILENAME)
}

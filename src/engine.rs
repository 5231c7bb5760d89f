// ImeClip - Orchestrateur du moteur de presse-papiers
// Connecte historique, persistance, configuration et session de selection
//
// # Cycle de vie
// 1. `ClipboardEngine::new()` : chargement de history.dat, puis
//    application de la configuration (clamp, eviction, sauvegarde)
// 2. `process_key()` / notifications `HistorySink` : pilotage par l'hote
// 3. `shutdown()` ou `Drop` : sauvegarde finale si l'historique a change
//
// # Persistance
// Les ajouts ne sont pas ecrits immediatement. Le fichier est reecrit
// apres chaque application de la configuration et a l'arret. Les erreurs
// d'ecriture sont journalisees, l'etat en memoire reste valide.
//
// # Thread Safety
// Le moteur n'est pas partage : l'hote l'appelle depuis un seul thread.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::settings::{self, Config};
use crate::history::ring::HistoryRing;
use crate::input::chord::KeyEvent;
use crate::input::host::{HistorySink, SelectionHost};
use crate::session::machine::{KeyOutcome, SelectionSession};
use crate::storage::file;

/// Moteur d'historique du presse-papiers.
pub struct ClipboardEngine {
    /// Historique et selection primaire
    ring: HistoryRing,
    /// Configuration courante
    config: Config,
    /// Etat de la liste de selection
    session: SelectionSession,
    /// Emplacement de history.dat
    history_path: PathBuf,
}

impl ClipboardEngine {
    /// Cree le moteur, charge l'historique puis applique la configuration.
    ///
    /// Un fichier d'historique illisible ou corrompu donne un historique
    /// vide, l'erreur est seulement journalisee.
    pub fn new(config: Config, history_path: impl Into<PathBuf>) -> Self {
        let history_path = history_path.into();
        let mut ring = HistoryRing::new(config.history_len);

        match file::load_history(&history_path, ring.capacity()) {
            Ok(decoded) => {
                info!(
                    stored = decoded.stored_count,
                    loaded = decoded.entries.len(),
                    "history loaded"
                );
                ring.load_from(decoded.primary, decoded.entries);
            }
            Err(e) => warn!(error = %e, path = %history_path.display(), "history not loaded"),
        }

        let mut engine = Self {
            ring,
            config,
            session: SelectionSession::new(),
            history_path,
        };
        engine.apply_config();
        engine
    }

    /// Cree le moteur avec les chemins par defaut de l'utilisateur.
    pub fn with_default_paths() -> Self {
        let config = Config::load(&settings::config_path());
        Self::new(config, settings::history_path())
    }

    /// Traite une touche transmise par l'hote.
    pub fn process_key<H: SelectionHost>(&mut self, event: &KeyEvent, host: &mut H) -> KeyOutcome {
        if self.session.is_active() {
            return self.session.handle_key(event, host);
        }
        let outcome = self
            .session
            .try_activate(event, &self.config.trigger_key, &self.ring, host);
        if outcome == KeyOutcome::ShowCandidates {
            debug!(candidates = self.session.candidates().len(), "selection opened");
        }
        outcome
    }

    /// Reinitialisation de la saisie par l'hote : ferme la liste.
    pub fn reset_input(&mut self) {
        self.session.reset();
    }

    /// Remplace la configuration, evince au besoin et sauvegarde.
    pub fn reload_config(&mut self, config: Config) {
        self.config = config;
        self.apply_config();
    }

    /// Sauvegarde finale si l'historique a change.
    pub fn shutdown(&mut self) {
        if self.ring.is_dirty() {
            self.persist();
        }
    }

    /// Configuration courante.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Historique courant.
    pub fn history(&self) -> &HistoryRing {
        &self.ring
    }

    /// Retourne true si la liste de selection est ouverte.
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Emplacement du fichier d'historique.
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    fn apply_config(&mut self) {
        let evicted = self.ring.apply_capacity(self.config.history_len);
        if evicted > 0 {
            info!(evicted, capacity = self.ring.capacity(), "history shrunk");
        }
        self.persist();
    }

    /// Ecrit l'historique. Une erreur laisse le dirty flag en place.
    fn persist(&mut self) {
        match file::save_history(&self.history_path, &self.ring) {
            Ok(()) => {
                self.ring.reset_dirty();
                debug!(entries = self.ring.len(), "history saved");
            }
            Err(e) => warn!(error = %e, path = %self.history_path.display(), "history not saved"),
        }
    }
}

impl HistorySink for ClipboardEngine {
    fn notify_primary_changed(&mut self, bytes: &[u8]) {
        if self.ring.set_primary(bytes) {
            debug!(len = bytes.len(), "primary selection updated");
        }
    }

    fn notify_clipboard_changed(&mut self, bytes: &[u8]) {
        if self.ring.push(bytes) {
            debug!(len = bytes.len(), entries = self.ring.len(), "clipboard entry added");
        }
    }
}

impl Drop for ClipboardEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::chord::{Key, NamedKey};
    use crate::session::machine::tests::{trigger_event, FakeHost};
    use crate::storage::file::load_history;
    use tempfile::tempdir;

    fn config(history_len: usize) -> Config {
        Config {
            history_len,
            ..Config::default()
        }
    }

    fn stored(path: &Path) -> Vec<Vec<u8>> {
        load_history(path, 128)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.into_bytes())
            .collect()
    }

    #[test]
    fn test_startup_creates_history_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clipboard").join("history.dat");
        let engine = ClipboardEngine::new(Config::default(), &path);
        assert!(path.exists());
        assert!(engine.history().is_empty());
        assert!(!engine.history().is_dirty());
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");
        {
            let mut engine = ClipboardEngine::new(config(5), &path);
            engine.notify_clipboard_changed(b"first");
            engine.notify_clipboard_changed(b"second");
            engine.notify_primary_changed(b"sel");
        }
        let engine = ClipboardEngine::new(config(5), &path);
        assert_eq!(engine.history().get(0).unwrap().as_bytes(), b"second");
        assert_eq!(engine.history().get(1).unwrap().as_bytes(), b"first");
        assert_eq!(engine.history().primary().as_bytes(), b"sel");
    }

    #[test]
    fn test_startup_with_smaller_capacity_evicts_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");
        {
            let mut engine = ClipboardEngine::new(config(10), &path);
            for item in ["a", "b", "c", "d"] {
                engine.notify_clipboard_changed(item.as_bytes());
            }
        }
        let engine = ClipboardEngine::new(config(2), &path);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(stored(&path), vec![b"d".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_reload_config_shrinks_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");
        let mut engine = ClipboardEngine::new(config(5), &path);
        for item in ["1", "2", "3"] {
            engine.notify_clipboard_changed(item.as_bytes());
        }
        engine.reload_config(config(1));
        assert_eq!(engine.config().history_len, 1);
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.history().is_dirty());
        assert_eq!(stored(&path), vec![b"3".to_vec()]);
    }

    #[test]
    fn test_shutdown_saves_only_when_dirty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");
        let mut engine = ClipboardEngine::new(config(5), &path);
        engine.notify_clipboard_changed(b"kept");
        assert!(engine.history().is_dirty());
        engine.shutdown();
        assert!(!engine.history().is_dirty());
        assert_eq!(stored(&path), vec![b"kept".to_vec()]);
    }

    #[test]
    fn test_corrupt_history_gives_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");
        std::fs::write(&path, [1u8, 0]).unwrap();
        let engine = ClipboardEngine::new(config(5), &path);
        assert!(engine.history().is_empty());
        assert!(engine.history().primary().is_empty());
    }

    #[test]
    fn test_key_flow_through_engine() {
        let dir = tempdir().unwrap();
        let mut engine = ClipboardEngine::new(config(5), dir.path().join("history.dat"));
        let mut host = FakeHost::with_page_size(5);

        let a = KeyEvent::plain(Key::Char('a'));
        assert_eq!(engine.process_key(&a, &mut host), KeyOutcome::NotOwned);
        assert_eq!(engine.process_key(&trigger_event(), &mut host), KeyOutcome::NotOwned);

        engine.notify_clipboard_changed(b"foo");
        engine.notify_primary_changed(b"hello");
        assert_eq!(
            engine.process_key(&trigger_event(), &mut host),
            KeyOutcome::ShowCandidates
        );
        assert!(engine.is_active());
        assert_eq!(host.displayed(), vec!["foo", "hello"]);

        let space = KeyEvent::plain(Key::Named(NamedKey::Space));
        assert_eq!(engine.process_key(&space, &mut host), KeyOutcome::Committed);
        assert_eq!(host.committed, vec![b"foo".to_vec()]);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_reset_input_closes_selection() {
        let dir = tempdir().unwrap();
        let mut engine = ClipboardEngine::new(config(5), dir.path().join("history.dat"));
        let mut host = FakeHost::with_page_size(5);
        engine.notify_clipboard_changed(b"foo");
        engine.process_key(&trigger_event(), &mut host);
        engine.reset_input();
        assert!(!engine.is_active());
        let one = KeyEvent::plain(Key::Char('1'));
        assert_eq!(engine.process_key(&one, &mut host), KeyOutcome::NotOwned);
        assert!(host.committed.is_empty());
    }
}

// ImeClip - Interfaces avec la methode de saisie hote
//
// Le moteur ne connait pas l'hote : il consomme deux capacites.
// - `SelectionHost` : liste de candidats (affichage, pagination, touches
//   de selection), raccourcis de contexte et validation du texte.
// - `HistorySink`   : notifications de changement de selection primaire
//   et de presse-papiers, implementee par le moteur.
//
// Tous les appels ont lieu sur le fil de traitement des evenements de
// l'hote : aucune synchronisation n'est necessaire.

use crate::constants::{DEFAULT_NEXT_PAGE_KEYS, DEFAULT_PREV_PAGE_KEYS};
use crate::input::chord::{Hotkey, KeyEvent};
use crate::session::candidate::Candidate;

/// Raccourcis que l'hote peut redefinir selon le contexte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyContext {
    /// Page precedente de la liste de candidats
    PrevPage,
    /// Page suivante de la liste de candidats
    NextPage,
}

/// Capacites fournies par la methode de saisie hote.
pub trait SelectionHost {
    /// Publie la liste de candidats a afficher.
    fn register_candidates(&mut self, candidates: &[Candidate]);

    /// Vide la liste de candidats.
    fn clear_candidates(&mut self);

    /// Passe a la page precedente. Retourne true si la page a change.
    fn prev_page(&mut self) -> bool;

    /// Passe a la page suivante. Retourne true si la page a change.
    fn next_page(&mut self) -> bool;

    /// Nombre de pages de la liste courante.
    fn page_count(&self) -> usize;

    /// Index absolu du candidat associe a une touche de selection de la
    /// page courante, ou None si l'evenement n'en est pas une.
    fn choose_index(&self, event: &KeyEvent) -> Option<usize>;

    /// Index absolu du premier candidat de la page courante.
    fn first_on_page(&self) -> usize;

    /// Raccourci redefini pour ce contexte, s'il existe.
    fn context_hotkey(&self, _context: HotkeyContext) -> Option<Hotkey> {
        None
    }

    /// Raccourci global de repli pour ce contexte.
    fn global_hotkey(&self, context: HotkeyContext) -> Hotkey {
        match context {
            HotkeyContext::PrevPage => Hotkey::from_chords(&DEFAULT_PREV_PAGE_KEYS),
            HotkeyContext::NextPage => Hotkey::from_chords(&DEFAULT_NEXT_PAGE_KEYS),
        }
    }

    /// Raccourci effectif : celui du contexte, sinon le global.
    fn hotkey(&self, context: HotkeyContext) -> Hotkey {
        self.context_hotkey(context)
            .unwrap_or_else(|| self.global_hotkey(context))
    }

    /// Insere le texte brut choisi dans l'application cible.
    fn commit(&mut self, raw: &[u8]);
}

/// Recepteur des notifications de selection de l'hote.
pub trait HistorySink {
    /// La selection primaire a change.
    fn notify_primary_changed(&mut self, bytes: &[u8]);

    /// Le presse-papiers a change.
    fn notify_clipboard_changed(&mut self, bytes: &[u8]);
}

// ImeClip - Session de selection (machine a etats)
// Inactive <-> Active, pilotee par les touches transmises par l'hote
//
// # Transitions
// - Inactive + raccourci declencheur (et historique ou selection primaire
//   non vide) -> Active : la liste de candidats est construite puis publiee.
// - Active + page precedente/suivante -> Active : `Redisplay` si la page a
//   change, sinon `Handled`.
// - Active + touche de selection ou touche de validation -> Inactive :
//   le texte brut du candidat est valide vers l'hote (`Committed`).
// - Active + reinitialisation de la saisie -> Inactive, sans autre effet.
// - Inactive + autre touche : `NotOwned`, l'hote traite la touche.
//
// # Ordre des candidats
// Entree la plus recente de l'historique, puis selection primaire, puis
// le reste de l'historique (voir `HistoryRing::enumerate`).

use crate::constants::CHOOSE_KEY;
use crate::history::ring::HistoryRing;
use crate::input::chord::{Hotkey, KeyEvent};
use crate::input::host::{HotkeyContext, SelectionHost};
use crate::session::candidate::Candidate;

/// Resultat du traitement d'une touche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// La touche n'appartient pas a la session
    NotOwned,
    /// Touche prise en charge, rien a redessiner
    Handled,
    /// La page de candidats a change : reafficher
    Redisplay,
    /// Session ouverte : afficher la liste de candidats
    ShowCandidates,
    /// Texte valide : l'hote doit reinitialiser la saisie et les candidats
    Committed,
}

/// Etat de la session de selection.
#[derive(Debug, Default)]
pub struct SelectionSession {
    active: bool,
    candidates: Vec<Candidate>,
}

impl SelectionSession {
    /// Cree une session inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retourne true si la liste de l'historique est ouverte.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Candidats publies lors de la derniere activation.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Reinitialisation de la saisie par l'hote.
    pub fn reset(&mut self) {
        self.active = false;
        self.candidates.clear();
    }

    /// Ouvre la session si `event` est le raccourci declencheur et qu'il y a
    /// quelque chose a proposer.
    pub fn try_activate<H: SelectionHost>(
        &mut self,
        event: &KeyEvent,
        trigger: &Hotkey,
        ring: &HistoryRing,
        host: &mut H,
    ) -> KeyOutcome {
        if ring.has_nothing_to_offer() || !trigger.matches(event) {
            return KeyOutcome::NotOwned;
        }

        self.candidates = ring
            .enumerate()
            .into_iter()
            .map(Candidate::from_entry)
            .collect();
        host.clear_candidates();
        host.register_candidates(&self.candidates);
        self.active = true;
        KeyOutcome::ShowCandidates
    }

    /// Traite une touche pendant que la session est active.
    pub fn handle_key<H: SelectionHost>(&mut self, event: &KeyEvent, host: &mut H) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::NotOwned;
        }

        if host.hotkey(HotkeyContext::PrevPage).matches(event) {
            return if host.prev_page() {
                KeyOutcome::Redisplay
            } else {
                KeyOutcome::Handled
            };
        }
        if host.hotkey(HotkeyContext::NextPage).matches(event) {
            return if host.next_page() {
                KeyOutcome::Redisplay
            } else {
                KeyOutcome::Handled
            };
        }
        if let Some(index) = host.choose_index(event) {
            return self.choose(index, host);
        }
        if CHOOSE_KEY.matches(event) && host.page_count() != 0 {
            let index = host.first_on_page();
            return self.choose(index, host);
        }
        KeyOutcome::Handled
    }

    /// Valide le candidat `index` avec son texte brut d'origine.
    fn choose<H: SelectionHost>(&mut self, index: usize, host: &mut H) -> KeyOutcome {
        let Some(candidate) = self.candidates.get(index) else {
            return KeyOutcome::Handled;
        };
        host.commit(&candidate.raw);
        self.reset();
        KeyOutcome::Committed
    }
}

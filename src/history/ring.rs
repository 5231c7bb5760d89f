// ImeClip - Historique borne des selections
// Structure FIFO (plus recente en tete) + emplacement de selection primaire
//
// Ce module implemente le stockage en memoire de l'historique du
// presse-papiers sous forme de VecDeque borne par `capacity`.
//
// # Capacite et rotation
// La capacite est toujours dans [1, MAX_LEN]. Quand elle est atteinte,
// `push` recycle le tampon de l'entree la plus ancienne pour la
// nouvelle entree inseree en tete.
//
// # Selection primaire
// L'emplacement `primary` est distinct de l'historique : il n'est
// jamais evince, seulement ecrase par `set_primary`.
//
// # Deduplication
// `push` ignore une entree identique a celle en tete (repetition
// immediate uniquement, pas de deduplication globale).
//
// # Dirty flag
// Positionne a chaque modification, remis a zero apres une sauvegarde
// reussie via `reset_dirty`.

use std::collections::VecDeque;

use crate::constants::MAX_LEN;
use crate::history::entry::Entry;

/// Ramene une capacite demandee dans [1, MAX_LEN].
pub fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(1, MAX_LEN)
}

/// Historique du presse-papiers et selection primaire.
#[derive(Debug)]
pub struct HistoryRing {
    entries: VecDeque<Entry>,
    primary: Entry,
    capacity: usize,
    dirty: bool,
}

impl HistoryRing {
    /// Cree un historique vide avec la capacite donnee (clampee).
    pub fn new(capacity: usize) -> Self {
        let capacity = clamp_capacity(capacity);
        Self {
            entries: VecDeque::with_capacity(capacity),
            primary: Entry::default(),
            capacity,
            dirty: false,
        }
    }

    /// Remplace la selection primaire. Sans effet si `bytes` est vide.
    pub fn set_primary(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }
        self.primary.overwrite(bytes);
        self.dirty = true;
        true
    }

    /// Ajoute une copie de `bytes` en tete de l'historique.
    /// Retourne false si l'entree est vide ou identique a la plus recente.
    pub fn push(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }
        if let Some(first) = self.entries.front() {
            if first.content_equals(bytes) {
                return false;
            }
        }

        if self.entries.len() < self.capacity {
            self.entries.push_front(Entry::new(bytes));
        } else {
            // Plein : on recycle le tampon de la plus ancienne
            let mut slot = self.entries.pop_back().unwrap_or_default();
            slot.overwrite(bytes);
            self.entries.push_front(slot);
        }
        self.dirty = true;
        true
    }

    /// Change la capacite (clampee) et evince les entrees les plus anciennes
    /// en exces. Retourne le nombre d'entrees supprimees.
    pub fn apply_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = clamp_capacity(capacity);
        let excess = self.entries.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.entries.truncate(self.capacity);
            self.dirty = true;
        }
        excess
    }

    /// Copie des entrees dans l'ordre de la liste de candidats :
    /// plus recente de l'historique, selection primaire, puis le reste.
    pub fn enumerate(&self) -> Vec<Entry> {
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        let mut rest = self.entries.iter();
        if let Some(first) = rest.next() {
            out.push(first.clone());
        }
        if !self.primary.is_empty() {
            out.push(self.primary.clone());
        }
        out.extend(rest.cloned());
        out
    }

    /// Retourne l'entree a l'index donne (0 = plus recente).
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Selection primaire courante (vide si jamais definie).
    pub fn primary(&self) -> &Entry {
        &self.primary
    }

    /// Retourne un iterateur sur l'historique (plus recente en premier).
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Nombre d'entrees dans l'historique.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Retourne true si l'historique est vide.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retourne true s'il n'y a ni historique ni selection primaire.
    pub fn has_nothing_to_offer(&self) -> bool {
        self.entries.is_empty() && self.primary.is_empty()
    }

    /// Capacite maximale courante.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retourne true si l'historique a ete modifie depuis le dernier reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marque l'historique comme non modifie.
    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Reconstruit l'etat a partir de donnees chargees depuis le disque.
    /// Les entrees vides sont ignorees et l'exces au-dela de la capacite coupe.
    pub fn load_from(&mut self, primary: Entry, entries: Vec<Entry>) {
        self.primary = primary;
        self.entries = entries
            .into_iter()
            .filter(|e| !e.is_empty())
            .take(self.capacity)
            .collect();
        self.dirty = false;
    }
}

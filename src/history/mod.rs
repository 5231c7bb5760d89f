// ImeClip - Module history
// Gestion de l'historique du presse-papiers en memoire
//
// Ce module est independant de l'hote (pas d'appel a la methode de saisie).
//
// # Sous-modules
// - `entry`    : tampon d'octets possede representant une selection
// - `ring`     : historique borne (VecDeque) avec deduplication immediate,
//                eviction des plus anciennes et emplacement de selection primaire
// - `truncate` : apercu sur une ligne, tronque au milieu sans casser l'UTF-8
//
// # Architecture
// L'historique possede seul tous les tampons. Les appelants recoivent des
// copies (`enumerate`) ou des references qui ne survivent pas a une mutation.

/// Tampon d'octets d'une selection.
pub mod entry;
/// Historique borne avec selection primaire.
pub mod ring;
/// Apercu d'affichage des selections.
pub mod truncate;

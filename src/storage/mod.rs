// ImeClip - Module storage
// Persistance de l'historique sur disque
//
// # Sous-modules
// - `format` : serialisation/deserialisation binaire (table des longueurs
//              suivie des contenus, entiers u32 little-endian)
// - `file`   : lecture/ecriture de history.dat avec ecriture atomique
//              (temp+rename)
//
// # Format du fichier history.dat
// ```text
// [N u32][PRIMARY_LEN u32][LEN u32 x N][PRIMARY][ENTRY_0]...[ENTRY_N-1]
// ```
//
// # Compatibilite
// Le format n'a ni numero de version ni somme de controle : un changement
// de format doit utiliser un autre nom de fichier, sinon les anciens
// fichiers seront mal relus sans erreur.

/// Lecture/ecriture du fichier history.dat.
pub mod file;
/// Serialisation/deserialisation binaire de l'historique.
pub mod format;

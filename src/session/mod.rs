// ImeClip - Module session
// Liste de candidats et machine a etats de selection
//
// # Sous-modules
// - `candidate` : paire (forme affichee, texte brut)
// - `machine`   : session Inactive/Active, activation par raccourci,
//                 pagination et validation deleguees a l'hote
//
// La session ne garde que des copies des entrees : l'historique peut
// etre modifie pendant qu'elle est ouverte.

/// Candidat affiche a l'utilisateur.
pub mod candidate;
/// Machine a etats de la selection.
pub mod machine;

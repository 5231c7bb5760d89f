// ImeClip - Module input
// Evenements clavier et interfaces avec la methode de saisie hote
//
// # Sous-modules
// - `chord` : modificateurs (bitflags), touches, combinaisons et raccourcis
//             avec parsing/affichage textuel (`ctrl+semicolon`, `minus up`)
// - `host`  : traits `SelectionHost` (fourni par l'hote) et `HistorySink`
//             (implemente par le moteur)

/// Touches, combinaisons et raccourcis.
pub mod chord;
/// Capacites echangees avec l'hote.
pub mod host;

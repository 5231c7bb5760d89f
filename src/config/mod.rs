// ImeClip - Module config
// Lecture/ecriture de la configuration du moteur
//
// # Sous-modules
// - `parser`   : parseur de fichiers cle-valeur avec sections et
//                commentaires, serialisation deterministe
// - `settings` : structure Config (taille de l'historique, raccourci
//                declencheur) avec defauts et clamp des plages
//
// # Utilisation
// ```rust,ignore
// let config = Config::load(&config_path());
// // Les valeurs manquantes utilisent les defauts
// ```

/// Parseur de fichiers de configuration au format cle-valeur avec sections.
pub mod parser;
/// Structure de configuration et valeurs par defaut.
pub mod settings;

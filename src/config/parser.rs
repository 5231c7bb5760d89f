// ImeClip - Parseur format cle-valeur
// Format simple : sections [nom], cle = valeur, commentaires #
//
// # Format supporte
// - Sections : `[section_name]`
// - Cle-valeur : `key = value`
// - Guillemets : `key = "value with spaces"`
// - Commentaires : `# ligne entiere` ou `key = value # inline`
// - Valeurs sans section sont affectees a la section "general"
//
// # Serialisation
// `serialize_config` produit un texte deterministe (sections et cles
// triees). Les valeurs avec espaces ou `#` sont mises entre guillemets.

use std::collections::BTreeMap;

/// Resultat du parsing : sections contenant des paires cle-valeur.
pub type ParsedConfig = BTreeMap<String, BTreeMap<String, String>>;

/// Parse un texte de configuration au format cle-valeur avec sections.
pub fn parse_config(text: &str) -> ParsedConfig {
    let mut config = ParsedConfig::new();
    let mut current_section = String::from("general");

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
            continue;
        }

        if let Some(eq_pos) = trimmed.find('=') {
            let key = trimmed[..eq_pos].trim().to_string();
            let value = strip_quotes(&strip_inline_comment(trimmed[eq_pos + 1..].trim()));
            config
                .entry(current_section.clone())
                .or_default()
                .insert(key, value);
        }
    }

    config
}

/// Supprime les commentaires inline (apres #) en respectant les guillemets.
fn strip_inline_comment(s: &str) -> String {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return s[..i].trim().to_string(),
            _ => {}
        }
    }
    s.to_string()
}

/// Supprime les guillemets autour d'une valeur.
fn strip_quotes(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Serialise une configuration en texte.
pub fn serialize_config(config: &ParsedConfig) -> String {
    let mut out = String::new();
    for (section, pairs) in config {
        out.push_str(&format!("[{}]\n", section));
        for (key, value) in pairs {
            if value.contains(' ') || value.contains('#') {
                out.push_str(&format!("{} = \"{}\"\n", key, value));
            } else {
                out.push_str(&format!("{} = {}\n", key, value));
            }
        }
        out.push('\n');
    }
    out
}

/// Parse une valeur comme usize.
pub fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

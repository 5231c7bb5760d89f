// ImeClip - Troncature des selections pour l'affichage
// Produit une chaine d'une ligne a partir d'une entree brute
//
// # Algorithme
// 1. Supprime les blancs ASCII en tete et en queue (espace, tab,
//    backspace, LF, FF, VT, CR). Si rien ne reste : chaine vide.
// 2. Moins de `TRUNCATE_LIMIT` octets : copie exacte.
// 3. Sinon : tete de `TRUNCATE_HALF` octets + separateur + queue de
//    `TRUNCATE_HALF` octets. Les coupures sont deplacees sur un debut
//    de caractere UTF-8 (vers l'avant pour la tete, vers l'arriere pour
//    la queue) sans jamais se croiser.
// 4. Chaque blanc restant est remplace par un espace.
//
// Les blancs sont tous ASCII : les remplacer octet par octet ne peut
// pas casser une sequence UTF-8 multi-octets.
//
// # Robustesse
// Ne echoue jamais. Un contenu UTF-8 invalide est converti avec
// remplacement (U+FFFD) au lieu d'etre rejete.

use crate::constants::{TRUNCATE_HALF, TRUNCATE_LIMIT, TRUNCATE_SEPARATOR};

/// Blancs et caracteres de controle traites comme separateurs.
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x08 | b'\n' | 0x0c | 0x0b | b'\r')
}

/// Octet ASCII ou premier octet d'une sequence multi-octets.
fn is_utf8_start(b: u8) -> bool {
    b & 0x80 == 0 || b & 0x40 != 0
}

/// Retire les blancs en tete et en queue.
fn strip_blank(raw: &[u8]) -> &[u8] {
    let begin = raw.iter().position(|&b| !is_blank(b)).unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|&b| !is_blank(b))
        .map_or(begin, |i| i + 1);
    &raw[begin..end.max(begin)]
}

/// Calcule la fin de la tete et le debut de la queue.
fn cut_points(text: &[u8]) -> (usize, usize) {
    let mut head_end = TRUNCATE_HALF;
    let mut tail_begin = text.len() - TRUNCATE_HALF;
    while head_end < tail_begin && !is_utf8_start(text[head_end]) {
        head_end += 1;
    }
    while head_end < tail_begin && !is_utf8_start(text[tail_begin]) {
        tail_begin -= 1;
    }
    (head_end, tail_begin)
}

/// Produit la forme affichable d'une selection.
///
/// La chaine retournee ne sert qu'a l'affichage : le texte valide par
/// l'utilisateur est toujours l'entree brute d'origine.
pub fn truncate_selection(raw: &[u8]) -> String {
    let text = strip_blank(raw);
    if text.is_empty() {
        return String::new();
    }

    let mut out = if text.len() < TRUNCATE_LIMIT {
        text.to_vec()
    } else {
        let (head_end, tail_begin) = cut_points(text);
        let mut buf =
            Vec::with_capacity(head_end + TRUNCATE_SEPARATOR.len() + text.len() - tail_begin);
        buf.extend_from_slice(&text[..head_end]);
        buf.extend_from_slice(TRUNCATE_SEPARATOR.as_bytes());
        buf.extend_from_slice(&text[tail_begin..]);
        buf
    };

    for b in out.iter_mut() {
        if is_blank(*b) {
            *b = b' ';
        }
    }

    match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_is_trimmed_copy() {
        assert_eq!(truncate_selection(b"  hello world \r\n"), "hello world");
        assert_eq!(truncate_selection(b"plain"), "plain");
    }

    #[test]
    fn test_blank_only_is_empty() {
        assert_eq!(truncate_selection(b" \t\n\r\x0b\x0c\x08 "), "");
        assert_eq!(truncate_selection(b""), "");
    }

    #[test]
    fn test_inner_blanks_become_spaces() {
        assert_eq!(truncate_selection(b"a\tb\nc\rd"), "a b c d");
    }

    #[test]
    fn test_just_below_limit_is_not_truncated() {
        let raw = vec![b'x'; TRUNCATE_LIMIT - 1];
        let out = truncate_selection(&raw);
        assert_eq!(out.len(), TRUNCATE_LIMIT - 1);
        assert!(!out.contains('\u{2026}'));
    }

    #[test]
    fn test_at_limit_is_truncated() {
        let raw = vec![b'x'; TRUNCATE_LIMIT];
        let out = truncate_selection(&raw);
        assert_eq!(out.matches(TRUNCATE_SEPARATOR).count(), 1);
        assert_eq!(out.len(), 2 * TRUNCATE_HALF + TRUNCATE_SEPARATOR.len());
    }

    #[test]
    fn test_long_ascii_summary() {
        let raw = vec![b'A'; 300];
        let out = truncate_selection(&raw);
        assert_eq!(out.len(), 60 + 60 + TRUNCATE_SEPARATOR.len());
        assert_eq!(out.matches('\u{2026}').count(), 1);
        assert!(out.starts_with(&"A".repeat(60)));
        assert!(out.ends_with(&"A".repeat(60)));
    }

    #[test]
    fn test_never_splits_multibyte() {
        // "a" puis 50 x U+20AC (3 octets) : la coupure brute a 60 tombe
        // au milieu d'un caractere.
        let mut raw = b"a".to_vec();
        raw.extend("\u{20ac}".repeat(50).as_bytes());
        let out = truncate_selection(&raw);
        assert!(!out.contains('\u{fffd}'));
        let (head, tail) = out.split_once(TRUNCATE_SEPARATOR).unwrap();
        assert_eq!(head, format!("a{}", "\u{20ac}".repeat(20)));
        assert_eq!(tail, "\u{20ac}".repeat(20));
    }

    #[test]
    fn test_long_with_newlines_is_single_line() {
        let mut raw = Vec::new();
        for i in 0..40 {
            raw.extend(format!("line {i}\n").as_bytes());
        }
        let out = truncate_selection(&raw);
        assert!(!out.contains('\n'));
        assert_eq!(out.matches(TRUNCATE_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_invalid_utf8_degrades() {
        let mut raw = vec![0xffu8; 10];
        raw.extend(b"tail");
        let out = truncate_selection(&raw);
        assert!(out.ends_with("tail"));
        assert!(out.contains('\u{fffd}'));
    }

    #[test]
    fn test_cut_points_do_not_cross() {
        // Que des octets de continuation entre les coupures
        let mut raw = vec![b'x'; TRUNCATE_HALF];
        raw.extend(vec![0x80u8; 10]);
        raw.extend(vec![b'y'; TRUNCATE_HALF]);
        let (head, tail) = cut_points(&raw);
        assert!(head <= tail);
        assert_eq!(head, tail);
    }
}

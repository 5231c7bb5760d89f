// ImeClip - Serialisation/deserialisation binaire de l'historique
// Format compact : table des longueurs puis contenus
//
// # Format du fichier
// ```text
// [count]        u32 LE  nombre N d'entrees d'historique
// [primary_len]  u32 LE  taille de la selection primaire
// [len_0..N)     u32 LE  taille de chaque entree (plus recente en premier)
// [primary]      primary_len octets
// [entry_0]      len_0 octets
// ...
// [entry_N-1]    len_N-1 octets
// ```
//
// # Lecture
// Si N depasse la capacite, seules les `capacity` premieres longueurs sont
// conservees, mais la zone des contenus commence toujours apres la table
// complete : on se positionne a (N + 2) * 4 avant de lire les contenus.
// Les entrees en exces en fin de fichier ne sont simplement pas lues.
//
// # Robustesse
// Pas de version ni de somme de controle. Une lecture au-dela de la fin
// du fichier tronque silencieusement l'entree (ou la longueur devient 0).
// Seul un entete absent est signale comme erreur.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::{ClipError, ClipResult};
use crate::history::entry::Entry;

/// Taille d'un champ de longueur.
const LEN_SIZE: u64 = 4;

/// Contenu decode d'un fichier d'historique.
#[derive(Debug, Default)]
pub struct DecodedHistory {
    /// Selection primaire (vide si absente)
    pub primary: Entry,
    /// Historique, plus recente en premier
    pub entries: Vec<Entry>,
    /// Nombre d'entrees annoncees par le fichier
    pub stored_count: usize,
}

/// Serialise la selection primaire et l'historique.
pub fn encode_history<'a, I>(primary: &[u8], entries: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
    I::IntoIter: Clone,
{
    let entries = entries.into_iter();
    let count = entries.clone().count();
    let body: usize = entries.clone().map(<[u8]>::len).sum();

    let mut buf = Vec::with_capacity((count + 2) * LEN_SIZE as usize + primary.len() + body);
    buf.extend_from_slice(&(count as u32).to_le_bytes());
    buf.extend_from_slice(&(primary.len() as u32).to_le_bytes());
    for e in entries.clone() {
        buf.extend_from_slice(&(e.len() as u32).to_le_bytes());
    }
    buf.extend_from_slice(primary);
    for e in entries {
        buf.extend_from_slice(e);
    }
    buf
}

/// Lit un u32 LE. Retourne None si la fin du flux est atteinte.
fn read_u32<R: Read>(reader: &mut R) -> io::Result<Option<u32>> {
    let mut raw = [0u8; 4];
    match reader.read_exact(&mut raw) {
        Ok(()) => Ok(Some(u32::from_le_bytes(raw))),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Lit au plus `len` octets (moins si le flux se termine avant).
fn read_up_to<R: Read>(reader: &mut R, len: u32) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(u64::from(len)).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Deserialise un historique en ne gardant que `capacity` entrees.
pub fn decode_history<R: Read + Seek>(reader: &mut R, capacity: usize) -> ClipResult<DecodedHistory> {
    let stored = read_u32(reader)?
        .ok_or_else(|| ClipError::Format("missing entry count".into()))?;
    let primary_len = read_u32(reader)?
        .ok_or_else(|| ClipError::Format("missing primary length".into()))?;

    let count = (stored as usize).min(capacity);
    let mut lengths = Vec::with_capacity(count);
    for _ in 0..count {
        lengths.push(read_u32(reader)?.unwrap_or(0));
    }

    // Les contenus suivent la table complete, y compris les longueurs ignorees
    reader.seek(SeekFrom::Start((u64::from(stored) + 2) * LEN_SIZE))?;

    let primary = Entry::from_vec(read_up_to(reader, primary_len)?);
    let mut entries = Vec::with_capacity(count);
    for len in lengths {
        entries.push(Entry::from_vec(read_up_to(reader, len)?));
    }

    Ok(DecodedHistory {
        primary,
        entries,
        stored_count: stored as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(data: Vec<u8>, capacity: usize) -> DecodedHistory {
        decode_history(&mut Cursor::new(data), capacity).unwrap()
    }

    fn as_vecs(d: &DecodedHistory) -> Vec<Vec<u8>> {
        d.entries.iter().map(|e| e.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_layout() {
        let data = encode_history(b"pp", [&b"abc"[..], &b"d"[..]]);
        let mut expected = Vec::new();
        expected.extend_from_slice(&2u32.to_le_bytes());
        expected.extend_from_slice(&2u32.to_le_bytes());
        expected.extend_from_slice(&3u32.to_le_bytes());
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(b"ppabcd");
        assert_eq!(data, expected);
    }

    #[test]
    fn test_roundtrip() {
        let data = encode_history(b"primary", [&b"newest"[..], &b"older"[..], &b"oldest"[..]]);
        let d = decode(data, 10);
        assert_eq!(d.primary.as_bytes(), b"primary");
        assert_eq!(as_vecs(&d), vec![b"newest".to_vec(), b"older".to_vec(), b"oldest".to_vec()]);
        assert_eq!(d.stored_count, 3);
    }

    #[test]
    fn test_excess_entries_skipped_by_offset() {
        let data = encode_history(b"p", [&b"one"[..], &b"two"[..], &b"three"[..], &b"four"[..]]);
        let d = decode(data, 2);
        assert_eq!(d.primary.as_bytes(), b"p");
        assert_eq!(as_vecs(&d), vec![b"one".to_vec(), b"two".to_vec()]);
        assert_eq!(d.stored_count, 4);
    }

    #[test]
    fn test_empty_primary() {
        let data = encode_history(b"", [&b"x"[..]]);
        let d = decode(data, 5);
        assert!(d.primary.is_empty());
        assert_eq!(as_vecs(&d), vec![b"x".to_vec()]);
    }

    #[test]
    fn test_truncated_content_is_shortened() {
        let mut data = encode_history(b"p", [&b"hello"[..], &b"world"[..]]);
        data.truncate(data.len() - 3);
        let d = decode(data, 5);
        assert_eq!(as_vecs(&d), vec![b"hello".to_vec(), b"wo".to_vec()]);
    }

    #[test]
    fn test_truncated_length_table() {
        let mut data = Vec::new();
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        let d = decode(data, 5);
        assert_eq!(d.entries.len(), 3);
        assert!(d.entries.iter().all(Entry::is_empty));
    }

    #[test]
    fn test_missing_header_is_error() {
        let result = decode_history(&mut Cursor::new(vec![1u8, 0]), 5);
        assert!(matches!(result, Err(ClipError::Format(_))));
        let result = decode_history(&mut Cursor::new(Vec::new()), 5);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_history() {
        let data = encode_history(b"", std::iter::empty::<&[u8]>());
        assert_eq!(data.len(), 8);
        let d = decode(data, 5);
        assert!(d.entries.is_empty());
        assert!(d.primary.is_empty());
    }
}

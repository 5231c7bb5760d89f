// ImeClip - Lecture/ecriture du fichier history.dat
// Sauvegarde et chargement de l'historique sur disque
//
// # Ecriture
// Ecriture atomique : le fichier est ecrit a cote (extension .tmp)
// puis renomme, le dossier parent est cree au besoin.
//
// # Lecture
// Un fichier absent donne un historique vide. Le contenu est decode par
// `format::decode_history` qui tolere les fichiers tronques.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::ClipResult;
use crate::history::ring::HistoryRing;
use crate::storage::format::{self, DecodedHistory};

/// Sauvegarde l'historique et la selection primaire sur disque.
pub fn save_history(path: &Path, ring: &HistoryRing) -> ClipResult<()> {
    let data = format::encode_history(
        ring.primary().as_bytes(),
        ring.iter().map(|e| e.as_bytes()),
    );

    let tmp_path = path.with_extension("tmp");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&tmp_path, &data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Charge l'historique depuis le disque en gardant au plus `capacity` entrees.
pub fn load_history(path: &Path, capacity: usize) -> ClipResult<DecodedHistory> {
    if !path.exists() {
        return Ok(DecodedHistory::default());
    }
    let mut reader = BufReader::new(File::open(path)?);
    format::decode_history(&mut reader, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn filled_ring(capacity: usize, items: &[&str], primary: &str) -> HistoryRing {
        let mut ring = HistoryRing::new(capacity);
        for item in items.iter().rev() {
            ring.push(item.as_bytes());
        }
        ring.set_primary(primary.as_bytes());
        ring
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clipboard").join("history.dat");

        let ring = filled_ring(5, &["newest", "middle", "oldest"], "sel");
        save_history(&path, &ring).unwrap();
        assert!(!path.with_extension("tmp").exists());

        let loaded = load_history(&path, 5).unwrap();
        let mut fresh = HistoryRing::new(5);
        fresh.load_from(loaded.primary, loaded.entries);
        assert_eq!(fresh.enumerate(), ring.enumerate());
        assert_eq!(fresh.primary(), ring.primary());
    }

    #[test]
    fn test_load_with_smaller_capacity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");

        let ring = filled_ring(5, &["a", "b", "c", "d"], "p");
        save_history(&path, &ring).unwrap();

        let loaded = load_history(&path, 2).unwrap();
        assert_eq!(loaded.stored_count, 4);
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[0].as_bytes(), b"a");
        assert_eq!(loaded.entries[1].as_bytes(), b"b");
        assert_eq!(loaded.primary.as_bytes(), b"p");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let loaded = load_history(&dir.path().join("nope.dat"), 5).unwrap();
        assert!(loaded.entries.is_empty());
        assert!(loaded.primary.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.dat");

        save_history(&path, &filled_ring(5, &["one", "two"], "p")).unwrap();
        save_history(&path, &filled_ring(5, &["three"], "")).unwrap();

        let loaded = load_history(&path, 5).unwrap();
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].as_bytes(), b"three");
        assert!(loaded.primary.is_empty());
    }
}

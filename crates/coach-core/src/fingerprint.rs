//! Stable content fingerprints for deterministic selection.

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a text.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Reduce a key to a stable index in `0..len`.
///
/// Used to pick one representative from a list (for example, a theologian
/// for a tradition) so that the same inputs always select the same entry.
/// Returns `None` for an empty list.
pub fn stable_index(key: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    Some((u64::from_be_bytes(prefix) % len as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_stable() {
        let first = fingerprint("John 3:16|Lutheran");
        let second = fingerprint("John 3:16|Lutheran");
        let different = fingerprint("John 3:16|Catholic");

        assert_eq!(first, second);
        assert_ne!(first, different);
    }

    #[test]
    fn test_stable_index_deterministic() {
        let first = stable_index("Romans 8:28|Orthodox", 5).unwrap();
        let second = stable_index("Romans 8:28|Orthodox", 5).unwrap();

        assert_eq!(first, second);
        assert!(first < 5);
    }

    #[test]
    fn test_stable_index_empty_list() {
        assert!(stable_index("anything", 0).is_none());
    }
}

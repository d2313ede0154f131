// Loading a vocabulary from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use ts_session::Vocabulary;

#[derive(Debug, Deserialize)]
struct VocabFile {
    tokens: Vec<VocabEntry>,
}

#[derive(Debug, Deserialize)]
struct VocabEntry {
    token: String,
    score: f64,
}

/// Read and validate a vocabulary file.
pub fn load(path: &Path) -> Result<Vocabulary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid vocabulary file {}", path.display()))
}

fn parse(raw: &str) -> Result<Vocabulary> {
    let file: VocabFile = serde_json::from_str(raw)?;
    let vocab = Vocabulary::from_pairs(file.tokens.into_iter().map(|e| (e.token, e.score)))?;
    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"tokens": [{{"token": "a", "score": -1.0}}, {{"token": "b", "score": -2.5}}]}}"#
        )
        .unwrap();
        let v = load(f.path()).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.score_of("b"), Some(-2.5));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read vocabulary file"));
    }

    #[test]
    fn test_empty_token_list_rejected() {
        let err = parse(r#"{"tokens": []}"#).unwrap_err();
        assert!(err.to_string().contains("at least one token"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse(r#"{"tokens": [{"token": "a"}]}"#).is_err());
    }
}

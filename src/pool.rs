use crate::error::ConfigError;
use crate::models::Category;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_FRIENDS: &str = include_str!("../data/friends.json");
const BUILTIN_COUPLES: &str = include_str!("../data/couples.json");

#[derive(Debug, Deserialize)]
struct PoolFile {
    questions: Vec<String>,
}

/// Read-only question lists, one per category.
#[derive(Debug, Clone, Default)]
pub struct QuestionPools {
    friends: Vec<String>,
    couples: Vec<String>,
}

impl QuestionPools {
    pub fn new(friends: Vec<String>, couples: Vec<String>) -> Self {
        Self {
            friends: keep_non_blank(friends),
            couples: keep_non_blank(couples),
        }
    }

    /// Pools bundled into the binary from `data/`.
    pub fn builtin() -> Result<Self, ConfigError> {
        let friends = parse_pool(BUILTIN_FRIENDS).map_err(|source| ConfigError::PoolParse {
            path: PathBuf::from("data/friends.json"),
            source,
        })?;
        let couples = parse_pool(BUILTIN_COUPLES).map_err(|source| ConfigError::PoolParse {
            path: PathBuf::from("data/couples.json"),
            source,
        })?;
        Ok(Self::new(friends, couples))
    }

    /// Loads `friends.json` and `couples.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, ConfigError> {
        let friends = load_pool_file(&pool_path(dir, Category::Friends))?;
        let couples = load_pool_file(&pool_path(dir, Category::Couples))?;
        let pools = Self::new(friends, couples);
        tracing::info!(
            dir = %dir.display(),
            friends = pools.friends.len(),
            couples = pools.couples.len(),
            "loaded question pools"
        );
        Ok(pools)
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Friends => &self.friends,
            Category::Couples => &self.couples,
        }
    }
}

pub fn pool_path(dir: &Path, category: Category) -> PathBuf {
    dir.join(format!("{}.json", category.as_str()))
}

pub fn parse_pool(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let file: PoolFile = serde_json::from_str(content)?;
    Ok(file.questions)
}

fn load_pool_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::PoolIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pool(&content).map_err(|source| ConfigError::PoolParse {
        path: path.to_path_buf(),
        source,
    })
}

fn keep_non_blank(questions: Vec<String>) -> Vec<String> {
    questions
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_pools_are_populated() {
        let pools = QuestionPools::builtin().unwrap();
        assert!(!pools.get(Category::Friends).is_empty());
        assert!(!pools.get(Category::Couples).is_empty());
        for c in Category::ALL {
            assert!(pools.get(c).iter().all(|q| !q.trim().is_empty()));
        }
    }

    #[test]
    fn test_parse_pool_keeps_order() {
        let questions = parse_pool(r#"{"questions": ["A", "B", "C"]}"#).unwrap();
        assert_eq!(questions, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_pool_rejects_wrong_shape() {
        assert!(parse_pool(r#"["A", "B"]"#).is_err());
        assert!(parse_pool(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_new_drops_blank_entries() {
        let pools = QuestionPools::new(
            vec!["  A ".to_string(), "".to_string(), "   ".to_string()],
            vec![],
        );
        assert_eq!(pools.get(Category::Friends), &["A".to_string()]);
        assert!(pools.get(Category::Couples).is_empty());
    }

    #[test]
    fn test_load_dir_reads_both_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("friends.json"),
            r#"{"questions": ["Siapa?", "Kapan?"]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("couples.json"), r#"{"questions": []}"#).unwrap();

        let pools = QuestionPools::load_dir(dir.path()).unwrap();
        assert_eq!(pools.get(Category::Friends).len(), 2);
        assert!(pools.get(Category::Couples).is_empty());
    }

    #[test]
    fn test_load_dir_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("friends.json"), r#"{"questions": ["A"]}"#).unwrap();

        match QuestionPools::load_dir(dir.path()) {
            Err(ConfigError::PoolIo { path, .. }) => {
                assert!(path.ends_with("couples.json"));
            }
            other => panic!("expected PoolIo error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_dir_malformed_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("friends.json"), "not json").unwrap();
        fs::write(dir.path().join("couples.json"), r#"{"questions": []}"#).unwrap();

        assert!(matches!(
            QuestionPools::load_dir(dir.path()),
            Err(ConfigError::PoolParse { .. })
        ));
    }
}

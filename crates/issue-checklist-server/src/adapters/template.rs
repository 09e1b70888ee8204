//! File-backed checklist template

use async_trait::async_trait;
use std::path::PathBuf;

use issue_checklist::{ChecklistError, ChecklistSource, ChecklistTemplate};

/// Reads the template from disk on every `load`
pub struct FileChecklistSource {
    path: PathBuf,
}

impl FileChecklistSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ChecklistSource for FileChecklistSource {
    async fn load(&self) -> Result<ChecklistTemplate, ChecklistError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ChecklistError::Template(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        ChecklistTemplate::parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "## Checklist\n- [ ] Step 1").unwrap();

        let template = FileChecklistSource::new(file.path()).load().await.unwrap();
        assert_eq!(template.first_line, "## Checklist");
        assert_eq!(template.full_content, "## Checklist\n- [ ] Step 1");
    }

    #[tokio::test]
    async fn test_template_is_reread() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checklist.md");
        let source = FileChecklistSource::new(&path);

        std::fs::write(&path, "## Checklist v1\n- [ ] A").unwrap();
        assert_eq!(source.load().await.unwrap().first_line, "## Checklist v1");

        std::fs::write(&path, "## Checklist v2\n- [ ] B").unwrap();
        assert_eq!(source.load().await.unwrap().first_line, "## Checklist v2");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileChecklistSource::new(dir.path().join("nope.md"));

        match source.load().await {
            Err(ChecklistError::Template(msg)) => assert!(msg.contains("nope.md")),
            other => panic!("Expected Template error, got {:?}", other),
        }
    }
}

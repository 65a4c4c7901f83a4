use crate::error::{DocflowError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// A stage either fully writes its document or writes nothing.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Append text to a file, creating it if it doesn't exist.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    f.write_all(text.as_bytes())?;
    Ok(())
}

/// Read a required input document, trimmed of surrounding whitespace.
/// A missing file is a fatal, user-facing error.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(DocflowError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file_and_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/docs/prd.md");
        atomic_write(&path, b"# PRD").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# PRD");
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn append_text_accumulates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.md");
        append_text(&path, "### A\n").unwrap();
        append_text(&path, "### B\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "### A\n### B\n");
    }

    #[test]
    fn read_input_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("idea.txt");
        std::fs::write(&path, "  a product idea \n\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "a product idea");
    }

    #[test]
    fn read_input_missing_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = read_input(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, DocflowError::InputNotFound(_)));
    }
}

use crate::infrastructure::error::InfrastructureError;
use std::path::{Component, Path, PathBuf};

/// Outcome of a best-effort file removal.
///
/// A file that disappeared between listing and removal is an already-satisfied
/// postcondition, not an error, and is reported as such instead of being
/// silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Deleted,
    AlreadyAbsent,
}

/// Remove a file if it exists, succeed trivially otherwise.
///
/// Single attempt, no retry. Any failure other than the file already being
/// gone is surfaced to the caller.
pub async fn remove_if_exists(path: &Path) -> Result<RemoveOutcome, InfrastructureError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(RemoveOutcome::Deleted),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RemoveOutcome::AlreadyAbsent),
        Err(e) => Err(InfrastructureError::Io(e)),
    }
}

/// List the names present in a directory (flat, no recursion).
pub async fn list_file_names(dir: &Path) -> Result<Vec<String>, InfrastructureError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Lexically normalize a path: drop `.` segments, resolve `..` against the
/// preceding segment, collapse separators. No filesystem access, no symlink
/// resolution.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_in_normal = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                // `..` au-dessus de la racine reste la racine
                let at_root = matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                );
                if ends_in_normal {
                    normalized.pop();
                } else if !at_root {
                    normalized.push(Component::ParentDir);
                }
            }
            component => normalized.push(component),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_remove_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("stale.js");
        fs::write(&file_path, "old")?;

        let outcome = remove_if_exists(&file_path).await?;

        assert_eq!(outcome, RemoveOutcome::Deleted);
        assert!(!file_path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_already_absent() -> Result<()> {
        let dir = tempdir()?;

        let outcome = remove_if_exists(&dir.path().join("gone.js")).await?;

        assert_eq!(outcome, RemoveOutcome::AlreadyAbsent);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_file_names() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.js"), "")?;
        fs::write(dir.path().join("b.css"), "")?;

        let mut names = list_file_names(dir.path()).await?;
        names.sort();

        assert_eq!(names, vec!["a.js", "b.css"]);
        Ok(())
    }

    #[test]
    fn test_normalize_path_resolves_segments() {
        assert_eq!(normalize_path(Path::new("./theme/")), PathBuf::from("theme"));
        assert_eq!(
            normalize_path(Path::new("theme/sub/../assets")),
            PathBuf::from("theme/assets")
        );
        assert_eq!(normalize_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }
}

use std::fs;
use std::path::Path;

use crate::error::TagError;

/// One cohort member: the image filename as listed plus the stable
/// identifier shared with its label map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortEntry {
    /// Image filename as listed, e.g. `48432_b67ec6cd63_b.jpg`. Used as the
    /// manifest row key.
    pub image_name: String,
    /// Filename with its trailing extension stripped; names the label
    /// resource `{stem}.png`.
    pub stem: String,
}

/// List the image directory and derive the cohort.
///
/// Entries come back in the directory listing's native order, which is
/// platform-dependent; the manifest preserves whatever order this returns.
/// Subdirectories and non-UTF-8 names are skipped.
pub fn discover_cohort(image_dir: &Path) -> Result<Vec<CohortEntry>, TagError> {
    if !image_dir.is_dir() {
        return Err(TagError::MissingCohortDir {
            path: image_dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(image_dir).map_err(|source| TagError::Io {
        path: image_dir.to_path_buf(),
        source,
    })?;

    let mut cohort = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TagError::Io {
            path: image_dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| TagError::Io {
            path: entry.path(),
            source,
        })?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        // Strip the extension-like suffix; dotfiles keep their full name.
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => name.to_string(),
        };
        cohort.push(CohortEntry {
            image_name: name.to_string(),
            stem,
        });
    }
    Ok(cohort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("imgs");
        match discover_cohort(&absent) {
            Err(TagError::MissingCohortDir { path }) => assert_eq!(path, absent),
            other => panic!("expected MissingCohortDir, got {:?}", other),
        }
    }

    #[test]
    fn stems_drop_only_the_final_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["48432_b67ec6cd63_b.jpg", "photo.v2.jpeg", "noext"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let mut cohort = discover_cohort(dir.path()).unwrap();
        cohort.sort_by(|a, b| a.image_name.cmp(&b.image_name));

        let pairs: Vec<(&str, &str)> = cohort
            .iter()
            .map(|e| (e.image_name.as_str(), e.stem.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("48432_b67ec6cd63_b.jpg", "48432_b67ec6cd63_b"),
                ("noext", "noext"),
                ("photo.v2.jpeg", "photo.v2"),
            ]
        );
    }

    #[test]
    fn empty_directory_gives_empty_cohort() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_cohort(dir.path()).unwrap().is_empty());
    }
}

use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A constgen.toml file on disk and its parsed manifest.
#[derive(Debug)]
pub struct ConstgenToml {
    path: PathBuf,
    manifest: Manifest,
}

impl ConstgenToml {
    /// Open and parse a constgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory all configured paths are relative to.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_and_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("constgen.toml");
        fs::write(&path, "").unwrap();

        let file = ConstgenToml::open(&path).unwrap();
        assert_eq!(file.root(), temp.path());
        assert_eq!(file.manifest(), &Manifest::default());
    }

    #[test]
    fn test_relative_path_root_is_cwd() {
        let file = ConstgenToml {
            path: PathBuf::from("constgen.toml"),
            manifest: Manifest::default(),
        };
        assert_eq!(file.root(), Path::new("."));
    }
}

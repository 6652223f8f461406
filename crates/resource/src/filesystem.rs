use gurumi_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Reads resources from files below a root directory.
///
/// Keys are relative paths. Absolute keys and keys that climb out of the root
/// with `..` are refused with [`ResourceError::OutsideRoot`].
#[derive(Debug, Clone)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// A provider rooted at `file`'s directory plus the key that names it.
    ///
    /// Used for a single configured file such as the logo.
    pub fn for_file<P: AsRef<Path>>(file: P) -> Option<(Self, String)> {
        let file = file.as_ref();
        let key = file.file_name()?.to_str()?.to_string();
        let root = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Some((Self::new(root), key))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(key);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(ResourceError::OutsideRoot(key.to_string()));
        }
        let full = self.root.join(relative);

        // Symlinks may still point elsewhere.
        if let (Ok(canonical), Ok(root)) = (full.canonicalize(), self.root.canonicalize())
            && !canonical.starts_with(&root)
        {
            return Err(ResourceError::OutsideRoot(key.to_string()));
        }
        Ok(full)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, key: &str) -> Result<SharedResourceData, ResourceError> {
        let path = self.resolve(key)?;
        log::debug!("Loading resource {}", path.display());
        std::fs::read(&path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(key.to_string())
            } else {
                ResourceError::LoadFailed {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, key: &str) -> bool {
        self.resolve(key).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

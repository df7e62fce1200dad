// Asset loading functionality

use super::AssetError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and reading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        let bytes = std::fs::read(&path).map_err(AssetError::from)?;
        Ok(bytes)
    }

    /// Load a UTF-8 text asset (tile maps)
    pub fn load_text(&self, name: &str) -> Result<String> {
        let bytes = self.load_bytes(name)?;
        String::from_utf8(bytes)
            .map_err(|e| AssetError::LoadError(format!("{} is not UTF-8: {}", name, e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("maps/dirtmap.json");

        assert_eq!(path, PathBuf::from("/game/assets/maps/dirtmap.json"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let loader = AssetLoader::new("/nonexistent/asset/root");

        let err = loader.load_bytes("playersheet.png").unwrap_err();
        let asset_err = err.downcast_ref::<AssetError>().unwrap();
        assert!(matches!(asset_err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_unreadable_asset_is_io_error() {
        let dir = std::env::temp_dir().join(format!("bq-loader-dir-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("maps")).unwrap();

        // A directory exists but cannot be read as a file
        let loader = AssetLoader::new(&dir);
        let err = loader.load_bytes("maps").unwrap_err();
        let is_io = matches!(err.downcast_ref::<AssetError>(), Some(AssetError::Io(_)));
        assert!(is_io, "unexpected error: {:#}", err);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_text_roundtrip() {
        let dir = std::env::temp_dir().join(format!("bq-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("note.txt"), "hello").unwrap();

        let loader = AssetLoader::new(&dir);
        assert_eq!(loader.load_text("note.txt").unwrap(), "hello");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

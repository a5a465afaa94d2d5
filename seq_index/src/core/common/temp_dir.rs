// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref, path::Path};

use miette::IntoDiagnostic;
use rand::{Rng, rngs::ThreadRng};

#[derive(Debug)]
pub struct TempDir {
    pub inner: std::path::PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> std::path::PathBuf {
        self.inner.join(path)
    }
}

/// Generates a name like `seq-index-042917` for a scratch folder.
#[must_use]
pub fn generate_random_folder_name() -> String {
    let mut rng: ThreadRng = rand::rng();
    let number: u32 = rng.random_range(0..1_000_000);
    format!("seq-index-{number:06}")
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The temp directory cannot be created due to insufficient permissions
/// - The file system is full
/// - I/O errors occur during directory creation
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(generate_random_folder_name());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = std::path::PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.inner.clone();
        assert!(path.exists());
        std::fs::write(dir.join("scratch.txt"), "hello").unwrap();

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_random_folder_name() {
        let name = generate_random_folder_name();
        assert!(name.starts_with("seq-index-"));
        assert_eq!(name.len(), "seq-index-".len() + 6);
    }
}

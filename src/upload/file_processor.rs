use crate::upload::types::UploadSource;
use ignore::Walk;
use log::warn;
use std::path::{Path, PathBuf};

/// Turns picked or dropped paths into upload sources.
#[derive(Clone, Default)]
pub struct FileProcessor;

impl FileProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Files are taken as-is; directories are walked, honoring `.gitignore`.
    pub fn collect(&self, paths: impl IntoIterator<Item = PathBuf>) -> Vec<UploadSource> {
        let mut sources = Vec::new();
        for path in paths {
            if path.is_dir() {
                sources.extend(self.walk_folder(&path));
            } else if let Some(source) = self.source_for(&path) {
                sources.push(source);
            }
        }
        sources
    }

    pub fn walk_folder(&self, folder: &Path) -> Vec<UploadSource> {
        let mut sources = Vec::new();

        for entry in Walk::new(folder) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let relative = path.strip_prefix(folder).unwrap_or(path);
                    if path.is_file() && !Self::is_ignored(relative) {
                        if let Some(source) = self.source_for(path) {
                            sources.push(source);
                        }
                    }
                }
                Err(e) => warn!("Error walking directory: {}", e),
            }
        }

        sources
    }

    pub fn count_files(&self, folder: &Path) -> usize {
        Walk::new(folder)
            .filter_map(Result::ok)
            .filter(|entry| {
                let relative = entry.path().strip_prefix(folder).unwrap_or(entry.path());
                entry.path().is_file() && !Self::is_ignored(relative)
            })
            .count()
    }

    fn source_for(&self, path: &Path) -> Option<UploadSource> {
        match UploadSource::from_path(path) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                None
            }
        }
    }

    fn is_ignored(path: &Path) -> bool {
        let ignored_dirs = ["node_modules", ".cache", ".idea", ".fleet", "target", "dist"];
        if path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|name| ignored_dirs.contains(&name))
        }) {
            return true;
        }

        let ignored_files = [".DS_Store", "Thumbs.db", "desktop.ini"];
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| ignored_files.contains(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn folders_are_walked_and_junk_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("photo.png"), vec![0u8; 64]).unwrap();
        fs::write(root.path().join("Thumbs.db"), b"x").unwrap();
        fs::create_dir(root.path().join("node_modules")).unwrap();
        fs::write(root.path().join("node_modules").join("dep.js"), b"x").unwrap();
        fs::create_dir(root.path().join("docs")).unwrap();
        fs::write(root.path().join("docs").join("notes.txt"), b"hello").unwrap();

        let processor = FileProcessor::new();
        let mut sources = processor.walk_folder(root.path());
        sources.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<_> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["notes.txt", "photo.png"]);
        assert_eq!(sources[1].size, 64);
        assert_eq!(sources[1].mime_type, "image/png");
        assert_eq!(processor.count_files(root.path()), 2);
    }

    #[test]
    fn collect_mixes_files_and_folders() {
        let root = TempDir::new().unwrap();
        let single = root.path().join("single.pdf");
        fs::write(&single, b"%PDF").unwrap();
        let folder = root.path().join("folder");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("a.mp3"), b"ID3").unwrap();

        let sources = FileProcessor::new().collect(vec![single, folder, root.path().join("gone")]);
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().any(|s| s.mime_type == "application/pdf"));
        assert!(sources.iter().any(|s| s.mime_type == "audio/mpeg"));
    }
}

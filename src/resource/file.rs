use std::path::{Path, PathBuf};

use super::Resource;

/// Resource backed by a file on disk.
///
/// The file is opened and read in full on every [`Resource::read`] call. Contents must be valid
/// UTF-8; anything else surfaces as an [`std::io::ErrorKind::InvalidData`] error, which the
/// loader reports like any other I/O failure.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    display: String,
}

impl FileResource {
    /// Create a new file-backed resource
    ///
    /// ## Arguments
    /// * 'path' - Location of the EditorConfig file on disk
    pub fn new(path: impl Into<PathBuf>) -> FileResource {
        let path = path.into();
        let display = path.display().to_string();
        FileResource { path, display }
    }

    /// The location of this resource on disk
    pub fn file_path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn path(&self) -> &str {
        &self.display
    }

    fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_resource_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[*.py]\nindent_size = 4\n").unwrap();

        let resource = FileResource::new(file.path());

        assert_eq!(resource.path(), file.path().display().to_string());
        assert_eq!(resource.read().unwrap(), "[*.py]\nindent_size = 4\n");
    }

    #[test]
    fn test_missing_file() {
        let resource = FileResource::new("/definitely/not/here/.editorconfig");

        let error = resource.read().unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x5B, 0x2A, 0x5D, 0x0A, 0xFF, 0xFE]).unwrap();

        let resource = FileResource::new(file.path());

        let error = resource.read().unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
    }
}

//! Input validation: confirm the user-supplied path is a readable regular file.
//!
//! Deliberately shallow: no PDF magic-byte sniffing and no structural checks.
//! Anything beyond "the file exists and can be opened" is pdfium's job, and
//! its open error becomes the error document verbatim.

use crate::error::Pdf2OcrError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` refers to an existing regular file we can open.
///
/// Directories, dangling symlinks, and nonexistent paths all report
/// `File not found: <path>` — the distinction does not matter to callers, who
/// only need to know the path cannot be scanned.
pub fn resolve_input(path: &Path) -> Result<PathBuf, Pdf2OcrError> {
    if !path.is_file() {
        return Err(Pdf2OcrError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(_) => {
            debug!("Resolved input PDF: {}", path.display());
            Ok(path.to_path_buf())
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Pdf2OcrError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(_) => Err(Pdf2OcrError::FileNotFound {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_path_is_file_not_found() {
        let err = resolve_input(Path::new("/tmp/does-not-exist.pdf")).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /tmp/does-not-exist.pdf");
    }

    #[test]
    fn directory_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_input(dir.path()).unwrap_err();
        assert!(matches!(err, Pdf2OcrError::FileNotFound { .. }));
    }

    #[test]
    fn existing_file_resolves() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = resolve_input(file.path()).unwrap();
        assert_eq!(resolved, file.path());
    }
}

use std::io::Write;
use std::path::Path;
use tacky_core::TackyResult;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically
    /// A crash mid-write leaves the previous content in place
    pub fn write_atomic(path: &Path, data: &[u8]) -> TackyResult<()> {
        // Temp file in the same directory so the rename stays on one filesystem
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;

        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, `None` when it does not exist
    pub fn read_optional(path: &Path) -> TackyResult<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");
        let data = b"Hello, World!";

        AtomicWriter::write_atomic(&file_path, data).unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).unwrap();
        assert_eq!(read_data.as_deref(), Some(&data[..]));
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).unwrap();
        assert_eq!(read_data.as_deref(), Some(&b"Second"[..]));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let read_data = AtomicWriter::read_optional(&dir.path().join("missing")).unwrap();
        assert!(read_data.is_none());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        AtomicWriter::write_atomic(&dir.path().join("a.json"), b"{}").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}

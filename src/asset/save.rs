//! Save destinations for downloaded asset bytes.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncSeek, AsyncSeekExt, AsyncWrite, AsyncWriteExt};

/// An open, writable and seekable byte sink (e.g. `tokio::fs::File`, `std::io::Cursor<Vec<u8>>`).
pub trait WritableSink: AsyncWrite + AsyncSeek + Unpin + Send {}

impl<T: AsyncWrite + AsyncSeek + Unpin + Send + ?Sized> WritableSink for T {}

/// Where [`crate::Asset::save`] writes to.
pub enum SaveTarget<'a> {
    /// Caller-owned sink; left open after the write.
    Sink(&'a mut dyn WritableSink),
    /// File created (or truncated) and closed by the save.
    Path(PathBuf),
}

impl<'a> From<&'a Path> for SaveTarget<'a> {
    fn from(path: &'a Path) -> Self {
        SaveTarget::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for SaveTarget<'_> {
    fn from(path: PathBuf) -> Self {
        SaveTarget::Path(path)
    }
}

impl<'a, W: WritableSink> From<&'a mut W> for SaveTarget<'a> {
    fn from(sink: &'a mut W) -> Self {
        SaveTarget::Sink(sink)
    }
}

/// Writes `data` to `target`, returning the number of bytes written.
pub(crate) async fn write_to(
    target: SaveTarget<'_>,
    data: &[u8],
    seek_begin: bool,
) -> std::io::Result<usize> {
    match target {
        SaveTarget::Sink(sink) => {
            sink.write_all(data).await?;
            sink.flush().await?;
            if seek_begin {
                sink.seek(SeekFrom::Start(0)).await?;
            }
            Ok(data.len())
        }
        SaveTarget::Path(path) => {
            // Handle is dropped (closed) on every return path out of this arm.
            let mut file = tokio::fs::File::create(&path).await?;
            file.write_all(data).await?;
            file.flush().await?;
            Ok(data.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn sink_write_and_rewind() {
        let mut cursor = Cursor::new(Vec::new());
        let n = write_to(SaveTarget::from(&mut cursor), b"abcdef", true)
            .await
            .unwrap();
        assert_eq!(n, 6);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.get_ref().as_slice(), b"abcdef");
    }

    #[tokio::test]
    async fn sink_write_without_rewind() {
        let mut cursor = Cursor::new(Vec::new());
        write_to(SaveTarget::Sink(&mut cursor), b"xyz", false)
            .await
            .unwrap();
        assert_eq!(cursor.position(), 3);
    }

    #[tokio::test]
    async fn path_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"much longer old content").unwrap();
        let n = write_to(SaveTarget::from(path.as_path()), b"new", true)
            .await
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn path_in_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");
        let err = write_to(SaveTarget::from(path.clone()), b"x", true)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(!path.exists());
    }
}

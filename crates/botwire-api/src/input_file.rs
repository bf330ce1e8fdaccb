//! Local content to be uploaded with a request.

use botwire_core::error::BotError;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Size of the chunks an upload is streamed in.
pub const CHUNK_SIZE: usize = 512 * 1024;

#[derive(Debug, Clone)]
enum Source {
    Path(PathBuf),
    Memory(Arc<Vec<u8>>),
}

/// A file payload for upload: name, content type, size, and a byte stream
/// that can be restarted from the beginning for every request.
#[derive(Debug, Clone)]
pub struct InputFile {
    name: String,
    content_type: String,
    size: u64,
    source: Source,
}

impl InputFile {
    /// Reference a file on disk. Only its metadata is read here; the content
    /// is streamed when a request is sent.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, BotError> {
        let path = path.as_ref();
        let meta = tokio::fs::metadata(path).await?;
        if !meta.is_file() {
            return Err(BotError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self {
            content_type: guess_content_type(&name).to_string(),
            name,
            size: meta.len(),
            source: Source::Path(path.to_path_buf()),
        })
    }

    /// Wrap in-memory content under the given file name.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            content_type: guess_content_type(&name).to_string(),
            size: data.len() as u64,
            name,
            source: Source::Memory(Arc::new(data)),
        }
    }

    /// Override the content type derived from the file name.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Lazily read the content in chunks of at most [`CHUNK_SIZE`] bytes.
    ///
    /// Each call starts again from the first byte.
    pub fn chunks(&self) -> BoxStream<'static, io::Result<Vec<u8>>> {
        match self.source {
            Source::Memory(ref data) => {
                let data = Arc::clone(data);
                stream::unfold(0usize, move |pos| {
                    let data = Arc::clone(&data);
                    async move {
                        if pos >= data.len() {
                            return None;
                        }
                        let end = (pos + CHUNK_SIZE).min(data.len());
                        Some((Ok(data[pos..end].to_vec()), end))
                    }
                })
                .boxed()
            }
            Source::Path(ref path) => read_chunks(path.clone()),
        }
    }
}

enum ReadState {
    Closed(PathBuf),
    Open(tokio::fs::File),
    Done,
}

fn read_chunks(path: PathBuf) -> BoxStream<'static, io::Result<Vec<u8>>> {
    stream::unfold(ReadState::Closed(path), |state| async move {
        let mut file = match state {
            ReadState::Closed(path) => match tokio::fs::File::open(&path).await {
                Ok(f) => f,
                Err(e) => return Some((Err(e), ReadState::Done)),
            },
            ReadState::Open(f) => f,
            ReadState::Done => return None,
        };
        let mut buf = vec![0u8; CHUNK_SIZE];
        match file.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((Ok(buf), ReadState::Open(file)))
            }
            Err(e) => Some((Err(e), ReadState::Done)),
        }
    })
    .boxed()
}

/// Content type for a file name, by extension.
fn guess_content_type(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "json" => "application/json",
        "txt" => "text/plain",
        "pem" | "crt" => "application/x-pem-file",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(file: &InputFile) -> Vec<Vec<u8>> {
        file.chunks()
            .map(|c| c.unwrap())
            .collect::<Vec<_>>()
            .await
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(guess_content_type("cat.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("song.mp3"), "audio/mpeg");
        assert_eq!(guess_content_type("cert.pem"), "application/x-pem-file");
        assert_eq!(guess_content_type("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_bytes_chunks_and_restarts() {
        let data: Vec<u8> = (0..(CHUNK_SIZE + 10)).map(|i| (i % 251) as u8).collect();
        let file = InputFile::from_bytes("blob.bin", data.clone());
        assert_eq!(file.size(), data.len() as u64);
        assert_eq!(file.content_type(), "application/octet-stream");

        let first = collect(&file).await;
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].len(), CHUNK_SIZE);
        assert_eq!(first[1].len(), 10);
        assert_eq!(first.concat(), data);

        // A second pass yields the same bytes again.
        assert_eq!(collect(&file).await.concat(), data);
    }

    #[tokio::test]
    async fn test_open_reads_metadata_and_streams_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let file = InputFile::open(&path).await.unwrap();
        assert_eq!(file.name(), "photo.png");
        assert_eq!(file.content_type(), "image/png");
        assert_eq!(file.size(), 16);
        assert_eq!(collect(&file).await.concat(), b"not really a png");
    }

    #[tokio::test]
    async fn test_open_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(InputFile::open(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_file_yields_no_chunks() {
        let file = InputFile::from_bytes("empty.txt", Vec::new());
        assert!(collect(&file).await.is_empty());
    }
}

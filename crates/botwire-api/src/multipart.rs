//! Streaming `multipart/form-data` encoder.
//!
//! Parts are produced lazily: file content is pulled chunk by chunk from the
//! [`InputFile`] while the body is being sent, never buffered whole.

use crate::input_file::InputFile;
use crate::params::{ParamValue, Params};
use futures_util::future::ready;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::io;

/// Part delimiter.
///
/// Fixed and unescaped: safe only because every field comes from API
/// parameters built by the caller. Do not reuse for untrusted input.
pub const BOUNDARY: &str = "----------botwire-form-boundary-Zq7hR2xK";

const CRLF: &str = "\r\n";

/// A multipart body ready to be streamed.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    fields: Vec<(String, ParamValue)>,
}

impl MultipartBody {
    pub fn new(params: Params) -> Self {
        Self {
            fields: params.into_fields(),
        }
    }

    /// Value for the `Content-Type` request header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    /// Exact body length in bytes, computed without reading any file.
    pub fn content_length(&self) -> u64 {
        let parts: u64 = self
            .fields
            .iter()
            .map(|(name, value)| {
                let header = part_header(name, value).len() as u64;
                let content = match value {
                    ParamValue::Text(t) => t.len() as u64,
                    ParamValue::File(f) => f.size(),
                };
                header + content + CRLF.len() as u64
            })
            .sum();
        parts + closing_delimiter().len() as u64
    }

    /// Consume the body into a lazy stream of byte chunks.
    pub fn into_stream(self) -> BoxStream<'static, io::Result<Vec<u8>>> {
        stream::iter(self.fields)
            .flat_map(|(name, value)| {
                let header = part_header(&name, &value);
                match value {
                    ParamValue::Text(text) => {
                        let part = format!("{header}{text}{CRLF}").into_bytes();
                        stream::once(ready(Ok(part))).boxed()
                    }
                    ParamValue::File(file) => file_part(header, &file),
                }
            })
            .chain(stream::once(ready(Ok(closing_delimiter().into_bytes()))))
            .boxed()
    }
}

fn file_part(header: String, file: &InputFile) -> BoxStream<'static, io::Result<Vec<u8>>> {
    stream::once(ready(Ok(header.into_bytes())))
        .chain(file.chunks())
        .chain(stream::once(ready(Ok(CRLF.as_bytes().to_vec()))))
        .boxed()
}

/// Delimiter line plus part headers, up to and including the blank line.
fn part_header(name: &str, value: &ParamValue) -> String {
    match value {
        ParamValue::Text(_) => format!(
            "--{BOUNDARY}{CRLF}Content-Disposition: form-data; name=\"{name}\"{CRLF}{CRLF}"
        ),
        ParamValue::File(file) => format!(
            "--{BOUNDARY}{CRLF}\
             Content-Disposition: form-data; name=\"{name}\"; filename=\"{}\"{CRLF}\
             Content-Type: {}{CRLF}\
             Content-Length: {}{CRLF}{CRLF}",
            file.name(),
            file.content_type(),
            file.size(),
        ),
    }
}

fn closing_delimiter() -> String {
    format!("--{BOUNDARY}--{CRLF}")
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn encode(body: MultipartBody) -> String {
        let chunks: Vec<Vec<u8>> = body
            .into_stream()
            .map(|c| c.unwrap())
            .collect()
            .await;
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[tokio::test]
    async fn test_scalar_and_file_parts() {
        let params = Params::new().with("chat_id", 42i64).with(
            "photo",
            InputFile::from_bytes("cat.jpg", b"JPEGDATA".to_vec()),
        );
        let body = MultipartBody::new(params);
        let expected_len = body.content_length();
        let text = encode(body).await;

        let expected = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"chat_id\"\r\n\
             \r\n\
             42\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"photo\"; filename=\"cat.jpg\"\r\n\
             Content-Type: image/jpeg\r\n\
             Content-Length: 8\r\n\
             \r\n\
             JPEGDATA\r\n\
             --{b}--\r\n",
            b = BOUNDARY
        );
        assert_eq!(text, expected);
        assert_eq!(expected_len, text.len() as u64);
    }

    #[tokio::test]
    async fn test_file_content_is_streamed_in_chunks() {
        let data = vec![b'x'; crate::input_file::CHUNK_SIZE * 2 + 1];
        let params = Params::new().with("document", InputFile::from_bytes("big.bin", data));
        let chunks: Vec<Vec<u8>> = MultipartBody::new(params)
            .into_stream()
            .map(|c| c.unwrap())
            .collect()
            .await;
        // header, three content chunks, trailing CRLF, closing delimiter
        assert_eq!(chunks.len(), 6);
        assert_eq!(chunks[1].len(), crate::input_file::CHUNK_SIZE);
        assert_eq!(chunks[3].len(), 1);
    }

    #[tokio::test]
    async fn test_empty_body_is_only_the_closing_delimiter() {
        let body = MultipartBody::new(Params::new());
        assert_eq!(body.content_length(), closing_delimiter().len() as u64);
        assert_eq!(encode(body).await, format!("--{BOUNDARY}--\r\n"));
    }

    #[test]
    fn test_content_type_names_boundary() {
        let body = MultipartBody::new(Params::new());
        assert_eq!(
            body.content_type(),
            format!("multipart/form-data; boundary={BOUNDARY}")
        );
    }
}

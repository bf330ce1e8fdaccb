//! Request parameters.
//!
//! Values are normalized once, when a parameter is added: primitives become
//! their plain string form, structured values (keyboards, lists, inline
//! results) become JSON text, and file payloads are kept as-is. The GET and
//! multipart POST paths therefore see identical values.

use crate::input_file::InputFile;
use botwire_core::{error::BotError, types::ChatId};
use serde::Serialize;

/// A single normalized parameter value.
#[derive(Debug, Clone)]
pub enum ParamValue {
    Text(String),
    File(InputFile),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Text(if v { "true" } else { "false" }.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&ChatId> for ParamValue {
    fn from(v: &ChatId) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<ChatId> for ParamValue {
    fn from(v: ChatId) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<InputFile> for ParamValue {
    fn from(v: InputFile) -> Self {
        Self::File(v)
    }
}

/// A media argument: either something the platform already knows (a file id
/// or an HTTP URL), or local content to upload.
///
/// Remote media is sent with GET; an upload switches the call to a multipart
/// POST.
#[derive(Debug, Clone)]
pub enum Media {
    Remote(String),
    Upload(InputFile),
}

impl Media {
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }
}

impl From<&str> for Media {
    fn from(v: &str) -> Self {
        Self::Remote(v.to_string())
    }
}

impl From<String> for Media {
    fn from(v: String) -> Self {
        Self::Remote(v)
    }
}

impl From<InputFile> for Media {
    fn from(v: InputFile) -> Self {
        Self::Upload(v)
    }
}

impl From<Media> for ParamValue {
    fn from(v: Media) -> Self {
        match v {
            Media::Remote(id) => Self::Text(id),
            Media::Upload(file) => Self::File(file),
        }
    }
}

/// Ordered request parameters. Omitted options are simply never added.
#[derive(Debug, Clone, Default)]
pub struct Params {
    fields: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Add an optional parameter; `None` leaves it out of the request.
    pub fn with_opt<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Add a structured parameter as JSON text.
    pub fn with_json<T: Serialize + ?Sized>(self, name: &str, value: &T) -> Result<Self, BotError> {
        let text = serde_json::to_string(value)?;
        Ok(self.with(name, text))
    }

    /// Add an optional structured parameter as JSON text.
    pub fn with_json_opt<T: Serialize>(self, name: &str, value: Option<&T>) -> Result<Self, BotError> {
        match value {
            Some(v) => self.with_json(name, v),
            None => Ok(self),
        }
    }

    /// Whether any parameter is a file payload.
    pub fn has_file(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, v)| matches!(v, ParamValue::File(_)))
    }

    /// Text value of a parameter, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(k, v)| match v {
            ParamValue::Text(t) if k == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text parameters as query pairs. File payloads are skipped; callers
    /// route file-carrying requests through multipart instead.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| match v {
                ParamValue::Text(t) => Some((k.clone(), t.clone())),
                ParamValue::File(_) => None,
            })
            .collect()
    }

    pub fn into_fields(self) -> Vec<(String, ParamValue)> {
        self.fields
    }
}

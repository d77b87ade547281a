//! Orchestration response body parsing.
//!
//! Decodes the JSON body returned by the orchestration service into the
//! ordered list of trace entries the extractor consumes.

use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Response body of the orchestration service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Raw trace entries, in execution order
    pub responses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ResponseBody {
    /// Wrap bare entries without session metadata
    pub fn from_entries(responses: Vec<String>) -> Self {
        Self {
            responses,
            ..Default::default()
        }
    }
}

/// Parse a response body from a JSON value
///
/// **Public** - main entry point for body parsing
///
/// Accepts either the full body object (`{"responses": [...]}`) or a bare
/// array of strings.
///
/// # Errors
/// * `ParseError::JsonError` - `responses` is not an array of strings
/// * `ParseError::InvalidFormat` - Value is neither an object nor an array,
///   or the object has no `responses` field
pub fn parse_response_body(raw: &serde_json::Value) -> Result<ResponseBody, ParseError> {
    match raw {
        serde_json::Value::Object(obj) => {
            if !obj.contains_key("responses") {
                return Err(ParseError::InvalidFormat(
                    "Response body has no 'responses' field".to_string(),
                ));
            }
            let body: ResponseBody = serde_json::from_value(raw.clone())?;
            debug!(
                "Parsed response body: {} entries, session {:?}",
                body.responses.len(),
                body.session_id
            );
            Ok(body)
        }

        serde_json::Value::Array(_) => {
            debug!("Response is a bare array, treating it as the entry list");
            let responses: Vec<String> = serde_json::from_value(raw.clone())?;
            Ok(ResponseBody::from_entries(responses))
        }

        _ => Err(ParseError::InvalidFormat(
            "Response must be a JSON object or array".to_string(),
        )),
    }
}

/// Parse a response body from JSON text
pub fn parse_response_str(text: &str) -> Result<ResponseBody, ParseError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    let body = parse_response_body(&raw)?;

    if body.responses.is_empty() {
        warn!("Response body contains no trace entries");
    }

    Ok(body)
}

/// Read a response body from any reader
pub fn read_response_from(reader: impl Read) -> Result<ResponseBody, ParseError> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;
    parse_response_str(&text)
}

/// Read a response body from a JSON file
///
/// # Errors
/// * `ParseError::ReadFailed` - File cannot be opened or read
/// * `ParseError::JsonError` / `ParseError::InvalidFormat` - Malformed body
pub fn read_response_body(input_path: impl AsRef<Path>) -> Result<ResponseBody, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading response body from: {}", input_path.display());

    let file = File::open(input_path)?;
    read_response_from(file)
}

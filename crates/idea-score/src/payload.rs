//! Transport of a [`ScoreResult`] between the submission and display steps.
//!
//! A result travels as JSON percent-encoded with the `encodeURIComponent`
//! character set and carried in the `data` query parameter of a result link.

use crate::scoring::ScoreResult;
use serde::Serialize;

pub const RESULT_PATH: &str = "/result";
pub const DATA_PARAM: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("no result data supplied")]
    Missing,
    #[error("invalid percent-encoding at byte {position}")]
    InvalidEncoding { position: usize },
    #[error("result data is not valid UTF-8")]
    InvalidUtf8,
    #[error("result data is not a valid score result: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("unable to serialize score result: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub fn encode(result: &ScoreResult) -> Result<String, PayloadError> {
    let json = serde_json::to_string(result).map_err(PayloadError::Serialize)?;
    Ok(percent_encode(&json))
}

pub fn decode(data: &str) -> Result<ScoreResult, PayloadError> {
    let data = data.trim();
    if data.is_empty() {
        return Err(PayloadError::Missing);
    }
    let json = percent_decode(data)?;
    serde_json::from_str(&json).map_err(PayloadError::Malformed)
}

/// `<base>/result?data=<payload>`
pub fn result_link(base_url: &str, result: &ScoreResult) -> Result<String, PayloadError> {
    let payload = encode(result)?;
    Ok(format!(
        "{}{RESULT_PATH}?{DATA_PARAM}={payload}",
        base_url.trim_end_matches('/')
    ))
}

/// Raw `data` value from a link or query string; bare payloads pass through.
pub fn data_param(input: &str) -> Option<&str> {
    let input = input.trim();
    // Bare JSON may carry `?` inside its strings.
    if input.starts_with('%') || input.starts_with('{') {
        return Some(input);
    }
    let query = match input.split_once('?') {
        Some((_, query)) => query,
        None => input,
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == DATA_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Decodes a link, query string, or bare payload.
pub fn decode_link(input: &str) -> Result<ScoreResult, PayloadError> {
    data_param(input).ok_or(PayloadError::Missing).and_then(decode)
}

/// Text offered when a result is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    pub fn for_result(result: &ScoreResult, url: impl Into<String>) -> Self {
        Self {
            title: format!("My SaaS Idea Score: {}/100", result.score),
            text: format!(
                "I scored {}/100 on my SaaS idea evaluation. Check out the detailed breakdown!",
                result.score
            ),
            url: url.into(),
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        if is_unreserved(byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push('%');
            encoded.push(char::from(HEX[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    encoded
}

fn percent_decode(input: &str) -> Result<String, PayloadError> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut position = 0;

    while position < bytes.len() {
        match bytes[position] {
            b'%' => {
                let byte = bytes
                    .get(position + 1..position + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or(PayloadError::InvalidEncoding { position })?;
                decoded.push(byte);
                position += 3;
            }
            byte => {
                decoded.push(byte);
                position += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| PayloadError::InvalidUtf8)
}

//! Response-text parsing helpers.

use coach_core::GatewayError;
use serde::de::DeserializeOwned;

/// Strip a surrounding markdown code fence, if present.
///
/// Structured responses sometimes arrive wrapped as ```` ```json ... ``` ````
/// even when JSON output was requested; the payload inside the fence is the
/// actual value.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let body = match body.split_once('\n') {
        Some((first_line, remainder))
            if first_line
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric()) =>
        {
            remainder
        }
        _ => body,
    };
    body.trim()
}

/// Parse a structured response into a typed payload, stripping any code
/// fence first.
pub fn parse_json_payload<T: DeserializeOwned>(raw: &str) -> Result<T, GatewayError> {
    let payload = strip_code_fences(raw);
    serde_json::from_str(payload)
        .map_err(|e| GatewayError::Malformed(format!("JSON payload did not match: {}", e)))
}

/// Require a non-empty free-text response.
pub fn non_empty_text(raw: String) -> Result<String, GatewayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::EmptyResponse("blank text response".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parse chapter text into ordered verse lines.
///
/// Zero usable lines, or a lone refusal line, is a failure condition even
/// though no transport error occurred.
pub fn parse_verse_lines(raw: &str) -> Result<Vec<String>, GatewayError> {
    let verses: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if verses.is_empty() {
        return Err(GatewayError::EmptyResponse("no verses returned".to_string()));
    }
    if verses.len() == 1 && verses[0].to_lowercase().contains("i cannot fulfill this request") {
        return Err(GatewayError::EmptyResponse("model declined chapter text".to_string()));
    }
    Ok(verses)
}

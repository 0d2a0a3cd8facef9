use any_ascii::any_ascii;
use tracing::{debug, warn};

use crate::config::NormalizerConfig;
use crate::error::StageError;

/// Entities left encoded by lyric sites, decoded in this order
const ENTITIES: [(&str, &str); 2] = [("&amp;", "&"), ("&quot;", "\"")];

/// Stage 0: decode, fold to ASCII, and cut site noise
///
/// This stage:
/// 1. Decodes the raw bytes as UTF-8 and transliterates to ASCII
/// 2. Keeps only the text before the first copyright marker
/// 3. Removes site attribution strings
/// 4. Decodes the small set of entities sites leave behind
///
/// Invalid UTF-8 yields `StageError::EncodingFailure` and no partial text.
pub fn normalize_encoding(raw: &[u8], config: &NormalizerConfig) -> Result<String, StageError> {
    let decoded = std::str::from_utf8(raw).map_err(|e| {
        warn!("Raw lyrics are not valid UTF-8: {}", e);
        StageError::EncodingFailure {
            valid_up_to: e.valid_up_to(),
        }
    })?;

    let mut text = any_ascii(decoded);

    // Pages often hold several lyric sets; only the first is wanted
    if !config.copyright_marker.is_empty() {
        if let Some(pos) = text.find(&config.copyright_marker) {
            debug!("Truncating lyrics at copyright marker (byte {})", pos);
            text.truncate(pos);
        }
    }

    for marker in config.attribution_markers.iter().filter(|m| !m.is_empty()) {
        text = text.replace(marker.as_str(), "");
    }

    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    Ok(text)
}

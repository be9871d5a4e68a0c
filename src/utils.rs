//! Shared utility functions

/// Unified duration parser - supports "30s", "5m", "2h" or plain seconds
pub fn parse_duration(s: &str) -> Option<u64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    // Try to parse as pure number (seconds)
    if let Ok(secs) = s.parse::<u64>() {
        return Some(secs);
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix('s') {
        (n, 1u64)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60u64)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3600u64)
    } else {
        return None;
    };

    num_str.parse::<u64>().ok().map(|n| n * unit)
}

/// Parse a retrieval timeout like "10s" or "1m" into seconds (must be non-zero)
pub fn parse_timeout_str(s: &str) -> storelens::Result<u64> {
    match parse_duration(s) {
        Some(0) | None => Err(storelens::StorelensError::ConfigError(format!(
            "Invalid timeout '{}'. Use format like 10s, 1m or plain seconds", s
        ))),
        Some(secs) => Ok(secs),
    }
}

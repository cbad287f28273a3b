use anyhow::Context;
use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Parse JSON piped on stdin. Returns None when stdin is a terminal or empty.
pub fn read_stdin<T: DeserializeOwned>() -> anyhow::Result<Option<T>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str(trimmed).context("Failed to parse JSON from stdin")?;
    Ok(Some(value))
}

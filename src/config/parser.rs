use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::config::WatchConfig;

const UTF8_BOM: char = '\u{feff}';

/// Loads the repository list. Read once per tick; some editors on Windows
/// prepend a byte-order mark, which serde_json rejects, so it is stripped
/// before parsing.
pub fn load_config(path: &Path) -> Result<WatchConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Error reading config file {path:?}"))?;

    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let config: WatchConfig =
        serde_json::from_str(content).with_context(|| "Error parsing JSON configuration file")?;

    Ok(config)
}

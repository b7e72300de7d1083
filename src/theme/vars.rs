//! variable mappings and the override layers on top of them
use {
    crate::error::{Result, ThemeError},
    std::path::Path,
    tracing::{debug, info},
};

/// presentation variable name -> value
///
/// values are emitted verbatim, references like `var(--x)` included
pub type VarMap = hashbrown::HashMap<String, String>;

/// layer mappings on top of each other
///
/// later layers replace same-named keys of earlier ones, everything else is
/// kept
pub fn merge<I>(layers: I) -> VarMap
where
    I: IntoIterator<Item = VarMap>,
{
    let mut merged = VarMap::new();

    for (depth, layer) in layers.into_iter().enumerate() {
        debug!(depth, size = layer.len(), "merging variable layer");
        merged.extend(layer);
    }

    merged
}

/// parse repeated `KEY=VALUE` overrides
///
/// the item is split at the first `=`, both sides are trimmed and the value
/// may be empty
///
/// # Errors
///
/// returns [`ThemeError::MalformedOverride`] if an item has no `=`
/// returns [`ThemeError::EmptyKey`] if the key is empty after trimming
pub fn parse_overrides<I, S>(items: I) -> Result<VarMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = VarMap::new();

    for item in items {
        let item = item.as_ref();
        let Some((key, value)) = item.split_once('=') else {
            return Err(ThemeError::MalformedOverride(item.to_string()));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ThemeError::EmptyKey(item.to_string()));
        }

        out.insert(key.to_string(), value.trim().to_string());
    }

    Ok(out)
}

/// load a JSON object of string -> string from disk
///
/// # Errors
///
/// returns [`ThemeError::MissingVars`] if the file doesn't exist
/// returns [`ThemeError::MalformedVars`] if it isn't a flat JSON object of strings
pub fn load_json(path: &Path) -> Result<VarMap> {
    if !path.exists() {
        return Err(ThemeError::MissingVars(path.to_path_buf()));
    }

    let raw = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&raw);
    let map: VarMap =
        serde_json::from_str(&text).map_err(|source| ThemeError::MalformedVars {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), count = map.len(), "loaded variable mapping");
    Ok(map)
}

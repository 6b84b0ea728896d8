//! JSON persistence for the stores
//!
//! Every write replaces the whole file. The document is first written to a
//! temporary file in the same directory and then renamed over the target, so
//! an interrupted write never leaves a truncated store behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use super::error::{StoreError, StoreResult};

const INDENT: &[u8] = b"    ";

/// Encode a value as pretty JSON with a 4-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Load a store, writing the empty default first if the file does not exist
pub fn load_or_init<T>(path: &Path) -> StoreResult<T>
where
    T: DeserializeOwned + Serialize + Default,
{
    if !path.exists() {
        tracing::info!("Creating empty store at {}", path.display());
        let value = T::default();
        write_atomic(path, &value)?;
        return Ok(value);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::io(format!("reading {}", path.display()), e))?;
    let value = serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded store from {}", path.display());
    Ok(value)
}

/// Replace the file at `path` with the JSON encoding of `value`
pub fn write_atomic<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let bytes = to_pretty_json(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .map_err(|e| StoreError::io(format!("creating {}", dir.display()), e))?;

    let context = || format!("writing {}", path.display());
    let mut file = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(context(), e))?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| StoreError::io(context(), e))?;
    file.persist(path)
        .map_err(|e| StoreError::io(context(), e.error))?;

    tracing::info!("Saved store to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data_file");

        let value: BTreeMap<String, String> = load_or_init(&path).unwrap();

        assert!(value.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("commands_file");
        let mut value = BTreeMap::new();
        value.insert("upper".to_string(), "Converts to uppercase".to_string());

        write_atomic(&path, &value).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n    \"upper\": \"Converts to uppercase\"\n}"
        );
    }

    #[test]
    fn test_invalid_json_is_reported_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data_file");
        fs::write(&path, "{ not json").unwrap();

        let result: StoreResult<BTreeMap<String, String>> = load_or_init(&path);

        assert!(matches!(result, Err(StoreError::Json { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data_file");
        fs::write(&path, "{\"old\": \"content that is longer than the new one\"}").unwrap();

        write_atomic(&path, &BTreeMap::<String, String>::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        // only the target remains; the temporary file was renamed away
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}

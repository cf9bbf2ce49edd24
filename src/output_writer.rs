//! Records deployed mock addresses in a json output file.

use std::{fmt::LowerHex, fs, fs::File, io::Read, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// Writes the given address for a deployed contract under
/// `[network][contract key]` in the output file.
pub fn write_output_file<T: LowerHex>(
    file_path: &str,
    network: &str,
    key: &str,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[network][key] = JsonValue::String(format!("{value:#x}"));

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    #[test]
    fn records_deployments_per_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployed.json");
        let path = path.to_str().unwrap();

        write_output_file(path, "development", "link_token", Address::repeat_byte(0x11)).unwrap();
        write_output_file(path, "development", "fau_token", Address::repeat_byte(0x22)).unwrap();

        let parsed = get_json_from_file(path).unwrap();
        assert_eq!(
            parsed["development"]["link_token"].as_str().unwrap(),
            format!("{:#x}", Address::repeat_byte(0x11))
        );
        assert_eq!(
            parsed["development"]["fau_token"].as_str().unwrap(),
            format!("{:#x}", Address::repeat_byte(0x22))
        );
    }

    #[test]
    fn rewriting_a_key_keeps_the_latest_address() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployed.json");
        let path = path.to_str().unwrap();

        write_output_file(path, "development", "price_feed", Address::repeat_byte(0x11)).unwrap();
        write_output_file(path, "development", "price_feed", Address::repeat_byte(0x22)).unwrap();

        let parsed = get_json_from_file(path).unwrap();
        assert_eq!(
            parsed["development"]["price_feed"].as_str().unwrap(),
            format!("{:#x}", Address::repeat_byte(0x22))
        );
    }
}

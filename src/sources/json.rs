use crate::error::Result;
use std::collections::HashMap;
use std::io::Read;

/// Parses a JSON object of `{ "returned": "searched", ... }` into the map
/// form accepted by `CandidateSource::Map`.
pub fn read_map<R: Read>(reader: R) -> Result<HashMap<String, String>> {
    let map: HashMap<String, String> = serde_json::from_reader(reader)?;
    Ok(map)
}

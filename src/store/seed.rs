use crate::models::{CollectionRecord, FileRecord, UploadRecord};
use serde::de::DeserializeOwned;

const FILES_JSON: &str = include_str!("../../data/files.json");
const UPLOADS_JSON: &str = include_str!("../../data/uploads.json");
const COLLECTIONS_JSON: &str = include_str!("../../data/collections.json");

/// Initial contents for a [`MockStore`](super::MockStore).
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub files: Vec<FileRecord>,
    pub uploads: Vec<UploadRecord>,
    pub collections: Vec<CollectionRecord>,
}

impl SeedData {
    /// The datasets bundled under `data/`.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Ok(Self {
            files: parse(FILES_JSON)?,
            uploads: parse(UPLOADS_JSON)?,
            collections: parse(COLLECTIONS_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_datasets_parse_with_unique_ids() {
        let seed = SeedData::bundled().unwrap();
        assert!(!seed.files.is_empty());
        assert!(!seed.uploads.is_empty());
        assert!(!seed.collections.is_empty());

        let ids: HashSet<_> = seed.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), seed.files.len());
    }
}

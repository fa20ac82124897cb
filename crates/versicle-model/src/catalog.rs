use crate::error::VerseError;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Hand-curated references the random picker draws from. Spans use the
/// `BOOK.CHAPTER.VERSE-VERSE` form the service accepts directly.
const CURATED_REFERENCES: &[&str] = &[
    "GEN.1.1",
    "JAS.1.17",
    "ROM.8.28",
    "JER.29.11",
    "JHN.3.16-17",
    "EPH.6.12",
    "HEB.11.6",
    "JAS.1.19",
    "JAS.1.22",
    "JAS.3.18",
    "JAS.5.7",
    "REV.19.16",
    "REV.21.4",
    "REV.22.13",
    "ROM.6.23",
    "ROM.8.31",
    "ROM.8.38-39",
    "JHN.1.12",
    "MAT.6.25",
    "MAT.24.27",
    "MAT.28.19",
    "MRK.8.34",
    "MRK.10.27",
    "MRK.11.26",
    "LUK.12.8",
    "LUK.18.27",
    "ROM.1.16",
    "ROM.3.10",
    "ROM.3.23",
    "ROM.4.8",
    "ROM.5.18",
    "ROM.10.9",
    "ROM.12.2",
    "ROM.12.9",
    "ROM.12.12",
    "2CO.2.14-16",
    "2CO.4.18",
    "2CO.5.21",
    "2CO.10.3-6",
    "EPH.6.11-13",
    "PHP.1.21",
    "PHP.4.13",
    "PHP.4.19",
    "COL.3.17",
    "2TH.3.16",
    "2TH.2.15",
    "1TI.2.5",
    "2TI.2.10",
    "2TI.2.15",
    "2TI.2.22",
    "HEB.11.3",
    "2PE.3.9",
    "1JN.2.15-17",
    "PSA.73.26",
    "PRO.10.27",
    "PRO.17.27-28",
    "PRO.1.7",
    "PRO.26.11",
    "GEN.50.20",
    "JOS.24.14-15",
    "ISA.40.30-31",
    "MAT.9.11-12",
    "1CO.10.13",
    "HEB.13.2",
    "1PE.4.8",
    "LUK.6.31",
    "1CO.13.4-8",
    "LUK.6.32-36",
];

/// A fixed set of verse references to pick from.
///
/// Selection is uniformly random with replacement; no state is carried
/// between calls. `Default` supplies the built-in curated set.
#[derive(Debug, Clone)]
pub struct VerseCatalog {
    references: Vec<String>,
}

impl Default for VerseCatalog {
    fn default() -> Self {
        Self {
            references: CURATED_REFERENCES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl VerseCatalog {
    /// Build a catalog from an explicit reference list.
    pub fn new(references: Vec<String>) -> Self {
        Self { references }
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Pick one reference uniformly at random.
    ///
    /// An empty catalog is a configuration error and fails rather than
    /// returning an undefined reference.
    pub fn pick_random(&self) -> Result<&str, VerseError> {
        self.references
            .choose(&mut thread_rng())
            .map(|r| r.as_str())
            .ok_or(VerseError::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_size() {
        let catalog = VerseCatalog::default();
        assert!(catalog.len() >= 60, "curated set holds 60+ references");
    }

    #[test]
    fn test_pick_returns_member() {
        let catalog = VerseCatalog::default();
        for _ in 0..20 {
            let picked = catalog.pick_random().unwrap();
            assert!(CURATED_REFERENCES.contains(&picked));
        }
    }

    #[test]
    fn test_pick_single_entry() {
        let catalog = VerseCatalog::new(vec!["JHN.3.16-17".to_string()]);
        assert_eq!(catalog.pick_random().unwrap(), "JHN.3.16-17");
    }

    #[test]
    fn test_empty_catalog_fails() {
        let catalog = VerseCatalog::new(Vec::new());
        assert!(matches!(
            catalog.pick_random(),
            Err(VerseError::EmptyCatalog)
        ));
    }
}

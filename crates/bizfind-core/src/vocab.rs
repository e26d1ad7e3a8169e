//! Fixed vocabularies: classification tables, chain keywords, industry
//! filter keyword sets, and the word lists used for sample data.
//!
//! The filter-stage tables can be extended at runtime from a YAML file via
//! [`load_vocabulary`]; the classification tables are static.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// OSM `shop=*` values with a curated industry label.
pub const SHOP_CATEGORIES: &[(&str, &str)] = &[
    ("supermarket", "Grocery Store"),
    ("convenience", "Convenience Store"),
    ("bakery", "Bakery"),
    ("butcher", "Food & Beverage - Butcher"),
    ("deli", "Food & Beverage - Deli"),
    ("alcohol", "Food & Beverage - Liquor Store"),
    ("beverages", "Food & Beverage - Beverages"),
    ("coffee", "Food & Beverage - Coffee Roaster"),
    ("clothes", "Retail - Clothing"),
    ("shoes", "Retail - Footwear"),
    ("jewelry", "Retail - Jewelry"),
    ("gift", "Retail - Gifts"),
    ("books", "Retail - Books"),
    ("florist", "Retail - Florist"),
    ("furniture", "Retail - Furniture"),
    ("hardware", "Retail - Hardware"),
    ("doityourself", "Retail - Home Improvement"),
    ("pet", "Retail - Pet Supplies"),
    ("car", "Automotive Sales"),
    ("car_repair", "Automotive Repair"),
    ("car_parts", "Automotive Parts"),
    ("tyres", "Automotive - Tires"),
    ("electronics", "Technology - Electronics"),
    ("computer", "Technology - Computers"),
    ("mobile_phone", "Technology - Mobile Phones"),
    ("hairdresser", "Personal Services - Hair Salon"),
    ("beauty", "Personal Services - Beauty Salon"),
    ("optician", "Healthcare - Optician"),
    ("chemist", "Healthcare - Pharmacy"),
];

/// OSM `amenity=*` values with a curated industry label.
pub const AMENITY_CATEGORIES: &[(&str, &str)] = &[
    ("restaurant", "Food & Beverage"),
    ("cafe", "Food & Beverage - Cafe"),
    ("fast_food", "Food & Beverage - Fast Food"),
    ("bar", "Food & Beverage - Bar"),
    ("pub", "Food & Beverage - Pub"),
    ("ice_cream", "Food & Beverage - Ice Cream"),
    ("food_court", "Food & Beverage - Food Court"),
    ("pharmacy", "Healthcare - Pharmacy"),
    ("dentist", "Healthcare - Dentist"),
    ("doctors", "Healthcare - Medical Practice"),
    ("clinic", "Healthcare - Clinic"),
    ("veterinary", "Healthcare - Veterinary"),
    ("bank", "Professional Services - Banking"),
    ("car_wash", "Automotive Services - Car Wash"),
    ("car_rental", "Automotive Services - Car Rental"),
    ("fuel", "Automotive Services - Fuel"),
    ("childcare", "Personal Services - Childcare"),
    ("driving_school", "Education - Driving School"),
    ("language_school", "Education - Language School"),
    ("cinema", "Entertainment - Cinema"),
    ("nightclub", "Entertainment - Nightclub"),
];

/// Case-insensitive name fragments identifying franchise businesses.
pub const CHAIN_KEYWORDS: &[&str] = &[
    "mcdonald",
    "burger king",
    "wendy's",
    "subway",
    "starbucks",
    "taco bell",
    "kfc",
    "pizza hut",
    "domino's",
    "dunkin",
    "chick-fil-a",
    "sonic drive-in",
    "waffle house",
    "cracker barrel",
    "walmart",
    "target",
    "cvs",
    "walgreens",
    "dollar general",
    "family dollar",
    "dollar tree",
    "7-eleven",
    "home depot",
    "lowe's",
    "autozone",
    "o'reilly auto",
    "jiffy lube",
    "great clips",
    "supercuts",
    "h&r block",
];

/// The "no industry filter" label shown first in the selector.
pub const ALL_INDUSTRIES: &str = "All";

/// Industry selector labels in display order, each with the keywords an
/// industry string may contain to match it. An empty keyword list means the
/// label itself is matched.
pub const INDUSTRY_FILTERS: &[(&str, &[&str])] = &[
    (
        "Food & Beverage",
        &["Food", "Beverage", "Restaurant", "Cafe", "Bakery", "Grocery"],
    ),
    ("Automotive", &["Automotive"]),
    ("Retail", &["Retail", "Store", "Shop"]),
    (
        "Healthcare",
        &["Health", "Medical", "Dentist", "Pharmacy", "Clinic"],
    ),
    (
        "Technology",
        &["Technology", "Computer", "Electronics", "Software"],
    ),
    (
        "Professional Services",
        &["Professional", "Financial", "Legal", "Insurance", "Banking"],
    ),
    ("Personal Services", &["Personal Services", "Salon", "Barber"]),
    ("Manufacturing", &[]),
    ("Education", &[]),
    ("Entertainment", &[]),
];

/// Industries assigned to synthetic records.
pub const SAMPLE_INDUSTRIES: &[&str] = &[
    "Food & Beverage",
    "Bakery",
    "Retail - Clothing",
    "Automotive Repair",
    "Healthcare - Dentist",
    "Technology - Computers",
    "Professional Services",
    "Personal Services - Hair Salon",
    "Manufacturing - Woodwork",
];

/// Business-type words combined with a prefix to name synthetic records.
pub const SAMPLE_BUSINESS_TYPES: &[&str] = &[
    "Restaurant",
    "Shop",
    "Services",
    "Studio",
    "Market",
    "Workshop",
    "Company",
];

pub const SAMPLE_NAME_PREFIXES: &[&str] = &[
    "Main Street",
    "Riverside",
    "Hometown",
    "Oak Hill",
    "Maple",
    "Cedar Creek",
    "Southside",
    "Union Station",
    "Golden Leaf",
    "Blue Door",
];

pub const SAMPLE_STREETS: &[&str] = &[
    "Main St",
    "Broadway",
    "Church St",
    "Elm Ave",
    "Commerce St",
    "Market St",
    "Park Ave",
    "Lake Rd",
];

pub const SAMPLE_AREA_CODES: &[u16] = &[615, 629, 212, 312, 404, 512, 704, 901];

/// Filter-stage vocabulary in owned form so a YAML file can extend it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub chain_keywords: Vec<String>,
    pub industry_filters: Vec<IndustryFilter>,
}

/// One entry of the industry selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndustryFilter {
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            chain_keywords: CHAIN_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            industry_filters: INDUSTRY_FILTERS
                .iter()
                .map(|(label, keywords)| IndustryFilter {
                    label: (*label).to_string(),
                    keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Looks up a selector entry by label, ignoring case.
    #[must_use]
    pub fn industry_filter(&self, label: &str) -> Option<&IndustryFilter> {
        self.industry_filters
            .iter()
            .find(|f| f.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Selector labels in display order, starting with [`ALL_INDUSTRIES`].
    #[must_use]
    pub fn industry_labels(&self) -> Vec<&str> {
        std::iter::once(ALL_INDUSTRIES)
            .chain(self.industry_filters.iter().map(|f| f.label.as_str()))
            .collect()
    }

    fn extend(&mut self, overrides: VocabularyFile) {
        for keyword in overrides.chain_keywords {
            if !self
                .chain_keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(&keyword))
            {
                self.chain_keywords.push(keyword);
            }
        }
        for filter in overrides.industry_filters {
            match self
                .industry_filters
                .iter_mut()
                .find(|f| f.label.eq_ignore_ascii_case(&filter.label))
            {
                Some(existing) => existing.keywords = filter.keywords,
                None => self.industry_filters.push(filter),
            }
        }
    }
}

/// On-disk shape of a vocabulary override file.
#[derive(Debug, Default, Deserialize)]
pub struct VocabularyFile {
    #[serde(default)]
    pub chain_keywords: Vec<String>,
    #[serde(default)]
    pub industry_filters: Vec<IndustryFilter>,
}

/// Load the built-in vocabulary extended by the YAML file at `path`.
///
/// Chain keywords are appended; industry filters replace an existing entry
/// with the same label or are added after the built-in ones.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_vocabulary(&content)
}

/// Parse and apply a vocabulary override document.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_vocabulary(yaml: &str) -> Result<Vocabulary, ConfigError> {
    let overrides: VocabularyFile =
        serde_yaml::from_str(yaml).map_err(ConfigError::VocabularyFileParse)?;
    validate_overrides(&overrides)?;

    let mut vocabulary = Vocabulary::default();
    vocabulary.extend(overrides);
    Ok(vocabulary)
}

fn validate_overrides(overrides: &VocabularyFile) -> Result<(), ConfigError> {
    if overrides.chain_keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "chain keywords must be non-empty".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();
    for filter in &overrides.industry_filters {
        let label = filter.label.trim();
        if label.is_empty() {
            return Err(ConfigError::Validation(
                "industry filter label must be non-empty".to_string(),
            ));
        }
        if label.eq_ignore_ascii_case(ALL_INDUSTRIES) {
            return Err(ConfigError::Validation(format!(
                "industry filter label '{label}' is reserved"
            )));
        }
        if !seen_labels.insert(label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate industry filter label: '{label}'"
            )));
        }
        if filter.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "industry filter '{label}' has an empty keyword"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_mirrors_static_tables() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.chain_keywords.len(), CHAIN_KEYWORDS.len());
        assert_eq!(vocab.industry_filters.len(), INDUSTRY_FILTERS.len());
    }

    #[test]
    fn industry_labels_start_with_all() {
        let vocab = Vocabulary::default();
        let labels = vocab.industry_labels();
        assert_eq!(labels[0], "All");
        assert_eq!(labels[1], "Food & Beverage");
    }

    #[test]
    fn industry_filter_lookup_ignores_case() {
        let vocab = Vocabulary::default();
        let filter = vocab.industry_filter("food & beverage").unwrap();
        assert!(filter.keywords.iter().any(|k| k == "Bakery"));
    }

    #[test]
    fn classification_tables_have_unique_keys() {
        for table in [SHOP_CATEGORIES, AMENITY_CATEGORIES] {
            let mut seen = HashSet::new();
            for (key, _) in table {
                assert!(seen.insert(*key), "duplicate key {key}");
            }
        }
    }

    #[test]
    fn parse_vocabulary_appends_chain_keywords() {
        let vocab = parse_vocabulary("chain_keywords:\n  - Local Chain Co\n").unwrap();
        assert!(vocab.chain_keywords.iter().any(|k| k == "Local Chain Co"));
        assert_eq!(vocab.chain_keywords.len(), CHAIN_KEYWORDS.len() + 1);
    }

    #[test]
    fn parse_vocabulary_skips_duplicate_chain_keywords() {
        let vocab = parse_vocabulary("chain_keywords:\n  - SUBWAY\n").unwrap();
        assert_eq!(vocab.chain_keywords.len(), CHAIN_KEYWORDS.len());
    }

    #[test]
    fn parse_vocabulary_replaces_existing_filter_keywords() {
        let yaml = "industry_filters:\n  - label: automotive\n    keywords: [Auto, Tires]\n";
        let vocab = parse_vocabulary(yaml).unwrap();
        let filter = vocab.industry_filter("Automotive").unwrap();
        assert_eq!(filter.keywords, vec!["Auto".to_string(), "Tires".to_string()]);
        assert_eq!(vocab.industry_filters.len(), INDUSTRY_FILTERS.len());
    }

    #[test]
    fn parse_vocabulary_adds_new_filter() {
        let yaml = "industry_filters:\n  - label: Construction\n";
        let vocab = parse_vocabulary(yaml).unwrap();
        let filter = vocab.industry_filter("construction").unwrap();
        assert!(filter.keywords.is_empty());
        assert_eq!(vocab.industry_labels().last(), Some(&"Construction"));
    }

    #[test]
    fn load_vocabulary_from_example_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("vocabulary.example.yaml");
        let vocab = load_vocabulary(&path).unwrap();
        assert!(vocab.chain_keywords.iter().any(|k| k == "panera"));
        assert!(vocab.industry_filter("Pets").is_some());
        assert_eq!(vocab.industry_labels().last(), Some(&"Construction"));
    }

    #[test]
    fn parse_vocabulary_empty_document_is_default() {
        let vocab = parse_vocabulary("{}").unwrap();
        assert_eq!(vocab, Vocabulary::default());
    }

    #[test]
    fn parse_vocabulary_rejects_blank_keyword() {
        let err = parse_vocabulary("chain_keywords: ['  ']").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn parse_vocabulary_rejects_reserved_label() {
        let err = parse_vocabulary("industry_filters:\n  - label: all\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("reserved")));
    }

    #[test]
    fn parse_vocabulary_rejects_duplicate_labels() {
        let yaml = "industry_filters:\n  - label: Pets\n  - label: pets\n";
        let err = parse_vocabulary(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn parse_vocabulary_rejects_malformed_yaml() {
        let err = parse_vocabulary("chain_keywords: {").unwrap_err();
        assert!(matches!(err, ConfigError::VocabularyFileParse(_)));
    }

    #[test]
    fn load_vocabulary_reports_missing_file() {
        let err = load_vocabulary(Path::new("/nonexistent/bizfind-vocab.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::VocabularyFileIo { .. }));
    }
}

//! The business record produced by a single search.
//!
//! Records are assembled once (by the OSM normalizer or the sample
//! generator) and never mutated afterwards; the filter stage only decides
//! which records survive.

use serde::{Serialize, Serializer};

/// Display marker for absent contact fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// An age in whole years, or an explicit marker that it is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeEstimate {
    Known(u32),
    #[default]
    Unknown,
}

impl AgeEstimate {
    #[must_use]
    pub fn years(self) -> Option<u32> {
        match self {
            AgeEstimate::Known(years) => Some(years),
            AgeEstimate::Unknown => None,
        }
    }
}

impl std::fmt::Display for AgeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeEstimate::Known(years) => write!(f, "{years}"),
            AgeEstimate::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Serialize for AgeEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AgeEstimate::Known(years) => serializer.serialize_u32(*years),
            AgeEstimate::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    OpenStreetMap,
    Sample,
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSource::OpenStreetMap => write!(f, "OpenStreetMap"),
            RecordSource::Sample => write!(f, "Sample Data"),
        }
    }
}

/// A local business as shown in the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRecord {
    name: String,
    industry: String,
    /// Kind of business drawn for synthetic records, e.g. `"Studio"`.
    business_type: Option<String>,
    business_age: AgeEstimate,
    owner_age: AgeEstimate,
    address: String,
    phone: Option<String>,
    website: Option<String>,
    /// Annual revenue in thousands of USD. Only synthetic records carry one.
    revenue_estimate: Option<u32>,
    source: RecordSource,
}

impl BusinessRecord {
    /// Creates a record with unknown ages and no contact details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        address: impl Into<String>,
        source: RecordSource,
    ) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            business_type: None,
            business_age: AgeEstimate::Unknown,
            owner_age: AgeEstimate::Unknown,
            address: address.into(),
            phone: None,
            website: None,
            revenue_estimate: None,
            source,
        }
    }

    #[must_use]
    pub fn with_business_type(mut self, business_type: Option<String>) -> Self {
        self.business_type = business_type;
        self
    }

    #[must_use]
    pub fn with_business_age(mut self, age: AgeEstimate) -> Self {
        self.business_age = age;
        self
    }

    #[must_use]
    pub fn with_owner_age(mut self, age: AgeEstimate) -> Self {
        self.owner_age = age;
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    #[must_use]
    pub fn with_revenue_estimate(mut self, thousands_usd: Option<u32>) -> Self {
        self.revenue_estimate = thousands_usd;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn industry(&self) -> &str {
        &self.industry
    }

    #[must_use]
    pub fn business_type(&self) -> Option<&str> {
        self.business_type.as_deref()
    }

    #[must_use]
    pub fn business_age(&self) -> AgeEstimate {
        self.business_age
    }

    #[must_use]
    pub fn owner_age(&self) -> AgeEstimate {
        self.owner_age
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn revenue_estimate(&self) -> Option<u32> {
        self.revenue_estimate
    }

    #[must_use]
    pub fn source(&self) -> RecordSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_unknown_ages_and_no_contacts() {
        let record = BusinessRecord::new(
            "Corner Bakery",
            "Bakery",
            "Near Nashville, TN",
            RecordSource::OpenStreetMap,
        );
        assert_eq!(record.business_age(), AgeEstimate::Unknown);
        assert_eq!(record.owner_age(), AgeEstimate::Unknown);
        assert!(record.phone().is_none());
        assert!(record.website().is_none());
        assert!(record.revenue_estimate().is_none());
        assert!(record.business_type().is_none());
    }

    #[test]
    fn age_estimate_display() {
        assert_eq!(AgeEstimate::Known(12).to_string(), "12");
        assert_eq!(AgeEstimate::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn age_estimate_serializes_number_or_marker() {
        assert_eq!(
            serde_json::to_value(AgeEstimate::Known(7)).unwrap(),
            serde_json::json!(7)
        );
        assert_eq!(
            serde_json::to_value(AgeEstimate::Unknown).unwrap(),
            serde_json::json!("unknown")
        );
    }

    #[test]
    fn record_serializes_source_as_snake_case() {
        let record = BusinessRecord::new("Shop", "Retail", "1 Main St", RecordSource::Sample);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["source"], "sample");
        assert_eq!(value["phone"], serde_json::Value::Null);
    }

    #[test]
    fn record_serializes_sample_only_fields() {
        let record =
            BusinessRecord::new("Maple Studio", "Bakery", "1 Main St", RecordSource::Sample)
                .with_business_type(Some("Studio".to_string()))
                .with_revenue_estimate(Some(250));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["business_type"], "Studio");
        assert_eq!(value["revenue_estimate"], 250);
    }
}

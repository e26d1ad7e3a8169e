//! Tag-to-industry classification.
//!
//! Rules are checked in a fixed order (shop, amenity, office, craft) and the
//! first key present on the element decides the category; later keys are
//! never consulted.

use bizfind_core::vocab::{AMENITY_CATEGORIES, SHOP_CATEGORIES};

use crate::types::Tags;

pub const GENERAL_BUSINESS: &str = "General Business";

type Rule = (&'static str, fn(&str) -> String);

const RULES: &[Rule] = &[
    ("shop", classify_shop),
    ("amenity", classify_amenity),
    ("office", classify_office),
    ("craft", classify_craft),
];

/// Maps an element's tags to one industry label.
#[must_use]
pub fn classify(tags: &Tags) -> String {
    RULES
        .iter()
        .find_map(|(key, derive)| {
            tags.get(*key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(*derive)
        })
        .unwrap_or_else(|| GENERAL_BUSINESS.to_string())
}

fn lookup(table: &[(&str, &str)], value: &str) -> Option<String> {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| (*label).to_string())
}

fn classify_shop(value: &str) -> String {
    lookup(SHOP_CATEGORIES, value).unwrap_or_else(|| format!("Retail - {}", title_case(value)))
}

fn classify_amenity(value: &str) -> String {
    lookup(AMENITY_CATEGORIES, value)
        .unwrap_or_else(|| format!("Services - {}", title_case(value)))
}

fn classify_office(_value: &str) -> String {
    "Professional Services".to_string()
}

fn classify_craft(value: &str) -> String {
    format!("Manufacturing - {}", title_case(value))
}

/// `"car_parts"` becomes `"Car Parts"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn every_known_shop_value_maps_to_its_label() {
        for (value, label) in SHOP_CATEGORIES {
            assert_eq!(classify(&tags(&[("shop", *value)])), *label);
        }
    }

    #[test]
    fn unknown_shop_value_falls_back_to_retail() {
        assert_eq!(classify(&tags(&[("shop", "widget")])), "Retail - Widget");
    }

    #[test]
    fn shop_wins_over_amenity() {
        let t = tags(&[("amenity", "restaurant"), ("shop", "bakery")]);
        assert_eq!(classify(&t), "Bakery");
    }

    #[test]
    fn known_amenity_maps_to_its_label() {
        assert_eq!(
            classify(&tags(&[("amenity", "restaurant")])),
            "Food & Beverage"
        );
    }

    #[test]
    fn unknown_amenity_falls_back_to_services() {
        assert_eq!(
            classify(&tags(&[("amenity", "coworking_space")])),
            "Services - Coworking Space"
        );
    }

    #[test]
    fn amenity_wins_over_office_and_craft() {
        let t = tags(&[("craft", "brewery"), ("office", "lawyer"), ("amenity", "cafe")]);
        assert_eq!(classify(&t), "Food & Beverage - Cafe");
    }

    #[test]
    fn office_is_always_professional_services() {
        assert_eq!(
            classify(&tags(&[("office", "lawyer")])),
            "Professional Services"
        );
        assert_eq!(
            classify(&tags(&[("office", "it"), ("craft", "carpenter")])),
            "Professional Services"
        );
    }

    #[test]
    fn craft_falls_back_to_manufacturing() {
        assert_eq!(
            classify(&tags(&[("craft", "brewery")])),
            "Manufacturing - Brewery"
        );
    }

    #[test]
    fn no_category_key_is_general_business() {
        assert_eq!(classify(&tags(&[("name", "Somewhere")])), GENERAL_BUSINESS);
        assert_eq!(classify(&Tags::new()), GENERAL_BUSINESS);
    }

    #[test]
    fn blank_value_is_skipped() {
        let t = tags(&[("shop", "  "), ("amenity", "bank")]);
        assert_eq!(classify(&t), "Professional Services - Banking");
    }

    #[test]
    fn title_case_splits_on_separators() {
        assert_eq!(title_case("widget"), "Widget");
        assert_eq!(title_case("car_parts"), "Car Parts");
        assert_eq!(title_case("second-hand"), "Second Hand");
        assert_eq!(title_case("DIY"), "Diy");
        assert_eq!(title_case(""), "");
    }
}

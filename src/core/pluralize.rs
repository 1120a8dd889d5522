//! English pluralization for resource type names
//!
//! Handles common English pluralization rules including irregular forms.
//! Compound names separated by `-` or `_` only have their last word inflected.

/// Irregular singular → plural pairs
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
];

/// Words with identical singular and plural forms
const UNCOUNTABLES: &[&str] = &[
    "data", "deer", "equipment", "fish", "information", "media", "news", "series", "sheep",
    "species",
];

/// Utility for converting singular English nouns to their plural form
pub struct Pluralizer;

impl Pluralizer {
    /// Convert a singular noun to its plural form
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonapi::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("user"), "users");
    /// assert_eq!(Pluralizer::pluralize("company"), "companies");
    /// assert_eq!(Pluralizer::pluralize("resource-model"), "resource-models");
    /// assert_eq!(Pluralizer::pluralize("sales-person"), "sales-people");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        let split = singular.rfind(['-', '_']).map_or(0, |pos| pos + 1);
        let (head, word) = singular.split_at(split);
        format!("{}{}", head, Self::pluralize_word(word))
    }

    fn pluralize_word(word: &str) -> String {
        // Handle empty strings
        if word.is_empty() {
            return String::new();
        }

        if UNCOUNTABLES.contains(&word) {
            return word.to_string();
        }

        if let Some((_, plural)) = IRREGULARS.iter().find(|(singular, _)| *singular == word) {
            return plural.to_string();
        }

        match word {
            // Words ending in consonant + y -> ies
            s if s.ends_with('y')
                && !s.ends_with("ay")
                && !s.ends_with("ey")
                && !s.ends_with("iy")
                && !s.ends_with("oy")
                && !s.ends_with("uy")
                && s.len() > 1 =>
            {
                format!("{}ies", &s[..s.len() - 1])
            }

            // Words ending in s, sh, ch, x, z -> es
            s if s.ends_with('s')
                || s.ends_with("sh")
                || s.ends_with("ch")
                || s.ends_with('x')
                || s.ends_with('z') =>
            {
                format!("{}es", s)
            }

            // Words ending in fe -> ves
            s if s.ends_with("fe") && s.len() > 2 => {
                format!("{}ves", &s[..s.len() - 2])
            }

            // Words ending in f -> ves (but not ff: staff, cliff)
            s if s.ends_with('f') && !s.ends_with("ff") && s.len() > 1 => {
                format!("{}ves", &s[..s.len() - 1])
            }

            // Words ending in o after consonant -> es (photo, piano are exceptions)
            s if s.ends_with('o') && s.len() > 1 => {
                let after_vowel = s[..s.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u']);
                if after_vowel || matches!(s, "photo" | "piano" | "halo" | "video" | "memo") {
                    format!("{}s", s)
                } else {
                    format!("{}es", s)
                }
            }

            // Default: just add s
            s => format!("{}s", s),
        }
    }
}

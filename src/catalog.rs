use std::collections::HashMap;

/// Cuisines offered on the form. The empty entry means "no preference".
pub const CUISINES: &[&str] = &[
    "",
    "Italian",
    "Mexican",
    "Chinese",
    "Indian",
    "Japanese",
    "Thai",
    "French",
    "Mediterranean",
    "American",
    "Greek",
];

/// Display name and language code pairs, in the order shown on the form.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Russian", "ru"),
    ("Chinese (Simplified)", "zh-CN"),
    ("Chinese (Traditional)", "zh-TW"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Arabic", "ar"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    ("Turkish", "tr"),
    ("Greek", "el"),
    ("Hebrew", "he"),
    ("Hindi", "hi"),
    ("Indonesian", "id"),
    ("Thai", "th"),
    ("Filipino", "tl"),
    ("Vietnamese", "vi"),
];

pub const DIETARY_RESTRICTIONS: &[&str] = &[
    "Gluten-Free",
    "Dairy-Free",
    "Vegan",
    "Pescatarian",
    "Nut-Free",
    "Kosher",
    "Halal",
    "Low-Carb",
    "Organic",
    "Locally Sourced",
];

/// The option lists rendered on the form, plus the code → name lookup
/// built once at start-up.
#[derive(Debug, Clone)]
pub struct Catalog {
    cuisines: Vec<String>,
    restrictions: Vec<String>,
    languages: Vec<(String, String)>,
    names_by_code: HashMap<String, String>,
}

impl Catalog {
    pub fn new(
        cuisines: Vec<String>,
        restrictions: Vec<String>,
        languages: Vec<(String, String)>,
    ) -> Self {
        let mut names_by_code = HashMap::with_capacity(languages.len());
        for (name, code) in &languages {
            // First display name wins if two names share a code
            names_by_code
                .entry(code.clone())
                .or_insert_with(|| name.clone());
        }

        Catalog {
            cuisines,
            restrictions,
            languages,
            names_by_code,
        }
    }

    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }

    /// `(display name, code)` pairs in form order
    pub fn languages(&self) -> &[(String, String)] {
        &self.languages
    }

    /// Resolve a language code to its display name, falling back to the code itself.
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names_by_code
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(
            CUISINES.iter().map(|c| c.to_string()).collect(),
            DIETARY_RESTRICTIONS.iter().map(|r| r.to_string()).collect(),
            LANGUAGES
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        )
    }
}

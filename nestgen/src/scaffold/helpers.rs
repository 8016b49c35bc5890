//! Naming helpers for code generation
//!
//! Every output path and generated identifier derives its spelling from the
//! model name through these functions.

use inflector::Inflector;

/// Words with identical singular and plural forms
const UNCOUNTABLE: &[&str] = &[
    "data",
    "media",
    "metadata",
    "equipment",
    "information",
    "feedback",
    "software",
    "news",
    "series",
    "species",
    "sheep",
    "fish",
    "deer",
];

/// Irregular `(singular, plural)` pairs
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("quiz", "quizzes"),
];

/// Singular endings that look plural to a trailing-`s` rule
const SINGULAR_S_ENDINGS: &[&str] = &["as", "us", "ss", "is"];

/// Template helpers for Handlebars code generation
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Module directory name: lower-cased model name, pluralized
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_module_name("Account"), "accounts");
    /// assert_eq!(TemplateHelpers::to_module_name("Category"), "categories");
    /// assert_eq!(TemplateHelpers::to_module_name("Person"), "people");
    /// ```
    #[must_use]
    pub fn to_module_name(model: &str) -> String {
        Self::to_plural_model(model).to_lowercase()
    }

    /// File stem for singular artifacts: lower-cased model name, singularized
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_singular_name("Account"), "account");
    /// assert_eq!(TemplateHelpers::to_singular_name("Categories"), "category");
    /// assert_eq!(TemplateHelpers::to_singular_name("Canvas"), "canvas");
    /// ```
    #[must_use]
    pub fn to_singular_name(model: &str) -> String {
        Self::singularize(model).to_lowercase()
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_camel_case("UserProfile"), "userProfile");
    /// assert_eq!(TemplateHelpers::to_camel_case("Account"), "account");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_kebab_case("UserProfile"), "user-profile");
    /// assert_eq!(TemplateHelpers::to_kebab_case("googleId"), "google-id");
    /// ```
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        input.to_kebab_case()
    }

    /// Pluralize the last word of a name, keeping its capitalization
    ///
    /// Uncountable and irregular words are looked up first; regular words go
    /// through the inflector.
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        inflect_last_word(input, true)
    }

    /// Singularize the last word of a name, keeping its capitalization
    #[must_use]
    pub fn singularize(input: &str) -> String {
        inflect_last_word(input, false)
    }

    /// Plural class-name form (e.g. `Accounts`, `UserProfiles`, `People`)
    #[must_use]
    pub fn to_plural_model(model: &str) -> String {
        Self::pluralize(model)
    }
}

/// Split `UserProfile` into `("User", "Profile")`
fn split_last_word(name: &str) -> (&str, &str) {
    let bytes = name.as_bytes();
    let start = (1..bytes.len())
        .rev()
        .find(|&idx| bytes[idx].is_ascii_uppercase() && !bytes[idx - 1].is_ascii_uppercase())
        .unwrap_or(0);
    name.split_at(start)
}

fn inflect_last_word(name: &str, plural: bool) -> String {
    let (prefix, last) = split_last_word(name);
    let inflected = inflect_word(&last.to_lowercase(), plural);

    let mut out = String::from(prefix);
    if last.starts_with(|c: char| c.is_uppercase()) {
        let mut chars = inflected.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    } else {
        out.push_str(&inflected);
    }
    out
}

/// Inflect one lower-case word
fn inflect_word(word: &str, plural: bool) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }

    for &(singular, plural_form) in IRREGULAR {
        if word == singular || word == plural_form {
            return if plural { plural_form } else { singular }.to_string();
        }
    }

    if plural {
        if let Some(stem) = word.strip_suffix("is") {
            return format!("{stem}es");
        }
        if SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return format!("{word}es");
        }
        // Already plural
        if word.ends_with('s') {
            return word.to_string();
        }
        return word.to_plural();
    }

    if SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    word.to_singular()
}

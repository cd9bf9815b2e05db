//! In-memory INI document
//!
//! A [`Dict`] maps lowercase section names to [`Section`]s, which in turn map
//! lowercase keys to raw string values. Typed accessors parse on read and typed
//! setters format on write; nothing but strings is ever stored.

use std::collections::HashMap;

use log::trace;

use crate::constants::DEFAULT_SECTION;

/// Key/value pairs of a single section
pub type Section = HashMap<String, String>;

/// A parsed INI document, keyed by section name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HashMap<String, Section>", into = "HashMap<String, Section>")
)]
pub struct Dict {
    sections: HashMap<String, Section>,
}

impl Dict {
    /// Create an empty document with no sections at all
    pub fn new() -> Self {
        Dict {
            sections: HashMap::new(),
        }
    }

    /// Number of sections, including an empty default section
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Borrow a whole section
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(&section.to_lowercase())
    }

    /// Iterate over all sections in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Get all section names
    ///
    /// The default section is only reported when it holds at least one key.
    /// Order is unspecified.
    pub fn get_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|(name, items)| !(name.as_str() == DEFAULT_SECTION && items.is_empty()))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Start a section, discarding anything previously stored under that name
    pub(crate) fn reset_section(&mut self, section: &str) -> String {
        let name = section.to_lowercase();
        self.sections.insert(name.clone(), Section::new());
        name
    }

    /// Store a parsed pair into an already normalized section
    pub(crate) fn add(&mut self, section: &str, key: &str, value: &str) {
        let key = key.to_lowercase();
        trace!("[{}] {} = {}", section, key, value);
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key, value.to_string());
    }

    fn set_value(&mut self, section: &str, key: &str, value: String) {
        self.sections
            .entry(section.to_lowercase())
            .or_default()
            .insert(key.to_lowercase(), value);
    }

    /// Get the raw value of a key
    pub fn get_string(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)
            .and_then(|items| items.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    pub fn set_string(&mut self, section: &str, key: &str, value: &str) {
        self.set_value(section, key, value.to_string());
    }

    /// Get a base-10 integer; `None` when missing or not a number
    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get_string(section, key)?.parse::<i64>().ok()
    }

    pub fn set_int(&mut self, section: &str, key: &str, value: i64) {
        self.set_value(section, key, value.to_string());
    }

    /// Get a 64-bit float; `None` when missing or not a number
    pub fn get_double(&self, section: &str, key: &str) -> Option<f64> {
        self.get_string(section, key)?.parse::<f64>().ok()
    }

    /// Store a float in its shortest round-trip decimal form
    pub fn set_double(&mut self, section: &str, key: &str, value: f64) {
        self.set_value(section, key, value.to_string());
    }

    /// Get a boolean judged by the first character of the value
    ///
    /// `y`, `t` and `1` (either case) are true, `n`, `f` and `0` are false.
    /// Anything else, including an empty value, is treated like a missing key.
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        parse_bool(self.get_string(section, key)?)
    }

    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.set_value(section, key, value.to_string());
    }

    /// Remove a key, dropping its section once the section is empty
    pub fn delete(&mut self, section: &str, key: &str) {
        let section = section.to_lowercase();
        let Some(items) = self.sections.get_mut(&section) else {
            return;
        };
        items.remove(&key.to_lowercase());
        if items.is_empty() {
            self.sections.remove(&section);
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.chars().next()? {
        'y' | 'Y' | '1' | 't' | 'T' => Some(true),
        'n' | 'N' | '0' | 'f' | 'F' => Some(false),
        _ => None,
    }
}

impl From<HashMap<String, Section>> for Dict {
    fn from(sections: HashMap<String, Section>) -> Self {
        let mut dict = Dict::new();
        for (name, items) in sections {
            let name = name.to_lowercase();
            let target = dict.sections.entry(name).or_default();
            for (key, value) in items {
                target.insert(key.to_lowercase(), value);
            }
        }
        dict
    }
}

impl From<Dict> for HashMap<String, Section> {
    fn from(dict: Dict) -> Self {
        dict.sections
    }
}

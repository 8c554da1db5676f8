//! Unit vocabulary and conversion.
//!
//! Spoken and written unit variants ("millimeters", "mm", "feet") are
//! normalized to short canonical codes. Conversion is supported inside two
//! families: length (via meters) and mass (via grams). Anything else is a
//! pass-through: unknown units and cross-family conversions return the
//! input value unchanged rather than erroring, so a noisy transcript still
//! produces a checklist.

use std::collections::HashMap;

/// Conversion family of a canonical unit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Length,
    Mass,
}

/// Length factors to meters.
const LENGTH_TO_METERS: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("in", 0.0254),
    ("ft", 0.3048),
];

/// Mass factors to grams.
const MASS_TO_GRAMS: &[(&str, f64)] = &[("g", 1.0), ("kg", 1000.0), ("lbs", 453.592)];

/// Default synonym vocabulary (English measurement phrasing).
const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("millimeter", "mm"),
    ("millimeters", "mm"),
    ("mm", "mm"),
    ("centimeter", "cm"),
    ("centimeters", "cm"),
    ("cm", "cm"),
    ("meter", "m"),
    ("meters", "m"),
    ("m", "m"),
    ("inch", "in"),
    ("inches", "in"),
    ("in", "in"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("ft", "ft"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("kg", "kg"),
    ("gram", "g"),
    ("grams", "g"),
    ("g", "g"),
    ("pound", "lbs"),
    ("pounds", "lbs"),
    ("lb", "lbs"),
    ("lbs", "lbs"),
    ("degree", "°"),
    ("degrees", "°"),
    ("°", "°"),
    ("second", "s"),
    ("seconds", "s"),
    ("s", "s"),
    ("minute", "min"),
    ("minutes", "min"),
    ("min", "min"),
    ("newton", "N"),
    ("newtons", "N"),
    ("n", "N"),
    ("percent", "%"),
    ("percentage", "%"),
    ("%", "%"),
];

/// Immutable unit vocabulary with conversion factors.
///
/// Alternate vocabularies (other locales, shop slang) can be layered on top
/// of the defaults with [`UnitCatalog::with_synonyms`].
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    synonyms: HashMap<String, String>,
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCatalog {
    /// Catalog with the built-in English vocabulary.
    pub fn new() -> Self {
        let synonyms = DEFAULT_SYNONYMS
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { synonyms }
    }

    /// Catalog with extra synonyms layered over the defaults.
    /// Extra entries win on key collision.
    pub fn with_synonyms(extra: &HashMap<String, String>) -> Self {
        let mut catalog = Self::new();
        for (k, v) in extra {
            catalog
                .synonyms
                .insert(k.trim().to_lowercase(), v.trim().to_string());
        }
        catalog
    }

    /// True if `text` (case-insensitive, trimmed) is a known unit synonym.
    pub fn is_unit(&self, text: &str) -> bool {
        self.synonyms.contains_key(&text.trim().to_lowercase())
    }

    /// Normalize a unit string to its canonical code.
    /// Unknown input is returned unchanged; callers must tolerate
    /// unrecognized units appearing verbatim.
    pub fn normalize(&self, text: &str) -> String {
        match self.synonyms.get(&text.trim().to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => text.to_string(),
        }
    }

    /// Conversion family of a canonical code, if it has one.
    pub fn family(&self, canonical: &str) -> Option<UnitFamily> {
        if LENGTH_TO_METERS.iter().any(|(u, _)| *u == canonical) {
            Some(UnitFamily::Length)
        } else if MASS_TO_GRAMS.iter().any(|(u, _)| *u == canonical) {
            Some(UnitFamily::Mass)
        } else {
            None
        }
    }

    /// Convert `value` between units.
    ///
    /// Both units are normalized first. Cross-family and unknown-unit
    /// conversions return `value` unchanged, a deliberate non-error policy
    /// inherited from the original behavior (silent precision loss risk,
    /// see DESIGN.md).
    pub fn convert(&self, value: f64, from: &str, to: &str) -> f64 {
        let from = self.normalize(from);
        let to = self.normalize(to);

        if from == to {
            return value;
        }

        match (self.family(&from), self.family(&to)) {
            (Some(UnitFamily::Length), Some(UnitFamily::Length)) => {
                value * factor(LENGTH_TO_METERS, &from) / factor(LENGTH_TO_METERS, &to)
            }
            (Some(UnitFamily::Mass), Some(UnitFamily::Mass)) => {
                value * factor(MASS_TO_GRAMS, &from) / factor(MASS_TO_GRAMS, &to)
            }
            _ => value,
        }
    }
}

fn factor(table: &[(&str, f64)], unit: &str) -> f64 {
    table
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}

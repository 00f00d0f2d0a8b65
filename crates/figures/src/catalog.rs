use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Traditional data attached to a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FigureDetails {
    /// Latin name (e.g., "Fortuna Major")
    pub name: &'static str,

    /// English gloss (e.g., "Greater Fortune")
    pub english: &'static str,

    /// 4-bit element ordinal
    pub flags: u8,

    /// Zero-indexed house where the figure is strong
    pub strong: usize,

    /// Zero-indexed house where the figure is weak
    pub weak: usize,
}

const fn details(
    name: &'static str,
    english: &'static str,
    flags: u8,
    strong: usize,
    weak: usize,
) -> FigureDetails {
    FigureDetails {
        name,
        english,
        flags,
        strong,
        weak,
    }
}

/// Indexed by ordinal. Houses are zero-indexed.
pub(crate) const DETAILS: [FigureDetails; 16] = [
    details("Populus", "People", 0b0000, 3, 9),
    details("Laetitia", "Joy", 0b0001, 11, 5),
    details("Rubeus", "Red", 0b0010, 7, 1),
    details("Fortuna Minor", "Lesser Fortune", 0b0011, 4, 10),
    details("Albus", "White", 0b0100, 2, 8),
    details("Amisso", "Loss", 0b0101, 1, 7),
    details("Conjunctio", "Conjunction", 0b0110, 5, 11),
    details("Cauda Draconis", "Tail of the Dragon", 0b0111, 8, 2),
    details("Tristitia", "Sorrow", 0b1000, 10, 4),
    details("Carcer", "Prison", 0b1001, 9, 3),
    details("Acquisitio", "Gain", 0b1010, 8, 2),
    details("Puer", "Boy", 0b1011, 0, 6),
    details("Fortuna Major", "Greater Fortune", 0b1100, 4, 10),
    details("Puella", "Girl", 0b1101, 6, 0),
    details("Caput Draconis", "Head of the Dragon", 0b1110, 5, 11),
    details("Via", "Way", 0b1111, 3, 9),
];

static SLUG_INDEX: Lazy<HashMap<String, u8>> = Lazy::new(|| {
    DETAILS
        .iter()
        .map(|details| (slugify(details.name), details.flags))
        .collect()
});

/// Normalize a figure name into its lookup slug.
///
/// Case is folded and runs of spaces, underscores and dashes collapse into a
/// single `-`, so "Fortuna Major", "fortuna_major" and "FORTUNA-MAJOR" all
/// become `fortuna-major`.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub(crate) fn flags_for_slug(slug: &str) -> Option<u8> {
    SLUG_INDEX.get(slug).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_flags() {
        for (ordinal, details) in DETAILS.iter().enumerate() {
            assert_eq!(details.flags as usize, ordinal, "{}", details.name);
        }
    }

    #[test]
    fn test_slugify_formats() {
        assert_eq!(slugify("Fortuna Major"), "fortuna-major");
        assert_eq!(slugify("fortuna_major"), "fortuna-major");
        assert_eq!(slugify("  CAUDA   DRACONIS "), "cauda-draconis");
        assert_eq!(slugify("via"), "via");
    }

    #[test]
    fn test_every_slug_is_indexed() {
        assert_eq!(SLUG_INDEX.len(), 16);
        assert_eq!(flags_for_slug("caput-draconis"), Some(0b1110));
        assert_eq!(flags_for_slug("caput"), None);
    }
}

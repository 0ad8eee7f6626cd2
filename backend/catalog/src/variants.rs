//! # Variants
//!
//! Catalog tables list every size of an instrument as its own row, e.g.
//! `Afastador Hohmann Nº1`, `Afastador Hohmann Nº2`. This module folds those rows
//! into one purchasable group (conjunto) keyed by the name without its variant
//! decoration.
//!
//! ## Name shapes
//!
//! Prefix (stripped, never numbered)
//! - Leading product code: `ASS185 - Cureta ...`
//!
//! Suffix, first match wins
//! 1. Composite dimension: `... 18mm x 50mm` -> 50
//! 2. Numbered marker: `... Nº3`, `... N° 3`, `... #3` -> 3
//! 3. Bare trailing number: `... 2` -> 2
//!
//! Names matching none of these are their own base name. The first suffix shape
//! that matches decides: when it would leave an empty name (`Nº 3`) or its digits
//! do not fit in a `u64`, the name is kept whole instead of trying the next shape.
//!
//! ## Notes
//! - Grouping keys compare case-insensitively, display keeps the first seen casing.
//! - Variant number 0 is kept on the member but never counts towards a range.
//! - A bare trailing number is not always a variant (`Monitor Dixtal 2020`). The data
//!   does not tell them apart so such names are grouped by the number anyway.
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::LazyLock,
};

use regex::Regex;

use crate::models::CatalogItem;

static CODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2,4}[0-9]+\s*-\s*").expect("Invalid regex"));

static DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:[0-9]+mm\s+)?x\s+([0-9]+)mm$").expect("Invalid regex")
});

static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:N[º°]|#)\s*([0-9]+)$").expect("Invalid regex"));

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([0-9]+)$").expect("Invalid regex"));

/// Recognized variant suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixPattern {
    Dimension,
    NumberedMarker,
    BareNumber,
}

/// Priority order. More specific shapes go first so `18mm x 50mm` is never read as
/// a bare number.
pub const SUFFIX_PATTERNS: [SuffixPattern; 3] = [
    SuffixPattern::Dimension,
    SuffixPattern::NumberedMarker,
    SuffixPattern::BareNumber,
];

impl SuffixPattern {
    fn regex(self) -> &'static Regex {
        match self {
            SuffixPattern::Dimension => LazyLock::force(&DIMENSION),
            SuffixPattern::NumberedMarker => LazyLock::force(&NUMBERED_MARKER),
            SuffixPattern::BareNumber => LazyLock::force(&BARE_NUMBER),
        }
    }

    /// Whether `name` ends in this shape, whatever the digits or the residual.
    pub fn matches(self, name: &str) -> bool {
        self.regex().is_match(name)
    }

    /// Returns the residual name and the captured number if `name` ends in this shape.
    ///
    /// A match that would leave nothing behind, or whose digits overflow, gives `None`.
    pub fn strip(self, name: &str) -> Option<(&str, u64)> {
        let captures = self.regex().captures(name)?;
        let number = captures.get(1)?.as_str().parse().ok()?;
        let residual = name[..captures.get(0)?.start()].trim();

        (!residual.is_empty()).then_some((residual, number))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub base_name: String,
    pub variant_number: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedItem {
    pub item: CatalogItem,
    pub variant_number: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantGroup {
    pub base_name: String,
    pub members: Vec<ExtractedItem>,
    pub is_grouped: bool,
    pub first_number: Option<u64>,
    pub last_number: Option<u64>,
}

/// Members of one group in variant order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSelection {
    /// Base name as spelled by the first matching item.
    pub display_name: String,
    pub members: Vec<ExtractedItem>,
    pub first_number: Option<u64>,
    pub last_number: Option<u64>,
}

impl GroupSelection {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn strip_code_prefix(name: &str) -> &str {
    match CODE_PREFIX.find(name) {
        Some(prefix) if !name[prefix.end()..].trim().is_empty() => name[prefix.end()..].trim(),
        _ => name,
    }
}

pub fn extract_base_name_and_variant(name: &str) -> ExtractionResult {
    let name = strip_code_prefix(name.trim());

    // the first shape that matches decides, even when it cannot be stripped
    match SUFFIX_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(name))
        .and_then(|pattern| pattern.strip(name))
    {
        Some((base_name, number)) => ExtractionResult {
            base_name: base_name.to_string(),
            variant_number: Some(number),
        },
        None => ExtractionResult {
            base_name: name.to_string(),
            variant_number: None,
        },
    }
}

/// Key two base names are grouped under.
pub fn group_key(base_name: &str) -> String {
    base_name.trim().to_lowercase()
}

fn extract_item(item: &CatalogItem) -> (String, ExtractedItem) {
    let extraction = extract_base_name_and_variant(&item.name);

    (
        extraction.base_name,
        ExtractedItem {
            item: item.clone(),
            variant_number: extraction.variant_number,
        },
    )
}

/// Smallest and largest strictly positive variant number.
fn number_range(members: &[ExtractedItem]) -> (Option<u64>, Option<u64>) {
    let positive = || {
        members
            .iter()
            .filter_map(|member| member.variant_number)
            .filter(|&number| number > 0)
    };

    (positive().min(), positive().max())
}

pub fn group_by_base_name(items: &[CatalogItem]) -> Vec<VariantGroup> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<VariantGroup> = Vec::new();

    for item in items {
        let (base_name, member) = extract_item(item);

        match positions.entry(group_key(&base_name)) {
            Entry::Vacant(entry) => {
                entry.insert(groups.len());

                groups.push(VariantGroup {
                    base_name,
                    members: vec![member],
                    is_grouped: false,
                    first_number: None,
                    last_number: None,
                });
            }
            Entry::Occupied(entry) => {
                groups[*entry.get()].members.push(member);
            }
        }
    }

    for group in &mut groups {
        group.is_grouped = group.members.len() > 1;
        (group.first_number, group.last_number) = number_range(&group.members);
    }

    groups
}

pub fn filter_group_by_base_name(items: &[CatalogItem], target_base_name: &str) -> GroupSelection {
    let target = group_key(target_base_name);

    let matches: Vec<(String, ExtractedItem)> = items
        .iter()
        .map(extract_item)
        .filter(|(base_name, _)| group_key(base_name) == target)
        .collect();

    let display_name = matches
        .first()
        .map(|(base_name, _)| base_name.clone())
        .unwrap_or_default();
    let mut members: Vec<ExtractedItem> = matches.into_iter().map(|(_, member)| member).collect();

    // stable, ties keep input order
    members.sort_by_key(|member| member.variant_number.unwrap_or(0));

    let (first_number, last_number) = number_range(&members);

    GroupSelection {
        display_name,
        members,
        first_number,
        last_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn item(id: i64, name: &str) -> CatalogItem {
        CatalogItem::new(ItemId::Int(id), name)
    }

    fn extracted(name: &str) -> (String, Option<u64>) {
        let result = extract_base_name_and_variant(name);
        (result.base_name, result.variant_number)
    }

    #[test]
    fn test_code_prefix_and_dimension() {
        assert_eq!(
            extracted("ASS185 - Cureta 18mm x 50mm"),
            ("Cureta".to_string(), Some(50))
        );
        assert_eq!(
            extracted("ab12-Pinça Goiva 3mm X 180mm"),
            ("Pinça Goiva".to_string(), Some(180))
        );
    }

    #[test]
    fn test_single_dimension() {
        assert_eq!(
            extracted("Fio Guia 3 x 50mm"),
            ("Fio Guia 3".to_string(), Some(50))
        );
    }

    #[test]
    fn test_numbered_markers() {
        assert_eq!(
            extracted("Afastador Hohmann Nº3"),
            ("Afastador Hohmann".to_string(), Some(3))
        );
        assert_eq!(
            extracted("Afastador Hohmann N° 4"),
            ("Afastador Hohmann".to_string(), Some(4))
        );
        assert_eq!(
            extracted("Cureta Bushe nº12"),
            ("Cureta Bushe".to_string(), Some(12))
        );
        assert_eq!(
            extracted("Dilatador Hegar #7"),
            ("Dilatador Hegar".to_string(), Some(7))
        );
    }

    #[test]
    fn test_bare_trailing_number() {
        assert_eq!(
            extracted("Pinça Kerrison 2"),
            ("Pinça Kerrison".to_string(), Some(2))
        );
        assert_eq!(
            extracted("  Pinça Kerrison 2  "),
            ("Pinça Kerrison".to_string(), Some(2))
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            extracted("Afastador Abdominal All Path"),
            ("Afastador Abdominal All Path".to_string(), None)
        );
        assert_eq!(extracted("  Maca  "), ("Maca".to_string(), None));
        assert_eq!(extracted(""), (String::new(), None));
    }

    #[test]
    fn test_marker_beats_bare_number() {
        assert_eq!(
            SUFFIX_PATTERNS
                .iter()
                .find_map(|pattern| pattern.strip("Cureta Nº 3").map(|_| *pattern)),
            Some(SuffixPattern::NumberedMarker)
        );
        assert_eq!(
            SUFFIX_PATTERNS
                .iter()
                .find_map(|pattern| pattern.strip("Cureta 18mm x 50mm").map(|_| *pattern)),
            Some(SuffixPattern::Dimension)
        );
    }

    #[test]
    fn test_base_name_never_empty() {
        assert_eq!(extracted("Nº3"), ("Nº3".to_string(), None));
        assert_eq!(extracted("ASS185 - "), ("ASS185 -".to_string(), None));
        assert_eq!(extracted("2"), ("2".to_string(), None));
    }

    #[test]
    fn test_bare_marker_is_not_a_bare_number() {
        assert_eq!(extracted("Nº 3"), ("Nº 3".to_string(), None));
        assert_eq!(extracted("# 3"), ("# 3".to_string(), None));
        assert_eq!(extracted("ASS185 - N° 3"), ("N° 3".to_string(), None));
    }

    #[test]
    fn test_long_variant_numbers() {
        assert_eq!(
            extracted("Cureta Nº 99999999999"),
            ("Cureta".to_string(), Some(99_999_999_999))
        );
        assert_eq!(
            extracted("Serra 99999999999999999999999"),
            ("Serra 99999999999999999999999".to_string(), None)
        );
        assert_eq!(
            extracted("Cureta Nº 99999999999999999999999"),
            ("Cureta Nº 99999999999999999999999".to_string(), None)
        );
    }

    #[test]
    fn test_accents_preserved() {
        assert_eq!(
            extracted("Espéculo Vaginal Descartável Nº2"),
            ("Espéculo Vaginal Descartável".to_string(), Some(2))
        );
    }

    #[test]
    fn test_base_name_is_fixed_point() {
        for name in [
            "ASS185 - Cureta 18mm x 50mm",
            "Afastador Hohmann Nº3",
            "Pinça Kerrison 2",
            "Afastador Abdominal All Path",
        ] {
            let base_name = extract_base_name_and_variant(name).base_name;
            let again = extract_base_name_and_variant(&base_name);

            assert_eq!(again.base_name, base_name);
            assert_eq!(again.variant_number, None);
        }
    }

    #[test]
    fn test_model_year_reads_as_variant() {
        // pinned heuristic: trailing model numbers are indistinguishable from variants
        assert_eq!(
            extracted("Monitor Multiparamétrico Dixtal 2020"),
            ("Monitor Multiparamétrico Dixtal".to_string(), Some(2020))
        );
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let items = vec![
            item(1, "Cureta Bushe Nº1"),
            item(2, "Maca Hospitalar"),
            item(3, "CURETA BUSHE Nº2"),
            item(4, "Pinça Kerrison 2"),
            item(5, "Pinça Kerrison 1"),
        ];

        let groups = group_by_base_name(&items);
        let names: Vec<&str> = groups.iter().map(|g| g.base_name.as_str()).collect();

        assert_eq!(names, vec!["Cureta Bushe", "Maca Hospitalar", "Pinça Kerrison"]);

        assert!(groups[0].is_grouped);
        assert_eq!(groups[0].members.len(), 2);
        assert_eq!(groups[0].members[1].item.id, ItemId::Int(3));
        assert_eq!((groups[0].first_number, groups[0].last_number), (Some(1), Some(2)));

        assert!(!groups[1].is_grouped);
        assert_eq!((groups[1].first_number, groups[1].last_number), (None, None));

        let ids: Vec<&ItemId> = groups[2].members.iter().map(|m| &m.item.id).collect();
        assert_eq!(ids, vec![&ItemId::Int(4), &ItemId::Int(5)]);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let items = vec![
            item(1, "Pinça Kerrison 3"),
            item(2, "Afastador Hohmann Nº1"),
            item(3, "Pinça Kerrison 1"),
            item(4, "Afastador Hohmann Nº2"),
        ];

        assert_eq!(group_by_base_name(&items), group_by_base_name(&items));
    }

    #[test]
    fn test_grouping_empty_and_blank_names() {
        assert!(group_by_base_name(&[]).is_empty());

        let groups = group_by_base_name(&[item(1, ""), item(2, "   ")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].base_name, "");
        assert!(groups[0].is_grouped);
    }

    #[test]
    fn test_range_skips_zero_and_none() {
        let items = vec![
            item(1, "Cânula 0"),
            item(2, "Cânula 2"),
            item(3, "Cânula"),
            item(4, "Cânula 5"),
        ];

        let groups = group_by_base_name(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].first_number, groups[0].last_number), (Some(2), Some(5)));

        let selection = filter_group_by_base_name(&items, "cânula");
        assert_eq!((selection.first_number, selection.last_number), (Some(2), Some(5)));
    }

    #[test]
    fn test_filter_sorts_stably_with_none_first() {
        let items = vec![
            item(1, "Trocarte"),
            item(2, "Trocarte 1"),
            item(3, "trocarte"),
            item(4, "Bisturi 1"),
        ];

        let selection = filter_group_by_base_name(&items, "Trocarte");
        let ids: Vec<&ItemId> = selection.members.iter().map(|m| &m.item.id).collect();

        assert_eq!(ids, vec![&ItemId::Int(1), &ItemId::Int(3), &ItemId::Int(2)]);
        assert_eq!(selection.display_name, "Trocarte");
        assert_eq!((selection.first_number, selection.last_number), (Some(1), Some(1)));
    }

    #[test]
    fn test_filter_orders_by_variant_number() {
        let items = vec![
            item(1, "Afastador Hohmann Nº10"),
            item(2, "Afastador Hohmann Nº2"),
            item(3, "AFASTADOR HOHMANN Nº0"),
        ];

        let selection = filter_group_by_base_name(&items, " afastador hohmann ");
        let numbers: Vec<Option<u64>> = selection.members.iter().map(|m| m.variant_number).collect();

        assert_eq!(numbers, vec![Some(0), Some(2), Some(10)]);
        assert_eq!(selection.display_name, "Afastador Hohmann");
        assert_eq!((selection.first_number, selection.last_number), (Some(2), Some(10)));
    }

    #[test]
    fn test_filter_missing_group() {
        let selection = filter_group_by_base_name(&[item(1, "Maca")], "Cadeira de Rodas");

        assert!(selection.is_empty());
        assert_eq!(selection.display_name, "");
        assert_eq!((selection.first_number, selection.last_number), (None, None));
    }
}

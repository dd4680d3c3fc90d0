//! Gender and modesty rules over candidate item lists.
//!
//! Items are matched by case-sensitive substring against the catalog's
//! Indonesian item names, so the marker tables below must follow the
//! catalog's spelling.

use crate::model::Occasion;
use rand::Rng;

/// Substrings marking an item as feminine-coded.
pub const FEMININE_MARKERS: &[&str] = &["Blus", "Rok", "Dress", "Crop top"];

/// Substrings marking an item as not modest.
pub const IMMODEST_MARKERS: &[&str] = &[
    "Crop top",
    "Tank top",
    "Singlet",
    "Rok mini",
    "Celana pendek",
];

/// Tops offered when modesty filtering leaves none.
pub const MODEST_TOPS: &[&str] = &[
    "Kemeja lengan panjang",
    "Blus tertutup",
    "Kaos lengan panjang",
];

/// Bottoms offered when modesty filtering leaves none.
pub const MODEST_BOTTOMS: &[&str] = &["Celana panjang", "Rok panjang", "Celana kulot"];

fn contains_any(item: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| item.contains(m))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Drop feminine-coded items.
pub fn strip_feminine(items: &mut Vec<String>) {
    items.retain(|item| !contains_any(item, FEMININE_MARKERS));
}

/// Append occasion-specific feminine options.
///
/// Formal and casual additions happen on a coin flip; sports additions
/// always happen and only touch tops.
pub fn add_feminine<R: Rng + ?Sized>(
    occasion: Occasion,
    tops: &mut Vec<String>,
    bottoms: &mut Vec<String>,
    rng: &mut R,
) {
    match occasion {
        Occasion::Formal => {
            if rng.gen_bool(0.5) {
                tops.extend(owned(&["Blus formal", "Kemeja feminine"]));
                bottoms.extend(owned(&["Rok pensil", "Dress formal"]));
            }
        }
        Occasion::Casual => {
            if rng.gen_bool(0.5) {
                tops.extend(owned(&["Blus casual", "Crop top stylish"]));
                bottoms.extend(owned(&["Rok casual", "Dress santai"]));
            }
        }
        Occasion::Sports => {
            tops.extend(owned(&["Sport bra", "Tank top feminine"]));
        }
    }
}

/// Drop immodest items, refilling a list with modest defaults if it ends up
/// empty.
pub fn apply_modesty(tops: &mut Vec<String>, bottoms: &mut Vec<String>) {
    tops.retain(|item| !contains_any(item, IMMODEST_MARKERS));
    bottoms.retain(|item| !contains_any(item, IMMODEST_MARKERS));

    if tops.is_empty() {
        *tops = owned(MODEST_TOPS);
    }
    if bottoms.is_empty() {
        *bottoms = owned(MODEST_BOTTOMS);
    }
}

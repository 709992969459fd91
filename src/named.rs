//! Built-in base colors used by the name heuristic.
//!
//! Names like `wool:dark_green` or `mymod:my_red_node` carry their color in
//! the identifier. The heuristic scans this table in declared order and the
//! last matching entry wins, so the result never depends on hash order.

use crate::color::Rgba;

/// Base colors in match order.
pub const BASE_COLORS: [(&str, Rgba); 14] = [
    ("black", Rgba::opaque(32, 32, 32)),
    ("blue", Rgba::opaque(59, 68, 93)),
    ("grey", Rgba::opaque(150, 148, 149)),
    ("gray", Rgba::opaque(150, 148, 149)),
    ("green", Rgba::opaque(93, 112, 70)),
    ("orange", Rgba::opaque(154, 116, 75)),
    ("pink", Rgba::opaque(183, 150, 160)),
    ("brown", Rgba::opaque(48, 39, 31)),
    ("cyan", Rgba::opaque(60, 96, 100)),
    ("magenta", Rgba::opaque(118, 93, 119)),
    ("red", Rgba::opaque(107, 54, 53)),
    ("violet", Rgba::opaque(70, 52, 83)),
    ("white", Rgba::opaque(231, 223, 225)),
    ("yellow", Rgba::opaque(155, 136, 75)),
];

/// How a name referenced a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// `dark_<color>` or `<color>_dark`
    Dark,
    /// `<color>_` or `_<color>`
    Normal,
}

/// Look up a base color by its exact name.
pub fn base_color(name: &str) -> Option<Rgba> {
    BASE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

/// Check whether `name` references the base color `scname`, and how.
///
/// The dark forms are tested first, so `dark_red` is `Dark` even though it
/// also contains `_red`.
pub fn match_shade(name: &str, scname: &str) -> Option<Shade> {
    if name.contains(&format!("dark_{scname}")) || name.contains(&format!("{scname}_dark")) {
        Some(Shade::Dark)
    } else if name.contains(&format!("{scname}_")) || name.contains(&format!("_{scname}")) {
        Some(Shade::Normal)
    } else {
        None
    }
}

/// Find the last base color referenced by `name`, in table order.
pub fn find_match(name: &str) -> Option<(&'static str, Rgba, Shade)> {
    BASE_COLORS
        .iter()
        .rev()
        .find_map(|(scname, sc)| match_shade(name, scname).map(|shade| (*scname, *sc, shade)))
}

//! Plain-text rack elevations.
//!
//! The text counterpart of the original's image capture: one line per
//! unit, top of the rack first, occupied units labeled with the
//! component's name and extent. Pixel capture stays out of scope; this
//! renders from the same read-only snapshot the other exporters use.

use rackstack_model::Rack;
use std::fmt::Write as _;

/// Render a rack as a unit-per-line elevation diagram.
///
/// ```text
/// Main (42U)
///  42 | web-1 (2U)
///  41 | web-1 (2U)
///  40 |
/// ...
/// ```
#[must_use]
pub fn render_elevation(rack: &Rack) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}U)", rack.name, rack.height);
    for unit in (1..=rack.height).rev() {
        let occupant = rack
            .components
            .iter()
            .find(|c| c.occupied_range().contains(unit));
        match occupant {
            Some(c) => {
                let _ = writeln!(out, "{unit:>3} | {} ({}U)", c.name, c.height);
            }
            None => {
                let _ = writeln!(out, "{unit:>3} |");
            }
        }
    }
    out
}

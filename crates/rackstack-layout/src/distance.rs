//! Vertical distance between placed components.
//!
//! Two 1U items compare center to center; once either item spans
//! multiple units the answer is a min/max gap pair over the occupied
//! spans, collapsed back to a single value when the two agree to within
//! a tenth of the output unit.
//!
//! A component occupies the continuous vertical span
//! `[position - 1, position + height - 1]` in rack units: one unit of
//! rack space per unit of height, with the bottom edge of slot 1 at 0.

use rackstack_model::Component;

/// Output unit for distance values. The conversion factor applies after
/// the raw rack-unit distance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Rack units.
    #[default]
    U,
    /// Centimeters; 1U = 4.445 cm.
    Centimeters,
    /// Inches; 1U = 1.75 in.
    Inches,
}

impl Unit {
    /// Multiplier from rack units to this unit.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::U => 1.0,
            Self::Centimeters => 4.445,
            Self::Inches => 1.75,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::U => "U",
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

/// Distance between two components: a single value, or a closed
/// `[min, max]` interval when the items' extents make the spacing
/// ambiguous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Exact(f64),
    Range { min: f64, max: f64 },
}

impl Distance {
    /// Smallest spacing consistent with the two extents.
    #[must_use]
    pub fn min(self) -> f64 {
        match self {
            Self::Exact(v) => v,
            Self::Range { min, .. } => min,
        }
    }

    /// Largest spacing consistent with the two extents.
    #[must_use]
    pub fn max(self) -> f64 {
        match self {
            Self::Exact(v) => v,
            Self::Range { max, .. } => max,
        }
    }
}

impl std::fmt::Display for Distance {
    /// Rendered to one decimal place, `min-max` for ranges.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v:.1}"),
            Self::Range { min, max } => write!(f, "{min:.1}-{max:.1}"),
        }
    }
}

/// Distance between two placed components in the given unit.
///
/// Symmetric in its arguments. Both items 1U tall compare center to
/// center; otherwise the result is the min/max edge gap between the two
/// occupied spans, collapsed to [`Distance::Exact`] when min and max
/// agree to within 0.1 post-conversion.
#[must_use]
pub fn distance(a: &Component, b: &Component, unit: Unit) -> Distance {
    let factor = unit.factor();

    if a.height.max(1) == 1 && b.height.max(1) == 1 {
        let center_a = f64::from(a.position) + 0.5;
        let center_b = f64::from(b.position) + 0.5;
        return Distance::Exact((center_a - center_b).abs() * factor);
    }

    let ra = a.occupied_range();
    let rb = b.occupied_range();
    let (min_gap, max_gap) = if ra.overlaps(rb) {
        let span = f64::from(ra.end.max(rb.end)) - f64::from(ra.start.min(rb.start) - 1);
        (0.0, span)
    } else {
        let (lower, upper) = if ra.end < rb.start { (ra, rb) } else { (rb, ra) };
        let min = f64::from(upper.start - 1) - f64::from(lower.end);
        let max = f64::from(upper.end) - f64::from(lower.start - 1);
        (min, max)
    };

    let min = min_gap * factor;
    let max = max_gap * factor;
    if (min - max).abs() < 0.1 {
        Distance::Exact(min)
    } else {
        Distance::Range { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackstack_model::{ComponentType, Metadata};

    fn component(position: u32, height: u32) -> Component {
        Component {
            id: format!("component-{position}-{height}"),
            name: "c".into(),
            height,
            position,
            kind: ComponentType::Compute,
            color: None,
            weight: None,
            metadata: Metadata::default(),
            network_interfaces: Vec::new(),
            tags: Vec::new(),
            sub_components: Vec::new(),
            pdu_config: None,
            ethernet_config: None,
        }
    }

    // === 1U center-to-center ===

    #[test]
    fn single_unit_items_compare_centers() {
        let a = component(10, 1);
        let b = component(20, 1);
        assert_eq!(distance(&a, &b, Unit::U), Distance::Exact(10.0));
        assert_eq!(distance(&a, &b, Unit::Inches), Distance::Exact(17.5));
    }

    #[test]
    fn centimeter_conversion() {
        let a = component(1, 1);
        let b = component(3, 1);
        let Distance::Exact(v) = distance(&a, &b, Unit::Centimeters) else {
            panic!("expected exact distance");
        };
        assert!((v - 8.89).abs() < 1e-9);
    }

    #[test]
    fn same_slot_single_units_are_zero() {
        let a = component(5, 1);
        let b = component(5, 1);
        assert_eq!(distance(&a, &b, Unit::U), Distance::Exact(0.0));
    }

    // === extended items ===

    #[test]
    fn disjoint_extended_items_report_a_range() {
        // A=[5,6], B=[10,12]: nearest edges 3 units apart, farthest 8.
        let a = component(5, 2);
        let b = component(10, 3);
        assert_eq!(
            distance(&a, &b, Unit::U),
            Distance::Range { min: 3.0, max: 8.0 }
        );
    }

    #[test]
    fn adjacent_extended_items_have_zero_min_gap() {
        // A=[5,6], B=[7,8]: touching edges.
        let a = component(5, 2);
        let b = component(7, 2);
        assert_eq!(
            distance(&a, &b, Unit::U),
            Distance::Range { min: 0.0, max: 4.0 }
        );
    }

    #[test]
    fn overlapping_items_have_zero_min() {
        // A=[5,8], B=[7,8].
        let a = component(5, 4);
        let b = component(7, 2);
        assert_eq!(
            distance(&a, &b, Unit::U),
            Distance::Range { min: 0.0, max: 4.0 }
        );
    }

    #[test]
    fn extended_ranges_convert_after_gap_math() {
        let a = component(5, 2);
        let b = component(10, 3);
        let d = distance(&a, &b, Unit::Inches);
        assert_eq!(d, Distance::Range { min: 5.25, max: 14.0 });
    }

    #[test]
    fn distance_is_symmetric() {
        let a = component(5, 2);
        let b = component(10, 3);
        for unit in [Unit::U, Unit::Centimeters, Unit::Inches] {
            assert_eq!(distance(&a, &b, unit), distance(&b, &a, unit));
        }
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(Distance::Exact(17.5).to_string(), "17.5");
        assert_eq!(
            Distance::Range { min: 3.0, max: 8.0 }.to_string(),
            "3.0-8.0"
        );
        assert_eq!(Distance::Exact(8.89).to_string(), "8.9");
    }
}

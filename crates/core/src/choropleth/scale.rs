//! Logarithmic colour scale for the state map.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

use super::color::{HIGH_FILL, LOW_FILL, Rgb};

/// Maps totals onto a colour ramp on a log scale.
///
/// The domain is the smallest and largest positive total. Values are
/// interpolated channel by channel on `ln(value)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogColorScale {
    min: Decimal,
    max: Decimal,
    #[serde(skip)]
    ln_min: Decimal,
    #[serde(skip)]
    ln_span: Decimal,
    low: Rgb,
    high: Rgb,
}

impl LogColorScale {
    /// Builds the default green ramp over the positive values in `totals`.
    ///
    /// Returns `None` when there is no positive value to anchor the scale.
    #[must_use]
    pub fn from_totals(totals: impl IntoIterator<Item = Decimal>) -> Option<Self> {
        Self::with_range(totals, LOW_FILL, HIGH_FILL)
    }

    /// Builds a scale with a custom colour range.
    #[must_use]
    pub fn with_range(
        totals: impl IntoIterator<Item = Decimal>,
        low: Rgb,
        high: Rgb,
    ) -> Option<Self> {
        let (min, max) = totals
            .into_iter()
            .filter(|v| *v > Decimal::ZERO)
            .fold(None, |extent, v| match extent {
                None => Some((v, v)),
                Some((lo, hi)) => Some((std::cmp::min(lo, v), std::cmp::max(hi, v))),
            })?;

        let ln_min = min.ln();
        Some(Self {
            min,
            max,
            ln_min,
            ln_span: max.ln() - ln_min,
            low,
            high,
        })
    }

    /// Lower end of the domain.
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Upper end of the domain.
    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }

    /// Colour for `value`, or `None` when its logarithm is undefined.
    ///
    /// Values outside the domain are clamped to the nearest end.
    #[must_use]
    pub fn color_for(&self, value: Decimal) -> Option<Rgb> {
        if value <= Decimal::ZERO {
            return None;
        }
        if self.ln_span.is_zero() {
            return Some(self.low);
        }

        let t = ((value.ln() - self.ln_min) / self.ln_span).clamp(Decimal::ZERO, Decimal::ONE);
        Some(Rgb::new(
            lerp(self.low.r, self.high.r, t),
            lerp(self.low.g, self.high.g, t),
            lerp(self.low.b, self.high.b, t),
        ))
    }
}

fn lerp(from: u8, to: u8, t: Decimal) -> u8 {
    let from_d = Decimal::from(from);
    let value = from_d + (Decimal::from(to) - from_d) * t;
    value.round().to_u8().unwrap_or(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_endpoints_map_to_range() {
        let scale = LogColorScale::from_totals([dec!(10), dec!(1000), dec!(100)]).unwrap();
        assert_eq!(scale.min(), dec!(10));
        assert_eq!(scale.max(), dec!(1000));
        assert_eq!(scale.color_for(dec!(10)), Some(LOW_FILL));
        assert_eq!(scale.color_for(dec!(1000)), Some(HIGH_FILL));
    }

    #[test]
    fn test_midpoint_is_geometric() {
        let low = Rgb::new(0, 0, 0);
        let high = Rgb::new(200, 100, 50);
        let scale = LogColorScale::with_range([dec!(1), dec!(10000)], low, high).unwrap();
        // 100 is halfway between 1 and 10000 in log space.
        assert_eq!(scale.color_for(dec!(100)), Some(Rgb::new(100, 50, 25)));
    }

    #[test]
    fn test_non_positive_values_have_no_colour() {
        let scale = LogColorScale::from_totals([dec!(1), dec!(5)]).unwrap();
        assert_eq!(scale.color_for(Decimal::ZERO), None);
        assert_eq!(scale.color_for(dec!(-3)), None);
    }

    #[test]
    fn test_zero_totals_ignored_for_domain() {
        let scale = LogColorScale::from_totals([Decimal::ZERO, dec!(2), dec!(8)]).unwrap();
        assert_eq!(scale.min(), dec!(2));
    }

    #[test]
    fn test_empty_or_all_zero_has_no_scale() {
        assert!(LogColorScale::from_totals([]).is_none());
        assert!(LogColorScale::from_totals([Decimal::ZERO]).is_none());
    }

    #[test]
    fn test_degenerate_domain_uses_low_colour() {
        let scale = LogColorScale::from_totals([dec!(42), dec!(42)]).unwrap();
        assert_eq!(scale.color_for(dec!(42)), Some(LOW_FILL));
    }

    #[test]
    fn test_out_of_domain_clamped() {
        let scale = LogColorScale::from_totals([dec!(10), dec!(100)]).unwrap();
        assert_eq!(scale.color_for(dec!(1)), Some(LOW_FILL));
        assert_eq!(scale.color_for(dec!(5000)), Some(HIGH_FILL));
    }

    #[test]
    fn test_per_capita_sized_values() {
        let scale = LogColorScale::from_totals([dec!(0.0123), dec!(4.56)]).unwrap();
        assert!(scale.color_for(dec!(1)).is_some());
    }
}

//! Calculation parameters: the full configuration of one prayer-time computation.

use crate::error::check_depression_angles;
use crate::method::CalculationMethod;
use crate::types::{HighLatitudeRule, Madhab, PrayerAdjustments, Rounding, Shafaq};
use crate::Result;

/// Immutable bundle of everything that shapes a schedule apart from place and date.
///
/// Built from a [`CalculationMethod`] preset or from explicit angles, then refined with the
/// consuming `with_*` methods.
///
/// # Example
/// ```
/// # use miqat::{CalculationMethod, CalculationParameters, HighLatitudeRule, Madhab};
/// let params = CalculationParameters::from_method(CalculationMethod::MuslimWorldLeague)
///     .unwrap()
///     .with_madhab(Madhab::Hanafi)
///     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);
///
/// assert_eq!(params.fajr_angle(), 18.0);
/// assert_eq!(params.isha_angle(), 17.0);
/// assert_eq!(params.madhab(), Madhab::Hanafi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationParameters {
    method: CalculationMethod,
    fajr_angle: f64,
    isha_angle: f64,
    isha_interval: u32,
    madhab: Madhab,
    high_latitude_rule: HighLatitudeRule,
    adjustments: PrayerAdjustments,
    method_adjustments: PrayerAdjustments,
    rounding: Rounding,
    shafaq: Shafaq,
}

impl CalculationParameters {
    /// Creates parameters from a method preset.
    ///
    /// Angles, isha interval and the method's own minute offsets come from the preset;
    /// madhab, high-latitude rule, user adjustments, rounding and shafaq start at their defaults.
    ///
    /// # Errors
    /// Returns `InvalidFajrAngle` for [`CalculationMethod::Other`], which has no angles of its
    /// own. Use [`CalculationParameters::new`] to supply them.
    pub fn from_method(method: CalculationMethod) -> Result<Self> {
        let preset = method.preset();
        check_depression_angles(preset.fajr_angle, preset.isha_angle, preset.isha_interval)?;
        Ok(Self {
            method,
            fajr_angle: preset.fajr_angle,
            isha_angle: preset.isha_angle,
            isha_interval: preset.isha_interval,
            madhab: Madhab::Shafi,
            high_latitude_rule: HighLatitudeRule::MiddleOfTheNight,
            adjustments: PrayerAdjustments::zero(),
            method_adjustments: preset.adjustments,
            rounding: Rounding::Nearest,
            shafaq: Shafaq::General,
        })
    }

    /// Creates parameters with caller-supplied angles under [`CalculationMethod::Other`].
    ///
    /// `isha_interval` is in minutes after maghrib; 0 means isha follows `isha_angle`, and
    /// `isha_angle` may then be 0 only if an interval is given.
    ///
    /// # Errors
    /// Returns `InvalidFajrAngle` or `InvalidIshaAngle` when an angle is not strictly between
    /// 0° and 90°.
    pub fn new(fajr_angle: f64, isha_angle: f64, isha_interval: u32) -> Result<Self> {
        check_depression_angles(fajr_angle, isha_angle, isha_interval)?;
        Ok(Self {
            method: CalculationMethod::Other,
            fajr_angle,
            isha_angle,
            isha_interval,
            madhab: Madhab::Shafi,
            high_latitude_rule: HighLatitudeRule::MiddleOfTheNight,
            adjustments: PrayerAdjustments::zero(),
            method_adjustments: PrayerAdjustments::zero(),
            rounding: Rounding::Nearest,
            shafaq: Shafaq::General,
        })
    }

    /// Copy with a different madhab.
    #[must_use]
    pub const fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    /// Copy with a different high-latitude rule.
    #[must_use]
    pub const fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Copy with different user adjustments.
    #[must_use]
    pub const fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Copy with the method's own offsets replaced.
    #[must_use]
    pub const fn with_method_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.method_adjustments = adjustments;
        self
    }

    /// Copy with a different minute rounding.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Copy with a different twilight glow for the moonsighting isha table.
    #[must_use]
    pub const fn with_shafaq(mut self, shafaq: Shafaq) -> Self {
        self.shafaq = shafaq;
        self
    }

    /// Gets the calculation method.
    #[must_use]
    pub const fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Gets the fajr depression angle in degrees.
    #[must_use]
    pub const fn fajr_angle(&self) -> f64 {
        self.fajr_angle
    }

    /// Gets the isha depression angle in degrees.
    #[must_use]
    pub const fn isha_angle(&self) -> f64 {
        self.isha_angle
    }

    /// Gets the fixed isha interval in minutes after maghrib, 0 when isha follows the angle.
    #[must_use]
    pub const fn isha_interval(&self) -> u32 {
        self.isha_interval
    }

    /// Gets the madhab.
    #[must_use]
    pub const fn madhab(&self) -> Madhab {
        self.madhab
    }

    /// Gets the high-latitude rule.
    #[must_use]
    pub const fn high_latitude_rule(&self) -> HighLatitudeRule {
        self.high_latitude_rule
    }

    /// Gets the user adjustments.
    #[must_use]
    pub const fn adjustments(&self) -> PrayerAdjustments {
        self.adjustments
    }

    /// Gets the method's own offsets.
    #[must_use]
    pub const fn method_adjustments(&self) -> PrayerAdjustments {
        self.method_adjustments
    }

    /// Gets the minute rounding.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Gets the twilight glow for the moonsighting isha table.
    #[must_use]
    pub const fn shafaq(&self) -> Shafaq {
        self.shafaq
    }

    /// Gets the fractions of the night that bound fajr and isha under the high-latitude rule.
    ///
    /// Returns `(fajr_portion, isha_portion)`. Twilight-angle portions are `angle / 60`, capped
    /// at the whole night.
    #[must_use]
    pub fn night_portions(&self) -> (f64, f64) {
        match self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => (0.5, 0.5),
            HighLatitudeRule::SeventhOfTheNight => (1.0 / 7.0, 1.0 / 7.0),
            HighLatitudeRule::TwilightAngle => (
                (self.fajr_angle / 60.0).min(1.0),
                (self.isha_angle / 60.0).min(1.0),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prayer;
    use crate::Error;

    #[test]
    fn test_from_method_reads_back_preset() {
        for method in CalculationMethod::ALL {
            if method == CalculationMethod::Other {
                continue;
            }
            let params = CalculationParameters::from_method(method).unwrap();
            let preset = method.preset();
            assert_eq!(params.method(), method);
            assert_eq!(params.fajr_angle(), preset.fajr_angle);
            assert_eq!(params.isha_angle(), preset.isha_angle);
            assert_eq!(params.isha_interval(), preset.isha_interval);
            assert_eq!(params.method_adjustments(), preset.adjustments);
            assert_eq!(params.adjustments(), PrayerAdjustments::zero());
            assert_eq!(params.madhab(), Madhab::Shafi);
            assert_eq!(params.high_latitude_rule(), HighLatitudeRule::MiddleOfTheNight);
            assert_eq!(params.rounding(), Rounding::Nearest);
            assert_eq!(params.shafaq(), Shafaq::General);
        }
    }

    #[test]
    fn test_other_method_requires_angles() {
        assert_eq!(
            CalculationParameters::from_method(CalculationMethod::Other),
            Err(Error::invalid_fajr_angle(0.0))
        );
        let params = CalculationParameters::new(16.0, 14.0, 0).unwrap();
        assert_eq!(params.method(), CalculationMethod::Other);
        assert_eq!(params.method_adjustments(), PrayerAdjustments::zero());
    }

    #[test]
    fn test_new_validates_angles() {
        assert_eq!(
            CalculationParameters::new(0.0, 15.0, 0),
            Err(Error::invalid_fajr_angle(0.0))
        );
        assert_eq!(
            CalculationParameters::new(15.0, -1.0, 0),
            Err(Error::invalid_isha_angle(-1.0))
        );
        assert!(CalculationParameters::new(18.5, 0.0, 90).is_ok());
        assert!(CalculationParameters::new(18.5, 0.0, 0).is_err());
    }

    #[test]
    fn test_builders_return_modified_copies() {
        let base = CalculationParameters::from_method(CalculationMethod::NorthAmerica).unwrap();
        let adjustments = PrayerAdjustments::zero().with(Prayer::Fajr, 2);
        let changed = base
            .with_madhab(Madhab::Hanafi)
            .with_high_latitude_rule(HighLatitudeRule::TwilightAngle)
            .with_adjustments(adjustments)
            .with_rounding(Rounding::Up)
            .with_shafaq(Shafaq::Abyad)
            .with_method_adjustments(PrayerAdjustments::zero());

        assert_eq!(base.madhab(), Madhab::Shafi);
        assert_eq!(changed.madhab(), Madhab::Hanafi);
        assert_eq!(changed.high_latitude_rule(), HighLatitudeRule::TwilightAngle);
        assert_eq!(changed.adjustments(), adjustments);
        assert_eq!(changed.rounding(), Rounding::Up);
        assert_eq!(changed.shafaq(), Shafaq::Abyad);
        assert_eq!(changed.method_adjustments(), PrayerAdjustments::zero());
        assert_eq!(changed.fajr_angle(), base.fajr_angle());
    }

    #[test]
    fn test_night_portions() {
        let params = CalculationParameters::from_method(CalculationMethod::MuslimWorldLeague)
            .unwrap();
        assert_eq!(params.night_portions(), (0.5, 0.5));

        let seventh = params.with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);
        assert_eq!(seventh.night_portions(), (1.0 / 7.0, 1.0 / 7.0));

        let twilight = params.with_high_latitude_rule(HighLatitudeRule::TwilightAngle);
        assert_eq!(twilight.night_portions(), (18.0 / 60.0, 17.0 / 60.0));

        let steep = CalculationParameters::new(75.0, 60.0, 0)
            .unwrap()
            .with_high_latitude_rule(HighLatitudeRule::TwilightAngle);
        assert_eq!(steep.night_portions(), (1.0, 1.0));
    }
}

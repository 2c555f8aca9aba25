//! Named regional calculation conventions.
//!
//! Every [`CalculationMethod`] maps to one row of a static table. Adding a convention means
//! adding an enum variant and a table row; nothing else in the engine branches on the method,
//! apart from the moonsighting committee's seasonal bounds.

use crate::types::PrayerAdjustments;
use core::fmt;

/// A named calculation convention, usually after the authority that publishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalculationMethod {
    /// Ministry of Religious Affairs and Wakfs, Algeria.
    Algerian,
    /// Diyanet İşleri Başkanlığı, Turkey.
    Diyanet,
    /// Egyptian General Authority of Survey.
    EgyptianGeneralAuthority,
    /// Egyptian General Authority of Survey, revised angles.
    EgyptianGeneralNewAuthority,
    /// Union des Organisations Islamiques de France, 15° variant.
    France15,
    /// Union des Organisations Islamiques de France, 18° variant.
    France18,
    /// Union des Organisations Islamiques de France, 12° convention.
    FranceUoif,
    /// Gulf region, fixed isha interval.
    Gulf,
    /// Jabatan Kemajuan Islam Malaysia.
    Jakim,
    /// Ministry of Awqaf, Jordan.
    Jordan,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Kementerian Agama Republik Indonesia.
    Kementerian,
    /// Kuwait.
    Kuwait,
    /// Moonsighting Committee Worldwide, with seasonal fajr and isha bounds.
    MoonsightingCommittee,
    /// Majlis Ugama Islam Singapura.
    Muis,
    /// Muslim World League.
    MuslimWorldLeague,
    /// Islamic Society of North America.
    NorthAmerica,
    /// Ministry of Awqaf and Religious Affairs, Oman.
    Oman,
    /// Qatar, fixed isha interval.
    Qatar,
    /// Spiritual Administration of Muslims of Russia.
    Russia,
    /// Ministry of Religious Affairs, Tunisia.
    Tunisian,
    /// General Authority of Islamic Affairs and Endowments, United Arab Emirates.
    Uae,
    /// Umm al-Qura University, Makkah.
    UmmAlQura,
    /// Umm al-Qura University, Makkah, with the longer Ramadan isha interval.
    UmmAlQuraRamadan,
    /// No preset: angles are supplied by the caller.
    Other,
}

/// The numbers a [`CalculationMethod`] stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodPreset {
    /// The method this row belongs to.
    pub method: CalculationMethod,
    /// Fajr depression angle in degrees.
    pub fajr_angle: f64,
    /// Isha depression angle in degrees; unused when `isha_interval` is nonzero.
    pub isha_angle: f64,
    /// Minutes from maghrib to isha, or 0 to use `isha_angle`.
    pub isha_interval: u32,
    /// Minute offsets the authority applies to its published times.
    pub adjustments: PrayerAdjustments,
}

const DHUHR_AFTER_TRANSIT: PrayerAdjustments = PrayerAdjustments::new(0, 0, 1, 0, 0, 0);
const NO_OFFSETS: PrayerAdjustments = PrayerAdjustments::zero();

const fn angles(
    method: CalculationMethod,
    fajr_angle: f64,
    isha_angle: f64,
    adjustments: PrayerAdjustments,
) -> MethodPreset {
    MethodPreset {
        method,
        fajr_angle,
        isha_angle,
        isha_interval: 0,
        adjustments,
    }
}

const fn interval(
    method: CalculationMethod,
    fajr_angle: f64,
    isha_interval: u32,
    adjustments: PrayerAdjustments,
) -> MethodPreset {
    MethodPreset {
        method,
        fajr_angle,
        isha_angle: 0.0,
        isha_interval,
        adjustments,
    }
}

/// Preset table, in enum declaration order.
static METHOD_PRESETS: [MethodPreset; 25] = {
    use CalculationMethod as M;
    [
        angles(M::Algerian, 18.0, 17.0, DHUHR_AFTER_TRANSIT),
        angles(M::Diyanet, 18.0, 17.0, PrayerAdjustments::new(0, -7, 5, 4, 7, 0)),
        angles(M::EgyptianGeneralAuthority, 19.5, 17.5, DHUHR_AFTER_TRANSIT),
        angles(M::EgyptianGeneralNewAuthority, 20.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::France15, 15.0, 15.0, DHUHR_AFTER_TRANSIT),
        angles(M::France18, 18.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::FranceUoif, 12.0, 12.0, DHUHR_AFTER_TRANSIT),
        interval(M::Gulf, 19.5, 90, DHUHR_AFTER_TRANSIT),
        angles(M::Jakim, 20.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::Jordan, 18.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::Karachi, 18.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::Kementerian, 20.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::Kuwait, 18.0, 17.5, NO_OFFSETS),
        angles(
            M::MoonsightingCommittee,
            18.0,
            18.0,
            PrayerAdjustments::new(0, 0, 5, 0, 3, 0),
        ),
        angles(M::Muis, 20.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::MuslimWorldLeague, 18.0, 17.0, DHUHR_AFTER_TRANSIT),
        angles(M::NorthAmerica, 15.0, 15.0, DHUHR_AFTER_TRANSIT),
        angles(M::Oman, 18.0, 18.0, DHUHR_AFTER_TRANSIT),
        interval(M::Qatar, 18.0, 90, NO_OFFSETS),
        angles(M::Russia, 16.0, 15.0, DHUHR_AFTER_TRANSIT),
        angles(M::Tunisian, 18.0, 18.0, DHUHR_AFTER_TRANSIT),
        angles(M::Uae, 18.2, 18.2, PrayerAdjustments::new(0, -3, 3, 3, 3, 0)),
        interval(M::UmmAlQura, 18.5, 90, NO_OFFSETS),
        interval(M::UmmAlQuraRamadan, 18.5, 120, NO_OFFSETS),
        angles(M::Other, 0.0, 0.0, NO_OFFSETS),
    ]
};

impl CalculationMethod {
    /// All methods in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Algerian,
        Self::Diyanet,
        Self::EgyptianGeneralAuthority,
        Self::EgyptianGeneralNewAuthority,
        Self::France15,
        Self::France18,
        Self::FranceUoif,
        Self::Gulf,
        Self::Jakim,
        Self::Jordan,
        Self::Karachi,
        Self::Kementerian,
        Self::Kuwait,
        Self::MoonsightingCommittee,
        Self::Muis,
        Self::MuslimWorldLeague,
        Self::NorthAmerica,
        Self::Oman,
        Self::Qatar,
        Self::Russia,
        Self::Tunisian,
        Self::Uae,
        Self::UmmAlQura,
        Self::UmmAlQuraRamadan,
        Self::Other,
    ];

    /// Gets the preset angles, interval and offsets for this method.
    ///
    /// `Other` reads back as all zeros: it has no preset.
    ///
    /// # Example
    /// ```
    /// # use miqat::CalculationMethod;
    /// let preset = CalculationMethod::UmmAlQura.preset();
    /// assert_eq!(preset.fajr_angle, 18.5);
    /// assert_eq!(preset.isha_interval, 90);
    /// ```
    #[must_use]
    pub fn preset(self) -> &'static MethodPreset {
        &METHOD_PRESETS[self as usize]
    }

    /// Gets a short display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Algerian => "Algerian",
            Self::Diyanet => "Diyanet",
            Self::EgyptianGeneralAuthority => "Egyptian General Authority of Survey",
            Self::EgyptianGeneralNewAuthority => "Egyptian General Authority of Survey (new)",
            Self::France15 => "France 15°",
            Self::France18 => "France 18°",
            Self::FranceUoif => "France UOIF",
            Self::Gulf => "Gulf",
            Self::Jakim => "JAKIM",
            Self::Jordan => "Jordan",
            Self::Karachi => "Karachi",
            Self::Kementerian => "Kementerian Agama",
            Self::Kuwait => "Kuwait",
            Self::MoonsightingCommittee => "Moonsighting Committee",
            Self::Muis => "MUIS",
            Self::MuslimWorldLeague => "Muslim World League",
            Self::NorthAmerica => "North America (ISNA)",
            Self::Oman => "Oman",
            Self::Qatar => "Qatar",
            Self::Russia => "Russia",
            Self::Tunisian => "Tunisian",
            Self::Uae => "UAE",
            Self::UmmAlQura => "Umm al-Qura",
            Self::UmmAlQuraRamadan => "Umm al-Qura (Ramadan)",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_declaration_order() {
        for (index, method) in CalculationMethod::ALL.iter().enumerate() {
            assert_eq!(METHOD_PRESETS[index].method, *method);
            assert_eq!(method.preset().method, *method);
        }
    }

    #[test]
    fn test_documented_presets() {
        let cases = [
            (CalculationMethod::MuslimWorldLeague, 18.0, 17.0, 0),
            (CalculationMethod::EgyptianGeneralAuthority, 19.5, 17.5, 0),
            (CalculationMethod::Karachi, 18.0, 18.0, 0),
            (CalculationMethod::UmmAlQura, 18.5, 0.0, 90),
            (CalculationMethod::UmmAlQuraRamadan, 18.5, 0.0, 120),
            (CalculationMethod::Gulf, 19.5, 0.0, 90),
            (CalculationMethod::Qatar, 18.0, 0.0, 90),
            (CalculationMethod::MoonsightingCommittee, 18.0, 18.0, 0),
            (CalculationMethod::NorthAmerica, 15.0, 15.0, 0),
            (CalculationMethod::Kuwait, 18.0, 17.5, 0),
            (CalculationMethod::Muis, 20.0, 18.0, 0),
            (CalculationMethod::Russia, 16.0, 15.0, 0),
            (CalculationMethod::FranceUoif, 12.0, 12.0, 0),
            (CalculationMethod::Other, 0.0, 0.0, 0),
        ];
        for (method, fajr, isha, interval) in cases {
            let preset = method.preset();
            assert_eq!(preset.fajr_angle, fajr, "{method:?}");
            assert_eq!(preset.isha_angle, isha, "{method:?}");
            assert_eq!(preset.isha_interval, interval, "{method:?}");
        }
    }

    #[test]
    fn test_method_offsets() {
        assert_eq!(CalculationMethod::MuslimWorldLeague.preset().adjustments.dhuhr, 1);
        assert_eq!(
            CalculationMethod::MoonsightingCommittee.preset().adjustments,
            PrayerAdjustments::new(0, 0, 5, 0, 3, 0)
        );
        assert_eq!(
            CalculationMethod::Diyanet.preset().adjustments,
            PrayerAdjustments::new(0, -7, 5, 4, 7, 0)
        );
        assert_eq!(
            CalculationMethod::UmmAlQura.preset().adjustments,
            PrayerAdjustments::zero()
        );
        assert_eq!(
            CalculationMethod::Other.preset().adjustments,
            PrayerAdjustments::zero()
        );
    }

    #[test]
    fn test_every_preset_but_other_has_valid_angles() {
        for method in CalculationMethod::ALL {
            let preset = method.preset();
            if method == CalculationMethod::Other {
                continue;
            }
            assert!(crate::error::check_depression_angles(
                preset.fajr_angle,
                preset.isha_angle,
                preset.isha_interval
            )
            .is_ok());
        }
    }
}

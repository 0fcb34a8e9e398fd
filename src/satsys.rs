//! Satellite systems and the dates their week numbers are counted from.

use crate::consts::{BDS_EPOCH, GAL_EPOCH, GPS_EPOCH, QZS_EPOCH};
use crate::{CalendarDate, prelude::*};
use std::str::FromStr;

/// Satellite system parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SatSystemError {
    #[error("unknown satellite system \"{0}\"")]
    Unknown(String),
}

/// GNSS constellations with their own week count
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SatSystem {
    /// `GPS` american constellation
    #[default]
    #[display(fmt = "GPS")]
    Gps,
    /// `QZSS` japanese constellation, shares the GPS week
    #[display(fmt = "QZS")]
    Qzs,
    /// `Galileo` european constellation
    #[display(fmt = "GAL")]
    Gal,
    /// `BeiDou` chinese constellation
    #[display(fmt = "BDS")]
    Bds,
    /// `Glonass` russian constellation
    #[display(fmt = "GLO")]
    Glo,
}

const GPS_T0: CalendarDate = CalendarDate::from_ymd(GPS_EPOCH.0, GPS_EPOCH.1, GPS_EPOCH.2);
const QZS_T0: CalendarDate = CalendarDate::from_ymd(QZS_EPOCH.0, QZS_EPOCH.1, QZS_EPOCH.2);
const GAL_T0: CalendarDate = CalendarDate::from_ymd(GAL_EPOCH.0, GAL_EPOCH.1, GAL_EPOCH.2);
const BDS_T0: CalendarDate = CalendarDate::from_ymd(BDS_EPOCH.0, BDS_EPOCH.1, BDS_EPOCH.2);

impl SatSystem {
    pub const ALL: [Self; 5] = [Self::Gps, Self::Qzs, Self::Gal, Self::Bds, Self::Glo];

    /// First day of week 0.
    ///
    /// Glonass has no fixed epoch: its weeks restart on January 1st of every
    /// leap year, so the epoch depends on `reference`.
    pub fn epoch(self, reference: CalendarDate) -> CalendarDate {
        match self {
            Self::Gps => GPS_T0,
            Self::Qzs => QZS_T0,
            Self::Gal => GAL_T0,
            Self::Bds => BDS_T0,
            Self::Glo => reference.leap_year_date(),
        }
    }

    /// Parses `name`, falling back to GPS when it is not recognized.
    pub fn resolve_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: SatSystemError| {
            log::warn!("{e}: using {} instead", Self::default());
            Self::default()
        })
    }
}

impl FromStr for SatSystem {
    type Err = SatSystemError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let s = string.trim().to_uppercase();
        match s.as_str() {
            "GPS" | "G" => Ok(Self::Gps),
            "QZS" | "QZSS" | "J" => Ok(Self::Qzs),
            "GAL" | "E" => Ok(Self::Gal),
            "BDS" | "C" => Ok(Self::Bds),
            "GLO" | "R" => Ok(Self::Glo),
            _ => Err(SatSystemError::Unknown(string.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_fixed_epochs() {
        let any = date(2021, 10, 19);
        assert_eq!(SatSystem::Gps.epoch(any), date(1980, 1, 6));
        assert_eq!(SatSystem::Qzs.epoch(any), date(1980, 1, 6));
        assert_eq!(SatSystem::Gal.epoch(any), date(1999, 8, 22));
        assert_eq!(SatSystem::Bds.epoch(any), date(2006, 1, 1));
    }

    #[test]
    fn test_fixed_epochs_start_on_sunday() {
        let fixed = [SatSystem::Gps, SatSystem::Qzs, SatSystem::Gal, SatSystem::Bds];
        for sys in fixed {
            let epoch = sys.epoch(date(2021, 1, 1));
            assert_eq!(epoch.weekday(), crate::Weekday::Sunday, "{sys}");
        }
    }

    #[test]
    fn test_glonass_epoch_follows_reference() {
        assert_eq!(SatSystem::Glo.epoch(date(2021, 10, 1)), date(2020, 1, 1));
        assert_eq!(SatSystem::Glo.epoch(date(2019, 12, 1)), date(2016, 1, 1));
        assert_eq!(SatSystem::Glo.epoch(date(2020, 1, 1)), date(2020, 1, 1));
    }

    #[test]
    fn test_parse() {
        assert_eq!("GPS".parse::<SatSystem>().unwrap(), SatSystem::Gps);
        assert_eq!("qzs".parse::<SatSystem>().unwrap(), SatSystem::Qzs);
        assert_eq!(" GAL ".parse::<SatSystem>().unwrap(), SatSystem::Gal);
        assert_eq!("BDS".parse::<SatSystem>().unwrap(), SatSystem::Bds);
        assert_eq!("GLO".parse::<SatSystem>().unwrap(), SatSystem::Glo);
        assert_eq!("R".parse::<SatSystem>().unwrap(), SatSystem::Glo);
        assert_eq!(
            "IRN".parse::<SatSystem>(),
            Err(SatSystemError::Unknown("IRN".to_owned()))
        );
    }

    #[test]
    fn test_resolve_lenient_falls_back_to_gps() {
        assert_eq!(SatSystem::resolve_lenient("GLO"), SatSystem::Glo);
        assert_eq!(SatSystem::resolve_lenient("XYZ"), SatSystem::Gps);
        assert_eq!(SatSystem::resolve_lenient(""), SatSystem::Gps);
    }

    #[test]
    fn test_display_round_trip() {
        for sys in SatSystem::ALL {
            assert_eq!(sys.to_string().parse::<SatSystem>().unwrap(), sys);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&SatSystem::Gal).unwrap();
        assert_eq!(json, r#""GAL""#);
        let parsed: SatSystem = serde_json::from_str(r#""GLO""#).unwrap();
        assert_eq!(parsed, SatSystem::Glo);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            SatSystemError::Unknown("XYZ".to_owned()).to_string(),
            "unknown satellite system \"XYZ\""
        );
    }
}

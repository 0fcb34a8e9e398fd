/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Earliest year accepted on the command line (GPS week 0)
pub const MIN_GNSS_YEAR: u16 = 1980;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub const DAYS_PER_WEEK: i64 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// GPS week 0 starts on 1980-01-06
pub const GPS_EPOCH: (u16, u8, u8) = (1980, 1, 6);
/// QZSS shares the GPS week count
pub const QZS_EPOCH: (u16, u8, u8) = (1980, 1, 6);
/// Galileo system time started on 1999-08-22
pub const GAL_EPOCH: (u16, u8, u8) = (1999, 8, 22);
/// BeiDou time started on 2006-01-01
pub const BDS_EPOCH: (u16, u8, u8) = (2006, 1, 1);

/// Visible width of one month panel
pub const PANEL_WIDTH: usize = 34;
/// Blank columns between two panels
pub const GUTTER_WIDTH: usize = 4;
/// Column of the month title centre, relative to the panel start
pub const TITLE_CENTER: usize = 17;

/// Second header line of every month panel
pub const WEEKDAY_HEADER: &str = "Week   Sun Mon Tue Wed Thu Fri Sat";
/// Width of the week number field plus its trailing gap
pub const WEEK_FIELD: &str = "      ";
/// One empty weekday slot
pub const DAY_SLOT: &str = "    ";

/// Middle month of each quarter; each anchors one three-month row of the year view
pub const QUARTER_ANCHORS: [u8; 4] = [2, 5, 8, 11];

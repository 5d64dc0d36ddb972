/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Largest hour on a 12-hour clock face
pub const MAX_HOUR: u8 = 12;
/// Largest minute within an hour
pub const MAX_MINUTE: u8 = 59;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Hour/minute separator
pub const TIME_SEPARATOR: char = ':';

/// Gregorian month of Pohela Boishakh (Bengali New Year's Day)
pub const ANCHOR_MONTH: u8 = 4;
/// Gregorian day of Pohela Boishakh
pub const ANCHOR_DAY: u8 = 14;

/// Years between the Gregorian and Bengali eras, on or after the anchor
pub const ERA_OFFSET: u16 = 593;
/// Years between the Gregorian and Bengali eras, before the anchor
pub const ERA_OFFSET_BEFORE_ANCHOR: u16 = ERA_OFFSET + 1;

/// Days in each Bengali month, starting with Boishakh.
/// No leap adjustment: the table covers 363 days.
pub const BANGLA_MONTH_LENGTHS: [u8; 12] = [31, 31, 31, 31, 30, 30, 30, 30, 29, 30, 30, 30];

/// Bengali month names, starting with Boishakh (mid-April)
pub const BANGLA_MONTHS: [&str; 12] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

/// Bengali weekday names, index 0 is Sunday
pub const BANGLA_WEEKDAYS: [&str; 7] = [
    "রবিবার",
    "সোমবার",
    "মঙ্গলবার",
    "বুধবার",
    "বৃহস্পতিবার",
    "শুক্রবার",
    "শনিবার",
];

/// Bengali digits, index is the digit value
pub const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Suffix appended to the day of month ("১৮" becomes "১৮ই")
pub const ORDINAL_SUFFIX: char = 'ই';

/// Forenoon marker (AM)
pub const BANGLA_AM: &str = "পূর্বাহ্ণ";
/// Afternoon marker (PM)
pub const BANGLA_PM: &str = "অপরাহ্ণ";

/// Era label following the Bengali year
pub const BANGLA_ERA: &str = "বঙ্গাব্দ";

/// Asia/Dhaka offset from UTC in seconds (UTC+6, no DST)
pub const DHAKA_UTC_OFFSET_SECS: i32 = 6 * 60 * 60;

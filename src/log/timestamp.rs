use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Broken-down wall-clock time.
///
/// `Display` renders the log line timestamp: abbreviated weekday and month,
/// unpadded day of month and 24h time, e.g. `Mon Jan 2 15:04:05`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i32,
    /// 1..=12
    pub mon: u32,
    /// 1..=31
    pub day: u32,
    /// 0 = Sunday
    pub wday: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeConvError {
    Year,
    Month,
    Day,
}

impl fmt::Display for TimeConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TimeConvError::*;
        match self {
            Year => write!(f, "year out of range"),
            Month => write!(f, "month out of range"),
            Day => write!(f, "day out of range"),
        }
    }
}
impl std::error::Error for TimeConvError {}

impl CivilTime {
    /// Current local time, or UTC when the local offset is unavailable.
    #[must_use]
    pub fn now() -> Self {
        let secs = unix_now();
        local_from_unix(secs)
            .or_else(|| Self::from_unix_utc(secs).ok())
            .unwrap_or(Self::EPOCH)
    }

    const EPOCH: CivilTime = CivilTime {
        year: 1970,
        mon: 1,
        day: 1,
        wday: 4,
        hour: 0,
        min: 0,
        sec: 0,
    };

    /// Converts a UNIX timestamp to a Gregorian UTC date (civil-from-days).
    ///
    /// # Errors
    ///
    /// Returns a [`TimeConvError`] if a computed component does not fit its
    /// integer type.
    #[allow(clippy::many_single_char_names)]
    pub fn from_unix_utc(mut s: u64) -> Result<Self, TimeConvError> {
        let sec = (s % 60) as u32;
        s /= 60;
        let min = (s % 60) as u32;
        s /= 60;
        let hour = (s % 24) as u32;
        s /= 24;

        // 1970-01-01 was a Thursday.
        let wday = ((s + 4) % 7) as u32;

        // Use i128 to prevent overflow during intermediate calculations.
        let z: i128 = i128::from(s) + 719_468;

        let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
        let doe = z - era * 146_097; // [0, 146096]
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
        let mp = (5 * doy + 2) / 153; // [0, 11]
        let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
        let m = mp + if mp < 10 { 3 } else { -9 }; // [1, 12]

        let year = i32::try_from(y + i128::from(m <= 2)).map_err(|_| TimeConvError::Year)?;
        let mon = u32::try_from(m).map_err(|_| TimeConvError::Month)?;
        let day = u32::try_from(d).map_err(|_| TimeConvError::Day)?;

        Ok(Self {
            year,
            mon,
            day,
            wday,
            hour,
            min,
            sec,
        })
    }

    /// `YYYYMMDD_HHMMSS`, used in generated log file names.
    #[must_use]
    pub fn filename_stamp(&self) -> String {
        format!(
            "{:04}{:02}{:02}_{:02}{:02}{:02}",
            self.year, self.mon, self.day, self.hour, self.min, self.sec
        )
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wday = WEEKDAYS[(self.wday % 7) as usize];
        let mon = MONTHS[(self.mon.clamp(1, 12) - 1) as usize];
        write!(
            f,
            "{wday} {mon} {} {:02}:{:02}:{:02}",
            self.day, self.hour, self.min, self.sec
        )
    }
}

/// Timestamp for the current log line.
#[must_use]
pub fn now_stamp() -> String {
    CivilTime::now().to_string()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(unix)]
fn local_from_unix(secs: u64) -> Option<CivilTime> {
    let t = libc::time_t::try_from(secs).ok()?;
    // SAFETY: `tm` is plain old data, fully overwritten by localtime_r, which
    // is the reentrant variant and only touches the buffers passed to it.
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let res = unsafe { libc::localtime_r(&t, &mut tm) };
    if res.is_null() {
        return None;
    }

    Some(CivilTime {
        year: tm.tm_year.checked_add(1900)?,
        mon: u32::try_from(tm.tm_mon + 1).ok()?,
        day: u32::try_from(tm.tm_mday).ok()?,
        wday: u32::try_from(tm.tm_wday).ok()?,
        hour: u32::try_from(tm.tm_hour).ok()?,
        min: u32::try_from(tm.tm_min).ok()?,
        // Leap second (60) is kept as reported.
        sec: u32::try_from(tm.tm_sec).ok()?,
    })
}

#[cfg(not(unix))]
fn local_from_unix(_secs: u64) -> Option<CivilTime> {
    None
}

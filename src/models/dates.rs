//! The two date formats used by the service.

use crate::errors::InvalidDate;
use time::format_description::well_known::Rfc2822;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parse a date like `2009-06-01 12:34:56 UTC`, as found in logs and events.
pub(crate) fn parse_zoned(s: &str) -> Result<OffsetDateTime, InvalidDate> {
    let invalid = || InvalidDate(s.to_string());
    let (datetime, zone) = s.trim().rsplit_once(' ').ok_or_else(invalid)?;
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let datetime = PrimitiveDateTime::parse(datetime, &format).map_err(|_| invalid())?;
    let offset = zone_offset(zone).ok_or_else(invalid)?;
    Ok(datetime.assume_offset(offset))
}

/// Parse a date like `Mon, 01 Jun 2009 12:34:56 +0000`, as found in archives.
pub(crate) fn parse_rfc2822(s: &str) -> Result<OffsetDateTime, InvalidDate> {
    OffsetDateTime::parse(s.trim(), &Rfc2822).map_err(|_| InvalidDate(s.to_string()))
}

fn zone_offset(zone: &str) -> Option<UtcOffset> {
    let hours = match zone {
        "UTC" | "GMT" | "Z" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        _ => return numeric_offset(zone),
    };
    UtcOffset::from_hms(hours, 0, 0).ok()
}

/// `+0100`, `-08:00`, or `GMT-08:00`
fn numeric_offset(zone: &str) -> Option<UtcOffset> {
    let zone = zone.strip_prefix("GMT").unwrap_or(zone);
    let sign: i8 = if zone.starts_with('+') {
        1
    } else if zone.starts_with('-') {
        -1
    } else {
        return None;
    };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i8 = digits[..2].parse().ok()?;
    let minutes: i8 = digits[2..].parse().ok()?;
    UtcOffset::from_hms(sign * hours, sign * minutes, 0).ok()
}

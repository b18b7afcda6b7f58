//! Cell value → text coercion

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whole floats up to this magnitude print without a fractional part
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Coerce a cell to text.
///
/// Empty cells become "", whole numbers lose their `.0`, booleans print as
/// `True`/`False`, date serials as `YYYY-MM-DD HH:MM:SS` and error cells as
/// their code (`#N/A`, `#DIV/0!`). Only unrepresentable dates are rejected.
pub fn cell_text(cell: &Data) -> Result<String, String> {
    match cell {
        Data::Empty => Ok(String::new()),
        Data::String(s) => Ok(s.clone()),
        Data::Int(i) => Ok(i.to_string()),
        Data::Float(f) => Ok(format_float(*f)),
        Data::Bool(true) => Ok("True".to_string()),
        Data::Bool(false) => Ok("False".to_string()),
        Data::DateTime(dt) => serial_to_text(dt.as_f64(), dt.is_duration()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Ok(s.clone()),
        Data::Error(e) => Ok(e.to_string()),
    }
}

/// Render a cell for human inspection: strings quoted, empty cells as `None`
pub fn cell_display(cell: &Data) -> String {
    match cell {
        Data::Empty => "None".to_string(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => format!("'{}'", s),
        Data::Error(e) => e.to_string(),
        other => cell_text(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Column letter shown next to each header label (0→A, 25→Z, 26→AA)
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index + 1;
    while rest > 0 {
        rest -= 1;
        letters.push(b'A' + (rest % 26) as u8);
        rest /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Date serials use the 1900 system (day 1 = 1900-01-01)
fn serial_to_text(serial: f64, is_duration: bool) -> Result<String, String> {
    if !serial.is_finite() || serial < 0.0 {
        return Err(format!("invalid date serial {}", serial));
    }

    if is_duration {
        return Ok(format_duration(serial));
    }

    let datetime = serial_to_datetime(serial)
        .ok_or_else(|| format!("date serial {} is out of range", serial))?;

    // Time-only cells carry no day part
    if serial < 1.0 {
        Ok(datetime.format("%H:%M:%S").to_string())
    } else {
        Ok(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Durations read like `1 day, 12:00:00`; under a day only `H:MM:SS`
fn format_duration(serial: f64) -> String {
    let total = (serial * SECONDS_PER_DAY).round() as u64;
    let days = total / 86_400;
    let clock = format!(
        "{}:{:02}:{:02}",
        (total % 86_400) / 3600,
        (total / 60) % 60,
        total % 60
    );
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    // Serial 60 is the phantom 1900-02-29; days before it count from 1899-12-31
    let epoch_day = if serial < 60.0 { 31 } else { 30 };
    let epoch = NaiveDate::from_ymd_opt(1899, 12, epoch_day)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * SECONDS_PER_DAY * 1000.0).round();
    if millis > i64::MAX as f64 {
        return None;
    }
    epoch.checked_add_signed(TimeDelta::try_milliseconds(millis as i64)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(5), "F");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_cell_text_scalars() {
        assert_eq!(cell_text(&Data::Empty).unwrap(), "");
        assert_eq!(cell_text(&Data::String(" Ana ".into())).unwrap(), " Ana ");
        assert_eq!(cell_text(&Data::Int(42)).unwrap(), "42");
        assert_eq!(cell_text(&Data::Bool(true)).unwrap(), "True");
        assert_eq!(cell_text(&Data::Bool(false)).unwrap(), "False");
    }

    #[test]
    fn test_whole_floats_drop_fraction() {
        assert_eq!(cell_text(&Data::Float(111.0)).unwrap(), "111");
        assert_eq!(cell_text(&Data::Float(-3.0)).unwrap(), "-3");
        assert_eq!(cell_text(&Data::Float(2.5)).unwrap(), "2.5");
        assert_eq!(cell_text(&Data::Float(0.1)).unwrap(), "0.1");
    }

    #[test]
    fn test_error_cell_becomes_its_code() {
        assert_eq!(cell_text(&Data::Error(calamine::CellErrorType::NA)).unwrap(), "#N/A");
        assert_eq!(
            cell_text(&Data::Error(calamine::CellErrorType::Div0)).unwrap(),
            "#DIV/0!"
        );
    }

    #[test]
    fn test_iso_text_passes_through() {
        let cell = Data::DateTimeIso("2024-03-01T10:00:00".into());
        assert_eq!(cell_text(&cell).unwrap(), "2024-03-01T10:00:00");
    }

    #[test]
    fn test_serial_to_text_dates() {
        // 45000 = 2023-03-15
        assert_eq!(serial_to_text(45000.0, false).unwrap(), "2023-03-15 00:00:00");
        assert_eq!(serial_to_text(45000.5, false).unwrap(), "2023-03-15 12:00:00");
        assert_eq!(serial_to_text(0.75, false).unwrap(), "18:00:00");
    }

    #[test]
    fn test_serial_to_text_early_1900_dates() {
        assert_eq!(serial_to_text(1.0, false).unwrap(), "1900-01-01 00:00:00");
        assert_eq!(serial_to_text(59.0, false).unwrap(), "1900-02-28 00:00:00");
        assert_eq!(serial_to_text(61.0, false).unwrap(), "1900-03-01 00:00:00");
    }

    #[test]
    fn test_serial_to_text_duration() {
        assert_eq!(serial_to_text(1.5, true).unwrap(), "1 day, 12:00:00");
        assert_eq!(serial_to_text(2.0, true).unwrap(), "2 days, 0:00:00");
        assert_eq!(serial_to_text(0.0625, true).unwrap(), "1:30:00");
    }

    #[test]
    fn test_serial_to_text_invalid() {
        assert!(serial_to_text(-1.0, false).is_err());
        assert!(serial_to_text(f64::NAN, false).is_err());
        assert!(serial_to_text(1e300, false).is_err());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(cell_display(&Data::Empty), "None");
        assert_eq!(cell_display(&Data::String("Ana".into())), "'Ana'");
        assert_eq!(cell_display(&Data::Float(111.0)), "111");
    }
}

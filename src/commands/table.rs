//! `timeword table` command.

use std::io::{self, Write};

use super::{write_line, Reading};
use crate::clock_time::{ClockTime, MINUTES_PER_DAY};

/// Execute the `table` command.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(step: u16, json: bool) -> Result<(), String> {
    let stdout = io::stdout();
    print_rows(&rows(step), json, &mut stdout.lock())
}

/// Readings from `00:00` every `step` minutes until the end of the day.
#[must_use]
pub fn rows(step: u16) -> Vec<Reading> {
    (0..MINUTES_PER_DAY)
        .step_by(usize::from(step.max(1)))
        .filter_map(ClockTime::from_minute_of_day)
        .map(Reading::of)
        .collect()
}

fn print_rows<W: Write>(rows: &[Reading], json: bool, out: &mut W) -> Result<(), String> {
    for row in rows {
        let line = if json { row.to_json()? } else { format!("{}  {}", row.time, row.words) };
        write_line(out, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_table_has_24_rows() {
        let rows = rows(60);
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].words, "midnight");
        assert_eq!(rows[12].words, "noon");
        assert_eq!(rows[23].words, "eleven o'clock pm");
    }

    #[test]
    fn minute_table_covers_the_day() {
        let rows = rows(1);
        assert_eq!(rows.len(), usize::from(MINUTES_PER_DAY));
        assert_eq!(rows.last().unwrap().time.to_string(), "23:59");
    }

    #[test]
    fn uneven_step_stops_before_midnight() {
        let rows = rows(700);
        let times: Vec<String> = rows.iter().map(|r| r.time.to_string()).collect();
        assert_eq!(times, ["00:00", "11:40", "23:20"]);
    }

    #[test]
    fn plain_rows_show_time_and_words() {
        let mut out = Vec::new();
        print_rows(&rows(720), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "00:00  midnight\n12:00  noon\n");
    }
}

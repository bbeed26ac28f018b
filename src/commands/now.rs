//! `timeword now` command.

use chrono::{DateTime, Local, Utc};

use super::Reading;
use crate::clock_time::ClockTime;
use crate::context::ServiceContext;

/// Execute the `now` command.
///
/// Reads the context clock and speaks the wall-clock time, in the local zone
/// unless `utc` is set.
///
/// # Errors
///
/// Returns an error string if the clock cannot be read.
pub fn run(ctx: &ServiceContext, utc: bool, json: bool) -> Result<(), String> {
    let instant = ctx.clock.now()?;
    let reading = Reading::of(wall_time(instant, utc));
    tracing::debug!(%instant, time = %reading.time, "read clock");

    if json {
        println!("{}", reading.to_json()?);
    } else {
        println!("{}", reading.words);
    }
    Ok(())
}

fn wall_time(instant: DateTime<Utc>, utc: bool) -> ClockTime {
    if utc {
        ClockTime::from(instant.time())
    } else {
        ClockTime::from(instant.with_timezone(&Local).time())
    }
}

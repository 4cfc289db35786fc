use picotime::{DateTime, GpsTime, UtcTime, TimeDelta};
use picotime::DatePiece;

use std::env;

fn main() {
    let utc = UtcTime::now();
    println!("It is {} UTC, a {:?}", utc, utc.weekday());
    println!("It is {} in GPS time", GpsTime::now());
    println!("{} since the Unix epoch", utc.time_since_epoch());

    let today = DateTime::now().date();
    println!("Today is day {} of {}", today.yearday(), today.year());

    for arg in env::args().skip(1) {
        match arg.parse::<DateTime>() {
            Ok(then) => {
                let since = DateTime::now() - then;
                println!("{} was {} ago", then, since.round(TimeDelta::seconds(1)));
            }
            Err(e) => println!("Error: {} ({})", e, arg),
        }
    }
}

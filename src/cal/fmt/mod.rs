//! Writing dates and times out as text.

mod iso;

pub use self::iso::{ISO, ISOString};

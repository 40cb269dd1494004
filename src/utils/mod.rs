pub(crate) mod choice;
pub(crate) mod clock;
pub(crate) mod git;
pub(crate) mod log;

pub(crate) use choice::{Chooser, FixedChooser, RandomChooser};
pub(crate) use clock::{Clock, FixedClock, SystemClock};

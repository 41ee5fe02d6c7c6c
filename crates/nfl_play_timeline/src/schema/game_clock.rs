use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameClockError;

pub const QUARTER_SECONDS: u32 = 900;
pub const REGULATION_QUARTERS: u8 = 4;
pub const REGULATION_SECONDS: u32 = QUARTER_SECONDS * REGULATION_QUARTERS as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Quarter {
	First,
	Second,
	Third,
	Fourth,
	/// Period number, 5 for the first overtime.
	Overtime(u8),
}

impl Quarter {
	pub const fn from_number(number: u8) -> Option<Self> {
		match number {
			0 => None,
			1 => Some(Self::First),
			2 => Some(Self::Second),
			3 => Some(Self::Third),
			4 => Some(Self::Fourth),
			n => Some(Self::Overtime(n)),
		}
	}

	pub const fn number(self) -> u8 {
		match self {
			Self::First => 1,
			Self::Second => 2,
			Self::Third => 3,
			Self::Fourth => 4,
			Self::Overtime(n) => n,
		}
	}

	pub const fn is_regulation(self) -> bool {
		!matches!(self, Self::Overtime(_))
	}

	/// Elapsed game seconds at the start of this quarter.
	pub const fn start_seconds(self) -> u32 {
		(self.number() as u32 - 1) * QUARTER_SECONDS
	}
}

impl From<Quarter> for u8 {
	fn from(quarter: Quarter) -> Self {
		quarter.number()
	}
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Overtime(5) => f.write_str("OT"),
			Self::Overtime(n) => write!(f, "OT{}", n - 4),
			quarter => write!(f, "Q{}", quarter.number()),
		}
	}
}

/// Minutes left in a quarter (valid range: 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(u8);

impl Minutes {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 15 {
			Err(GameClockError::invalid_minutes(value))
		} else {
			Ok(Self(value))
		}
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>().map_err(|_| GameClockError::malformed_clock(s))?;
		Self::new(value)
	}
}

/// Seconds component of the clock (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(u8);

impl Seconds {
	pub const fn new(value: u8) -> Result<Self, GameClockError> {
		if value >= 60 {
			Err(GameClockError::invalid_seconds(value))
		} else {
			Ok(Self(value))
		}
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>().map_err(|_| GameClockError::malformed_clock(s))?;
		Self::new(value)
	}
}

/// A countdown `mm:ss` reading of time remaining in the current quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterClock {
	minutes: Minutes,
	seconds: Seconds,
}

impl QuarterClock {
	pub const fn new(minutes: Minutes, seconds: Seconds) -> Self {
		Self { minutes, seconds }
	}

	pub const fn remaining_seconds(self) -> u32 {
		self.minutes.0 as u32 * 60 + self.seconds.0 as u32
	}
}

impl FromStr for QuarterClock {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (minutes_str, seconds_str) = s.trim().split_once(':').ok_or_else(|| GameClockError::malformed_clock(s))?;

		let clock = Self::new(minutes_str.parse()?, seconds_str.parse()?);
		if clock.remaining_seconds() > QUARTER_SECONDS {
			return Err(GameClockError::beyond_quarter(s));
		}
		Ok(clock)
	}
}

impl fmt::Display for QuarterClock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}", self.minutes.0, self.seconds.0)
	}
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short team identifier as written by the data source (`KC`, `DET`, ...).
///
/// Codes are not checked against a list of franchises; relocations and
/// historical codes (`OAK`, `SD`, `STL`) have to pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TeamCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for TeamCode {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for TeamCode {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	Home,
	Visitor,
}

impl Side {
	pub const fn opponent(self) -> Self {
		match self {
			Self::Home => Self::Visitor,
			Self::Visitor => Self::Home,
		}
	}
}

/// The two teams of a game, as supplied by the schedule lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchup {
	pub home: TeamCode,
	pub visitor: TeamCode,
}

impl Matchup {
	pub fn new(home: impl Into<String>, visitor: impl Into<String>) -> Self {
		Self {
			home: TeamCode::new(home),
			visitor: TeamCode::new(visitor),
		}
	}

	pub const fn team(&self, side: Side) -> &TeamCode {
		match side {
			Side::Home => &self.home,
			Side::Visitor => &self.visitor,
		}
	}

	/// Which side `team` plays on, if it is one of the two.
	pub fn side_of(&self, team: &TeamCode) -> Option<Side> {
		if *team == self.home {
			Some(Side::Home)
		} else if *team == self.visitor {
			Some(Side::Visitor)
		} else {
			None
		}
	}
}

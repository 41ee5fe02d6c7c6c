use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameReferenceError;
use crate::schema::TeamCode;

const REFERENCE_DELIMITER: char = '_';

/// A parsed `YYYY_WEEK_HOME_VISITOR` game reference.
///
/// Only the shape is validated here. Whether the teams or the game exist is
/// left to the [`crate::GameSource`] lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameReference {
	season: u16,
	week: u8,
	home_team: TeamCode,
	visitor_team: TeamCode,
}

impl GameReference {
	pub fn parse(reference: &str) -> Result<Self, GameReferenceError> {
		reference.parse()
	}

	pub const fn season(&self) -> u16 {
		self.season
	}

	pub const fn week(&self) -> u8 {
		self.week
	}

	pub const fn home_team(&self) -> &TeamCode {
		&self.home_team
	}

	pub const fn visitor_team(&self) -> &TeamCode {
		&self.visitor_team
	}

	/// Canonical game id, with the week zero-padded the way nflverse writes it.
	pub fn game_id(&self) -> String {
		self.to_string()
	}
}

impl FromStr for GameReference {
	type Err = GameReferenceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split(REFERENCE_DELIMITER).collect();
		let [season, week, home, visitor] = parts.as_slice() else {
			return Err(GameReferenceError::invalid_format(s, "expected four underscore-delimited tokens"));
		};

		if season.len() != 4 || !season.bytes().all(|b| b.is_ascii_digit()) {
			return Err(GameReferenceError::invalid_format(s, "season must be a four digit year"));
		}
		let season = season
			.parse::<u16>()
			.map_err(|_| GameReferenceError::invalid_format(s, "season must be a four digit year"))?;

		let week = week
			.parse::<u8>()
			.ok()
			.filter(|week| *week > 0)
			.ok_or_else(|| GameReferenceError::invalid_format(s, "week must be a positive integer"))?;

		if home.is_empty() || visitor.is_empty() {
			return Err(GameReferenceError::invalid_format(s, "team codes must not be empty"));
		}

		Ok(Self {
			season,
			week,
			home_team: TeamCode::new(*home),
			visitor_team: TeamCode::new(*visitor),
		})
	}
}

impl fmt::Display for GameReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}_{:02}_{}_{}", self.season, self.week, self.home_team, self.visitor_team)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_valid_reference() {
		let reference = GameReference::parse("2023_01_DET_KC").unwrap();
		assert_eq!(reference.season(), 2023);
		assert_eq!(reference.week(), 1);
		assert_eq!(reference.home_team().as_str(), "DET");
		assert_eq!(reference.visitor_team().as_str(), "KC");
		assert_eq!(reference.game_id(), "2023_01_DET_KC");
	}

	#[test]
	fn test_parse_is_deterministic() {
		for input in ["2023_01_DET_KC", "2021_18_LV_LAC", "2019_5_NE_NYJ"] {
			assert_eq!(GameReference::parse(input), GameReference::parse(input));
		}
	}

	#[test]
	fn test_week_is_canonicalized() {
		let reference = GameReference::parse("2019_5_NE_NYJ").unwrap();
		assert_eq!(reference.game_id(), "2019_05_NE_NYJ");
		assert_eq!(GameReference::parse(&reference.game_id()).unwrap(), reference);
	}

	#[test]
	fn test_parse_invalid_references() {
		let cases = [
			"abc_01_DET_KC",
			"invalid_id",
			"not_a_number_week_team_team",
			"2023_01_DET",
			"2023_01_DET_KC_EXTRA",
			"23_01_DET_KC",
			"2023_00_DET_KC",
			"2023_wk_DET_KC",
			"2023_01__KC",
			"",
		];

		for input in cases {
			assert!(
				matches!(GameReference::parse(input), Err(GameReferenceError::InvalidFormat { .. })),
				"Expected InvalidFormat for input: {input}"
			);
		}
	}
}

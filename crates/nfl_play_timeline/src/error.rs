use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameReferenceError {
	#[error("Invalid game reference {reference:?}: {reason}. Expected YYYY_WEEK_HOME_VISITOR")]
	InvalidFormat { reference: String, reason: &'static str },
}

impl GameReferenceError {
	pub fn invalid_format(reference: &str, reason: &'static str) -> Self {
		Self::InvalidFormat {
			reference: reference.to_string(),
			reason,
		}
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameClockError {
	#[error("Malformed game clock: {raw:?}")]
	MalformedClock { raw: String },

	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Clock {raw:?} exceeds the length of a quarter")]
	BeyondQuarter { raw: String },
}

impl GameClockError {
	pub fn malformed_clock(raw: &str) -> Self {
		Self::MalformedClock { raw: raw.to_string() }
	}

	pub const fn invalid_minutes(minutes: u8) -> Self {
		Self::InvalidMinutes { minutes }
	}

	pub const fn invalid_seconds(seconds: u8) -> Self {
		Self::InvalidSeconds { seconds }
	}

	pub fn beyond_quarter(raw: &str) -> Self {
		Self::BeyondQuarter { raw: raw.to_string() }
	}
}

/// Failures of the data-source collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("Data file not found: {}", path.display())]
	MissingFile { path: PathBuf },

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),
}

/// Errors surfaced to callers of the pipeline. Row-level problems never end
/// up here; they are recorded as [`crate::RowAnomaly`] values instead.
#[derive(Debug, Error)]
pub enum TimelineError {
	#[error(transparent)]
	InvalidReferenceFormat(#[from] GameReferenceError),

	#[error("Game {game_id} not found in the {season} schedule")]
	NotFound { game_id: String, season: u16 },

	#[error("No plays found for game {game_id} (though it exists in the schedule)")]
	EmptyResult { game_id: String },

	#[error("Data source error: {0}")]
	Source(#[from] SourceError),
}

impl TimelineError {
	pub fn not_found(game_id: &str, season: u16) -> Self {
		Self::NotFound {
			game_id: game_id.to_string(),
			season,
		}
	}

	pub fn empty_result(game_id: &str) -> Self {
		Self::EmptyResult { game_id: game_id.to_string() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages() {
		let err = GameReferenceError::invalid_format("abc_01_DET_KC", "season must be a four digit year");
		assert_eq!(
			err.to_string(),
			"Invalid game reference \"abc_01_DET_KC\": season must be a four digit year. Expected YYYY_WEEK_HOME_VISITOR"
		);

		let err = TimelineError::not_found("2023_01_DET_KC", 2023);
		assert_eq!(err.to_string(), "Game 2023_01_DET_KC not found in the 2023 schedule");

		assert_eq!(GameClockError::invalid_seconds(61).to_string(), "Invalid seconds: 61, must be between 0 and 59");
	}

	#[test]
	fn test_reference_error_converts_to_timeline_error() {
		let err: TimelineError = GameReferenceError::invalid_format("x", "expected four tokens").into();
		assert!(matches!(err, TimelineError::InvalidReferenceFormat(_)));
	}
}

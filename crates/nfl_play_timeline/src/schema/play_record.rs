use serde::{Deserialize, Serialize};

use crate::schema::{Quarter, TeamCode};

/// One raw play-by-play row, as handed over by a data-source adapter.
///
/// Sources disagree on how they encode the clock, so both encodings are
/// optional and the timeline builder picks whichever is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
	pub quarter: Option<u8>,
	/// `mm:ss` remaining in the quarter.
	pub clock: Option<String>,
	pub game_seconds_remaining: Option<f64>,
	/// Raw possession value; may be empty, `NA` or a numeric `0` placeholder.
	pub possession: Option<String>,
	pub home_score: u32,
	pub visitor_score: u32,
	/// Running totals after the play, points scored on it included.
	pub home_total: Option<u32>,
	pub visitor_total: Option<u32>,
	pub expected_points: Option<f64>,
	pub expected_points_added: Option<f64>,
	pub description: String,
}

/// A play placed on the elapsed-seconds axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPlay {
	pub record: PlayRecord,
	pub quarter: Quarter,
	pub elapsed_seconds: f64,
	/// Position of the row in the batch handed to the builder.
	pub source_index: usize,
}

/// A timed play whose possession has been forward-filled.
///
/// `possession` is `None` only when no earlier play ever carried a valid value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlay {
	pub play: TimedPlay,
	pub possession: Option<TeamCode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPlay {
	pub play: ResolvedPlay,
	pub home_actual: u32,
	pub visitor_actual: u32,
	pub home_expected: f64,
	pub visitor_expected: f64,
}

impl ProjectedPlay {
	pub const fn elapsed_seconds(&self) -> f64 {
		self.play.play.elapsed_seconds
	}

	pub const fn record(&self) -> &PlayRecord {
		&self.play.play.record
	}
}

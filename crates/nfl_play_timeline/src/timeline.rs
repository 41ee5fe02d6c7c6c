use std::str::FromStr;

use tracing::{debug, warn};

use crate::anomaly::RowAnomaly;
use crate::schema::{PlayRecord, Quarter, QuarterClock, TimedPlay, QUARTER_SECONDS, REGULATION_SECONDS};

/// Elapsed seconds for a play encoded as seconds remaining in the game.
pub fn elapsed_from_game_seconds(game_seconds_remaining: f64) -> f64 {
	(f64::from(REGULATION_SECONDS) - game_seconds_remaining).clamp(0.0, f64::from(REGULATION_SECONDS))
}

/// Elapsed seconds for a play encoded as quarter plus seconds remaining in that quarter.
pub fn elapsed_from_quarter_clock(quarter: Quarter, remaining_in_quarter: u32) -> f64 {
	let played = QUARTER_SECONDS.saturating_sub(remaining_in_quarter);
	f64::from(quarter.start_seconds() + played)
}

/// Places raw plays on a single elapsed-seconds axis and orders them.
///
/// Rows with an unusable clock or quarter are kept and placed best-effort;
/// what was assumed for them is collected in [`TimelineBuilder::anomalies`].
#[derive(Debug, Default)]
pub struct TimelineBuilder {
	anomalies: Vec<RowAnomaly>,
}

impl TimelineBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn normalize(&mut self, raw_plays: Vec<PlayRecord>) -> Vec<TimedPlay> {
		let mut last_quarter = Quarter::First;

		raw_plays
			.into_iter()
			.enumerate()
			.map(|(source_index, record)| {
				let quarter = if let Some(quarter) = record.quarter.and_then(Quarter::from_number) {
					quarter
				} else {
					warn!(source_index, assumed = last_quarter.number(), "play without a usable quarter");
					self.anomalies.push(RowAnomaly::MissingQuarter {
						source_index,
						assumed: last_quarter.number(),
					});
					last_quarter
				};
				last_quarter = quarter;

				let elapsed_seconds = match record.game_seconds_remaining.filter(|s| s.is_finite()) {
					Some(remaining) if quarter.is_regulation() => elapsed_from_game_seconds(remaining),
					_ => elapsed_from_quarter_clock(quarter, self.remaining_in_quarter(source_index, record.clock.as_deref())),
				};

				TimedPlay {
					record,
					quarter,
					elapsed_seconds,
					source_index,
				}
			})
			.collect()
	}

	/// Stable ascending sort on elapsed seconds. The end of one quarter and
	/// the start of the next share an elapsed value, so quarter breaks that
	/// tie; remaining ties keep their source order.
	pub fn sort(mut plays: Vec<TimedPlay>) -> Vec<TimedPlay> {
		plays.sort_by(|a, b| a.elapsed_seconds.total_cmp(&b.elapsed_seconds).then(a.quarter.cmp(&b.quarter)));
		plays
	}

	pub fn build(&mut self, raw_plays: Vec<PlayRecord>) -> Vec<TimedPlay> {
		let plays = Self::sort(self.normalize(raw_plays));
		debug!(plays = plays.len(), anomalies = self.anomalies.len(), "built chronological timeline");
		plays
	}

	pub fn anomalies(&self) -> &[RowAnomaly] {
		&self.anomalies
	}

	pub fn into_anomalies(self) -> Vec<RowAnomaly> {
		self.anomalies
	}

	fn remaining_in_quarter(&mut self, source_index: usize, clock: Option<&str>) -> u32 {
		match clock.map(QuarterClock::from_str) {
			Some(Ok(clock)) => clock.remaining_seconds(),
			Some(Err(err)) => {
				warn!(source_index, %err, "malformed clock, placing play at end of quarter");
				self.anomalies.push(RowAnomaly::MalformedClock {
					source_index,
					raw: clock.map(str::to_string),
				});
				0
			}
			None => {
				warn!(source_index, "play without clock, placing play at end of quarter");
				self.anomalies.push(RowAnomaly::MalformedClock { source_index, raw: None });
				0
			}
		}
	}
}

use serde::Serialize;
use tracing::{debug, warn};

use crate::anomaly::RowAnomaly;
use crate::colors::MatchupPalette;
use crate::error::TimelineError;
use crate::lead::{classify, ColorAssignment, FinalScore, NetPoint};
use crate::possession::resolve_possession;
use crate::projection::project;
use crate::schema::{GameReference, PlayRecord, ProjectedPlay, Quarter, TeamCode};
use crate::source::{GameInfo, GameSource};
use crate::summary::{summarize_quarters, QuarterSummary};
use crate::timeline::TimelineBuilder;

/// One play of the finished timeline, flattened for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
	pub elapsed_seconds: f64,
	pub quarter: Quarter,
	pub clock: Option<String>,
	pub possession: Option<TeamCode>,
	pub home_actual: u32,
	pub visitor_actual: u32,
	pub home_expected: f64,
	pub visitor_expected: f64,
	pub net_actual: i64,
	pub net_expected: f64,
	pub expected_points: Option<f64>,
	pub expected_points_added: Option<f64>,
	pub description: String,
}

impl TimelinePoint {
	fn new(projected: ProjectedPlay, net: NetPoint) -> Self {
		let ProjectedPlay {
			play,
			home_actual,
			visitor_actual,
			home_expected,
			visitor_expected,
		} = projected;
		let record = play.play.record;

		Self {
			elapsed_seconds: play.play.elapsed_seconds,
			quarter: play.play.quarter,
			clock: record.clock,
			possession: play.possession,
			home_actual,
			visitor_actual,
			home_expected,
			visitor_expected,
			net_actual: net.net_actual,
			net_expected: net.net_expected,
			expected_points: record.expected_points,
			expected_points_added: record.expected_points_added,
			description: record.description,
		}
	}
}

/// Sorted, resolved, projected and classified plays of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
	pub game_id: String,
	pub home_team: TeamCode,
	pub visitor_team: TeamCode,
	pub final_score: FinalScore,
	pub leader: TeamCode,
	pub trailer: TeamCode,
	pub colors: ColorAssignment,
	pub palette: MatchupPalette,
	pub anomalies: Vec<RowAnomaly>,
	pub points: Vec<TimelinePoint>,
}

impl Timeline {
	/// Runs the pure part of the pipeline over one game's plays.
	///
	/// When the schedule has no final score yet, the post-play totals of the
	/// last chronological play decide the leader, falling back to its
	/// pre-snap score when the source has no totals.
	pub fn from_plays(game: &GameInfo, raw_plays: Vec<PlayRecord>) -> Self {
		let matchup = game.matchup();

		let mut builder = TimelineBuilder::new();
		let sorted = builder.build(raw_plays);
		let mut anomalies = builder.into_anomalies();

		let resolved = resolve_possession(sorted);
		let unresolved: Vec<RowAnomaly> = resolved
			.iter()
			.filter(|play| play.possession.is_none())
			.map(|play| RowAnomaly::UnresolvedPossession {
				source_index: play.play.source_index,
			})
			.collect();
		if !unresolved.is_empty() {
			warn!(game_id = %game.game_id, plays = unresolved.len(), "leading plays without possession, expected points attributed to neither team");
		}
		anomalies.extend(unresolved);

		let projected = project(resolved, &matchup);
		let final_score = game.final_score().unwrap_or_else(|| {
			let (home, visitor) = projected.last().map_or((0, 0), |play| {
				let record = play.record();
				(record.home_total.unwrap_or(play.home_actual), record.visitor_total.unwrap_or(play.visitor_actual))
			});
			debug!(game_id = %game.game_id, home, visitor, "no final score in schedule, using last play");
			FinalScore::new(home, visitor)
		});

		let lead = classify(&projected, &matchup, final_score);
		let points = projected.into_iter().zip(lead.net).map(|(play, net)| TimelinePoint::new(play, net)).collect();

		Self {
			game_id: game.game_id.clone(),
			home_team: matchup.home,
			visitor_team: matchup.visitor,
			final_score,
			leader: lead.leader,
			trailer: lead.trailer,
			colors: lead.colors,
			palette: MatchupPalette::default(),
			anomalies,
			points,
		}
	}

	#[must_use]
	pub fn with_palette(mut self, palette: MatchupPalette) -> Self {
		self.palette = palette;
		self
	}

	/// (leader colour, trailer colour)
	pub fn lead_colors(&self) -> (&str, &str) {
		self.palette.resolve(self.colors)
	}

	pub fn unresolved_possessions(&self) -> usize {
		self.anomalies.iter().filter(|a| matches!(a, RowAnomaly::UnresolvedPossession { .. })).count()
	}

	pub fn plays_missing_expected_points(&self) -> usize {
		self.points.iter().filter(|p| p.expected_points.is_none()).count()
	}

	pub fn quarter_summaries(&self) -> Vec<QuarterSummary> {
		summarize_quarters(&self.points)
	}
}

/// Looks up a game and builds its timeline.
///
/// A malformed reference fails before the source is touched, and a game
/// missing from the schedule fails before any play data is loaded.
pub fn build_timeline<S: GameSource + ?Sized>(reference: &str, source: &S) -> Result<Timeline, TimelineError> {
	let reference = GameReference::parse(reference)?;

	let Some(game) = source.find_game(&reference)? else {
		return Err(TimelineError::not_found(&reference.game_id(), reference.season()));
	};

	let plays = source.load_plays(&game)?;
	if plays.is_empty() {
		return Err(TimelineError::empty_result(&game.game_id));
	}
	debug!(game_id = %game.game_id, plays = plays.len(), "building timeline");

	let palette = match (source.team_colors(&game.home_team), source.team_colors(&game.visitor_team)) {
		(Ok(home), Ok(visitor)) => MatchupPalette::from_team_colors(home.as_ref(), visitor.as_ref()),
		(Err(err), _) | (_, Err(err)) => {
			warn!(%err, "could not load team colors, using default palette");
			MatchupPalette::default()
		}
	};

	Ok(Timeline::from_plays(&game, plays).with_palette(palette))
}

pub mod csv_source;

pub use csv_source::CsvGameSource;

use serde::{Deserialize, Serialize};

use crate::colors::TeamColors;
use crate::error::SourceError;
use crate::lead::FinalScore;
use crate::schema::{GameReference, Matchup, PlayRecord, TeamCode};

/// Schedule entry for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
	pub game_id: String,
	pub season: u16,
	pub week: u8,
	pub home_team: TeamCode,
	pub visitor_team: TeamCode,
	pub home_score: Option<u32>,
	pub visitor_score: Option<u32>,
}

impl GameInfo {
	pub fn matchup(&self) -> Matchup {
		Matchup {
			home: self.home_team.clone(),
			visitor: self.visitor_team.clone(),
		}
	}

	/// `None` until both scores are known.
	pub fn final_score(&self) -> Option<FinalScore> {
		Some(FinalScore::new(self.home_score?, self.visitor_score?))
	}

	pub fn involves(&self, team: &TeamCode) -> bool {
		self.home_team == *team || self.visitor_team == *team
	}
}

/// Where schedules and play-by-play rows come from.
///
/// Implementations are thin translators from a concrete data layout into
/// [`GameInfo`] and [`PlayRecord`]; all timeline logic stays in the pipeline.
pub trait GameSource {
	/// Looks up the schedule entry for `reference`, `None` if the season has no such game.
	fn find_game(&self, reference: &GameReference) -> Result<Option<GameInfo>, SourceError>;

	/// Play rows for a scheduled game, in whatever order the source keeps them.
	fn load_plays(&self, game: &GameInfo) -> Result<Vec<PlayRecord>, SourceError>;

	/// Every game `team` played at home or away in `season`, ordered by game id.
	fn team_games(&self, season: u16, team: &TeamCode) -> Result<Vec<GameInfo>, SourceError>;

	fn team_colors(&self, _team: &TeamCode) -> Result<Option<TeamColors>, SourceError> {
		Ok(None)
	}
}

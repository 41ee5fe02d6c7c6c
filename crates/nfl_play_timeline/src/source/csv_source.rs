use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::colors::TeamColors;
use crate::error::SourceError;
use crate::possession::valid_possession;
use crate::schema::{GameReference, Matchup, PlayRecord, Side, TeamCode};
use crate::source::{GameInfo, GameSource};

pub const SCHEDULE_FILE: &str = "games.csv";
pub const TEAM_COLORS_FILE: &str = "teams_colors_logos.csv";

pub fn play_by_play_file(season: u16) -> String {
	format!("play_by_play_{season}.csv")
}

/// Reads nflverse CSV exports from a local directory.
///
/// Expects `games.csv` for schedules and one `play_by_play_<season>.csv`
/// per season; `teams_colors_logos.csv` is optional.
#[derive(Debug, Clone)]
pub struct CsvGameSource {
	data_dir: PathBuf,
}

impl CsvGameSource {
	pub fn new(data_dir: impl Into<PathBuf>) -> Self {
		Self { data_dir: data_dir.into() }
	}

	pub fn data_dir(&self) -> &Path {
		&self.data_dir
	}

	fn open(&self, file_name: &str) -> Result<csv::Reader<File>, SourceError> {
		let path = self.data_dir.join(file_name);
		if !path.is_file() {
			return Err(SourceError::MissingFile { path });
		}
		debug!(path = %path.display(), "reading csv");
		Ok(csv::Reader::from_path(&path)?)
	}

	fn schedule(&self) -> Result<impl Iterator<Item = Result<GameInfo, SourceError>>, SourceError> {
		let reader = self.open(SCHEDULE_FILE)?;
		Ok(reader
			.into_deserialize::<ScheduleRow>()
			.filter_map(|row| row.map_err(SourceError::from).map(ScheduleRow::into_game_info).transpose()))
	}
}

impl GameSource for CsvGameSource {
	fn find_game(&self, reference: &GameReference) -> Result<Option<GameInfo>, SourceError> {
		let game_id = reference.game_id();
		for game in self.schedule()? {
			let game = game?;
			if game.game_id == game_id && game.season == reference.season() {
				return Ok(Some(game));
			}
		}
		Ok(None)
	}

	fn load_plays(&self, game: &GameInfo) -> Result<Vec<PlayRecord>, SourceError> {
		let matchup = game.matchup();
		let mut totals = (0, 0);
		let mut plays = Vec::new();

		for row in self.open(&play_by_play_file(game.season))?.into_deserialize::<PlayByPlayRow>() {
			let row = row?;
			if row.game_id == game.game_id {
				plays.push(row.into_record(&matchup, &mut totals));
			}
		}

		debug!(game_id = %game.game_id, plays = plays.len(), "loaded play-by-play rows");
		Ok(plays)
	}

	fn team_games(&self, season: u16, team: &TeamCode) -> Result<Vec<GameInfo>, SourceError> {
		let mut games = Vec::new();
		for game in self.schedule()? {
			let game = game?;
			if game.season == season && game.involves(team) {
				games.push(game);
			}
		}
		games.sort_by(|a, b| a.game_id.cmp(&b.game_id));
		Ok(games)
	}

	fn team_colors(&self, team: &TeamCode) -> Result<Option<TeamColors>, SourceError> {
		let reader = match self.open(TEAM_COLORS_FILE) {
			Ok(reader) => reader,
			Err(SourceError::MissingFile { .. }) => return Ok(None),
			Err(err) => return Err(err),
		};

		for row in reader.into_deserialize::<TeamColorsRow>() {
			let row = row?;
			if *team == row.team_abbr.as_str() {
				return Ok(Some(TeamColors::new(row.team_color.as_deref(), row.team_color2.as_deref())));
			}
		}
		Ok(None)
	}
}

#[derive(Debug, Deserialize)]
struct ScheduleRow {
	game_id: String,
	#[serde(default, deserialize_with = "lenient_number")]
	season: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	week: Option<f64>,
	home_team: String,
	away_team: String,
	#[serde(default, deserialize_with = "lenient_number")]
	home_score: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	away_score: Option<f64>,
}

impl ScheduleRow {
	/// Rows without a usable season or week are skipped.
	fn into_game_info(self) -> Option<GameInfo> {
		Some(GameInfo {
			season: self.season.and_then(whole_number)?,
			week: self.week.and_then(whole_number)?,
			home_team: TeamCode::new(self.home_team),
			visitor_team: TeamCode::new(self.away_team),
			home_score: self.home_score.and_then(whole_number),
			visitor_score: self.away_score.and_then(whole_number),
			game_id: self.game_id,
		})
	}
}

#[derive(Debug, Deserialize)]
struct PlayByPlayRow {
	game_id: String,
	#[serde(default, deserialize_with = "lenient_number")]
	qtr: Option<f64>,
	#[serde(default)]
	time: Option<String>,
	#[serde(default, deserialize_with = "lenient_number")]
	game_seconds_remaining: Option<f64>,
	#[serde(default)]
	posteam: Option<String>,
	#[serde(default, deserialize_with = "lenient_number")]
	total_home_score: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	total_away_score: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	posteam_score: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	defteam_score: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	ep: Option<f64>,
	#[serde(default, deserialize_with = "lenient_number")]
	epa: Option<f64>,
	#[serde(default)]
	desc: Option<String>,
}

impl PlayByPlayRow {
	/// `totals` carries the last known running score across rows missing one.
	fn into_record(self, matchup: &Matchup, totals: &mut (u32, u32)) -> PlayRecord {
		let home_total = self.total_home_score.and_then(whole_number).unwrap_or(totals.0);
		let visitor_total = self.total_away_score.and_then(whole_number).unwrap_or(totals.1);
		*totals = (home_total, visitor_total);

		// posteam/defteam scores are pre-snap; the running totals already include points scored on this play.
		let offense = valid_possession(self.posteam.as_deref()).and_then(|team| matchup.side_of(&team));
		let pre_snap = self.posteam_score.and_then(whole_number).zip(self.defteam_score.and_then(whole_number));
		let (home_score, visitor_score) = match (offense, pre_snap) {
			(Some(Side::Home), Some((offense, defense))) => (offense, defense),
			(Some(Side::Visitor), Some((offense, defense))) => (defense, offense),
			_ => (home_total, visitor_total),
		};

		PlayRecord {
			quarter: self.qtr.and_then(whole_number),
			clock: self.time,
			game_seconds_remaining: self.game_seconds_remaining,
			possession: self.posteam,
			home_score,
			visitor_score,
			home_total: Some(home_total),
			visitor_total: Some(visitor_total),
			expected_points: self.ep,
			expected_points_added: self.epa,
			description: self.desc.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Deserialize)]
struct TeamColorsRow {
	team_abbr: String,
	#[serde(default)]
	team_color: Option<String>,
	#[serde(default)]
	team_color2: Option<String>,
}

/// Numeric cells may be empty, `NA`, or written as floats (`21.0`).
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<String>::deserialize(deserializer)?;
	Ok(raw.and_then(|value| value.trim().parse::<f64>().ok()).filter(|value| value.is_finite()))
}

fn whole_number<T: TryFrom<i64>>(value: f64) -> Option<T> {
	if value.fract() != 0.0 || value < 0.0 || value > i64::MAX as f64 {
		return None;
	}
	T::try_from(value as i64).ok()
}

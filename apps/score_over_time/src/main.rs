mod config;
mod display;
mod logging;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use nfl_play_timeline::{build_timeline, CsvGameSource, GameSource, TeamCode, TimelineError};
use tracing::{debug, error, info, warn};

use crate::config::{Command, Config};

fn main() -> ExitCode {
	dotenv::dotenv().ok();

	let config = Config::parse();
	logging::init_tracing(&config);

	match run(&config) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!(error = %err, "score_over_time failed");
			eprintln!("Error: {err:#}");
			ExitCode::from(exit_status(&err))
		}
	}
}

fn run(config: &Config) -> Result<()> {
	let source = CsvGameSource::new(&config.data_dir);
	debug!(data_dir = %source.data_dir().display(), "using nflverse exports");

	match &config.command {
		Command::Timeline { game_id, output, format, debug } => {
			let timeline = build_timeline(game_id, &source)?;
			info!(
				game_id = %timeline.game_id,
				leader = %timeline.leader,
				points = timeline.points.len(),
				anomalies = timeline.anomalies.len(),
				"timeline built"
			);

			if *debug {
				for summary in timeline.quarter_summaries() {
					debug!("{summary}");
				}
				let missing = timeline.plays_missing_expected_points();
				if missing > 0 {
					warn!(missing, "plays without expected points");
				}
			}

			output::write_timeline(&timeline, *format, output.as_deref()).context("writing timeline")?;
		}
		Command::Plays { game_id } => {
			let points = match build_timeline(game_id, &source) {
				Ok(timeline) => timeline.points,
				Err(TimelineError::EmptyResult { .. }) => Vec::new(),
				Err(err) => return Err(err.into()),
			};
			let mut stdout = io::stdout().lock();
			display::write_plays(&mut stdout, &points)?;
			stdout.flush()?;
		}
		Command::Games { season, team } => {
			let games = source.team_games(*season, &TeamCode::new(team.as_str()))?;
			let mut stdout = io::stdout().lock();
			display::write_games(&mut stdout, *season, team, &games)?;
			stdout.flush()?;
		}
	}

	Ok(())
}

fn exit_status(err: &anyhow::Error) -> u8 {
	match err.downcast_ref::<TimelineError>() {
		Some(TimelineError::InvalidReferenceFormat(_)) => 2,
		Some(TimelineError::NotFound { .. }) => 3,
		Some(TimelineError::EmptyResult { .. }) => 4,
		_ => 1,
	}
}

use std::io::{self, Write};

use nfl_play_timeline::{GameInfo, TimelinePoint};

pub fn write_plays<W: Write>(writer: &mut W, points: &[TimelinePoint]) -> io::Result<()> {
	if points.is_empty() {
		return writeln!(writer, "No play-by-play data available to display.");
	}

	writeln!(writer, "--- Play-by-Play Data ---")?;
	for point in points {
		writeln!(
			writer,
			"Q{} {} - {}",
			point.quarter.number(),
			point.clock.as_deref().unwrap_or("--:--"),
			point.description
		)?;
	}
	writeln!(writer, "-------------------------")
}

pub fn write_games<W: Write>(writer: &mut W, season: u16, team: &str, games: &[GameInfo]) -> io::Result<()> {
	if games.is_empty() {
		return writeln!(writer, "No games found for {team} in {season}.");
	}

	writeln!(writer, "Games for {team} in {season}:")?;
	writeln!(writer, "{:<20} | {:<5} | {:<5} | Score", "Game ID", "Home", "Away")?;
	writeln!(writer, "{}", "-".repeat(50))?;
	for game in games {
		let score = match (game.home_score, game.visitor_score) {
			(Some(home), Some(visitor)) => format!("{} {home} - {} {visitor}", game.home_team, game.visitor_team),
			_ => "N/A".to_string(),
		};
		writeln!(
			writer,
			"{:<20} | {:<5} | {:<5} | {score}",
			game.game_id,
			game.home_team.as_str(),
			game.visitor_team.as_str()
		)?;
	}
	Ok(())
}

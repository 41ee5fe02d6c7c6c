use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nfl_play_timeline::Timeline;
use thiserror::Error;
use tracing::info;

use crate::config::Format;

#[derive(Debug, Error)]
pub enum OutputError {
	#[error("Failed to write timeline: {0}")]
	Io(#[from] io::Error),

	#[error("Failed to encode timeline as JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Failed to encode timeline as CSV: {0}")]
	Csv(#[from] csv::Error),
}

/// Writes the timeline to `path`, or stdout when no path is given.
pub fn write_timeline(timeline: &Timeline, format: Format, path: Option<&Path>) -> Result<(), OutputError> {
	match path {
		Some(path) => {
			let mut writer = BufWriter::new(File::create(path)?);
			encode(timeline, format, &mut writer)?;
			writer.flush()?;
			info!(path = %path.display(), points = timeline.points.len(), "timeline written");
		}
		None => {
			let mut stdout = io::stdout().lock();
			encode(timeline, format, &mut stdout)?;
			stdout.flush()?;
		}
	}
	Ok(())
}

pub fn encode<W: Write>(timeline: &Timeline, format: Format, writer: &mut W) -> Result<(), OutputError> {
	match format {
		Format::Json => {
			serde_json::to_writer_pretty(&mut *writer, timeline)?;
			writeln!(writer)?;
		}
		Format::Csv => {
			// One row per point; game-level fields live in the JSON form only.
			let mut csv = csv::Writer::from_writer(writer);
			for point in &timeline.points {
				csv.serialize(point)?;
			}
			csv.flush()?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use nfl_play_timeline::{GameInfo, PlayRecord, TeamCode};

	fn timeline() -> Timeline {
		let game = GameInfo {
			game_id: "2023_01_DET_KC".to_string(),
			season: 2023,
			week: 1,
			home_team: TeamCode::new("KC"),
			visitor_team: TeamCode::new("DET"),
			home_score: Some(20),
			visitor_score: Some(21),
		};
		let plays = vec![
			PlayRecord {
				quarter: Some(1),
				game_seconds_remaining: Some(3600.0),
				possession: Some("KC".to_string()),
				expected_points: Some(1.5),
				description: "Kickoff".to_string(),
				..PlayRecord::default()
			},
			PlayRecord {
				quarter: Some(2),
				clock: Some("07:30".to_string()),
				possession: Some("DET".to_string()),
				home_score: 7,
				description: "Run, left end".to_string(),
				..PlayRecord::default()
			},
		];
		Timeline::from_plays(&game, plays)
	}

	#[test]
	fn test_encode_json() {
		let mut buf = Vec::new();
		encode(&timeline(), Format::Json, &mut buf).unwrap();

		let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
		assert_eq!(value["game_id"], "2023_01_DET_KC");
		assert_eq!(value["leader"], "DET");
		assert_eq!(value["palette"]["home"], "#0000FF");
		assert_eq!(value["points"].as_array().map(Vec::len), Some(2));
		assert_eq!(value["points"][0]["home_expected"], 1.5);
	}

	#[test]
	fn test_encode_csv() {
		let mut buf = Vec::new();
		encode(&timeline(), Format::Csv, &mut buf).unwrap();

		let text = String::from_utf8(buf).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].starts_with("elapsed_seconds,quarter,clock,possession,home_actual"));
		assert!(lines[0].ends_with(",description"));
		assert!(lines[2].starts_with("1350.0,2,07:30,DET,7,0,"));
		assert!(lines[2].ends_with(",\"Run, left end\""));
	}

	#[test]
	fn test_write_timeline_to_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("timeline.json");

		write_timeline(&timeline(), Format::Json, Some(&path)).unwrap();

		let written = std::fs::read_to_string(&path).unwrap();
		assert!(written.contains("\"trailer\": \"KC\""));
	}
}

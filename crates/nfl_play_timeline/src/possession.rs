use tracing::debug;

use crate::schema::{ResolvedPlay, TeamCode, TimedPlay};

const NULL_SENTINELS: [&str; 4] = ["na", "nan", "null", "none"];

/// Returns the team code if `raw` names a team.
///
/// Absent values, empty strings, null-like sentinels and numeric zero
/// placeholders all mean "no possession".
pub fn valid_possession(raw: Option<&str>) -> Option<TeamCode> {
	let value = raw?.trim();
	if value.is_empty() || NULL_SENTINELS.iter().any(|sentinel| value.eq_ignore_ascii_case(sentinel)) {
		return None;
	}
	if value.parse::<f64>().is_ok_and(|n| n == 0.0 || n.is_nan()) {
		return None;
	}
	Some(TeamCode::new(value))
}

/// Forward-fills possession across a chronologically sorted sequence.
///
/// Strictly left to right: leading plays without possession stay unresolved.
pub fn resolve_possession(sorted_plays: Vec<TimedPlay>) -> Vec<ResolvedPlay> {
	let mut last_valid: Option<TeamCode> = None;
	let mut filled = 0usize;

	let resolved: Vec<ResolvedPlay> = sorted_plays
		.into_iter()
		.map(|play| {
			match valid_possession(play.record.possession.as_deref()) {
				Some(team) => last_valid = Some(team),
				None if last_valid.is_some() => filled += 1,
				None => {}
			}
			ResolvedPlay {
				play,
				possession: last_valid.clone(),
			}
		})
		.collect();

	debug!(plays = resolved.len(), filled, "resolved possession");
	resolved
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{PlayRecord, Quarter};

	fn play(possession: Option<&str>) -> TimedPlay {
		TimedPlay {
			record: PlayRecord {
				possession: possession.map(str::to_string),
				..PlayRecord::default()
			},
			quarter: Quarter::First,
			elapsed_seconds: 0.0,
			source_index: 0,
		}
	}

	fn possessions(resolved: &[ResolvedPlay]) -> Vec<Option<&str>> {
		resolved.iter().map(|p| p.possession.as_ref().map(TeamCode::as_str)).collect()
	}

	#[test]
	fn test_invalid_possession_values() {
		for raw in [None, Some(""), Some("  "), Some("NA"), Some("nan"), Some("NaN"), Some("null"), Some("None"), Some("0"), Some("0.0")] {
			assert_eq!(valid_possession(raw), None, "raw: {raw:?}");
		}
		assert_eq!(valid_possession(Some("KC")), Some(TeamCode::new("KC")));
		assert_eq!(valid_possession(Some(" DET ")), Some(TeamCode::new("DET")));
	}

	#[test]
	fn test_forward_fill_through_timeouts() {
		let resolved = resolve_possession(vec![play(Some("KC")), play(None), play(Some("0")), play(Some("KC"))]);
		assert_eq!(possessions(&resolved), vec![Some("KC"); 4]);
	}

	#[test]
	fn test_fill_uses_nearest_earlier_value() {
		let resolved = resolve_possession(vec![play(Some("KC")), play(Some("DET")), play(Some("")), play(Some("KC")), play(None)]);
		assert_eq!(possessions(&resolved), vec![Some("KC"), Some("DET"), Some("DET"), Some("KC"), Some("KC")]);
	}

	#[test]
	fn test_leading_plays_stay_unresolved() {
		let resolved = resolve_possession(vec![play(None), play(Some("NA")), play(Some("DET")), play(None)]);
		assert_eq!(possessions(&resolved), vec![None, None, Some("DET"), Some("DET")]);
	}
}

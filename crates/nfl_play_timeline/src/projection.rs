use tracing::debug;

use crate::schema::{Matchup, ProjectedPlay, ResolvedPlay, Side};

/// Computes actual and expected scores for every play.
///
/// Actual scores are the running totals already on the record. The
/// expected score adds the play's expected points to the team in
/// possession only; with unresolved possession, or a possession code that
/// belongs to neither team, both expected scores equal the actual ones.
pub fn project(resolved_plays: Vec<ResolvedPlay>, matchup: &Matchup) -> Vec<ProjectedPlay> {
	let mut unattributed = 0usize;

	let projected: Vec<ProjectedPlay> = resolved_plays
		.into_iter()
		.map(|play| {
			let home_actual = play.play.record.home_score;
			let visitor_actual = play.play.record.visitor_score;
			let expected_points = play.play.record.expected_points.filter(|ep| ep.is_finite());

			let holder = play.possession.as_ref().and_then(|team| matchup.side_of(team));
			if holder.is_none() && expected_points.is_some() {
				unattributed += 1;
			}

			let bonus = |side: Side| match (holder, expected_points) {
				(Some(holder), Some(ep)) if holder == side => ep,
				_ => 0.0,
			};

			ProjectedPlay {
				home_expected: f64::from(home_actual) + bonus(Side::Home),
				visitor_expected: f64::from(visitor_actual) + bonus(Side::Visitor),
				home_actual,
				visitor_actual,
				play,
			}
		})
		.collect();

	debug!(plays = projected.len(), unattributed, "projected expected scores");
	projected
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{PlayRecord, Quarter, TeamCode, TimedPlay};

	fn resolved(possession: Option<&str>, home: u32, visitor: u32, ep: Option<f64>) -> ResolvedPlay {
		ResolvedPlay {
			play: TimedPlay {
				record: PlayRecord {
					home_score: home,
					visitor_score: visitor,
					expected_points: ep,
					..PlayRecord::default()
				},
				quarter: Quarter::First,
				elapsed_seconds: 0.0,
				source_index: 0,
			},
			possession: possession.map(TeamCode::new),
		}
	}

	#[test]
	fn test_expected_points_go_to_possessing_team() {
		let matchup = Matchup::new("KC", "DET");
		let projected = project(
			vec![resolved(Some("KC"), 7, 3, Some(2.5)), resolved(Some("DET"), 7, 3, Some(-0.75))],
			&matchup,
		);

		assert_eq!((projected[0].home_actual, projected[0].visitor_actual), (7, 3));
		assert_eq!((projected[0].home_expected, projected[0].visitor_expected), (9.5, 3.0));
		assert_eq!((projected[1].home_expected, projected[1].visitor_expected), (7.0, 2.25));
	}

	#[test]
	fn test_missing_expected_points_adds_nothing() {
		let projected = project(vec![resolved(Some("KC"), 14, 10, None)], &Matchup::new("KC", "DET"));
		assert_eq!((projected[0].home_expected, projected[0].visitor_expected), (14.0, 10.0));
	}

	#[test]
	fn test_unresolved_possession_attributes_to_neither_team() {
		let matchup = Matchup::new("KC", "DET");
		let projected = project(vec![resolved(None, 0, 0, Some(0.9)), resolved(Some("BUF"), 3, 0, Some(1.2))], &matchup);

		for play in &projected {
			assert_eq!(play.home_expected, f64::from(play.home_actual));
			assert_eq!(play.visitor_expected, f64::from(play.visitor_actual));
		}
	}

	#[test]
	fn test_expected_never_below_actual_for_non_negative_ep() {
		let matchup = Matchup::new("KC", "DET");
		let plays: Vec<ResolvedPlay> = (0..20)
			.map(|i| {
				let team = if i % 3 == 0 { "DET" } else { "KC" };
				resolved(Some(team), i, 20 - i, Some(f64::from(i) * 0.25))
			})
			.collect();

		for play in project(plays, &matchup) {
			assert!(play.home_expected >= f64::from(play.home_actual));
			assert!(play.visitor_expected >= f64::from(play.visitor_actual));
			match play.play.possession.as_ref().map(TeamCode::as_str) {
				Some("KC") => assert_eq!(play.visitor_expected, f64::from(play.visitor_actual)),
				Some("DET") => assert_eq!(play.home_expected, f64::from(play.home_actual)),
				other => panic!("unexpected possession {other:?}"),
			}
		}
	}
}

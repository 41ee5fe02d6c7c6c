use serde::Serialize;
use tracing::debug;

use crate::schema::{Matchup, ProjectedPlay, Side, TeamCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalScore {
	pub home: u32,
	pub visitor: u32,
}

impl FinalScore {
	pub const fn new(home: u32, visitor: u32) -> Self {
		Self { home, visitor }
	}

	/// Ties go to the home team.
	pub const fn winner(self) -> Side {
		if self.home >= self.visitor {
			Side::Home
		} else {
			Side::Visitor
		}
	}
}

/// Which side's colour paints the positive (leader) and negative (trailer) areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorAssignment {
	pub leader: Side,
	pub trailer: Side,
}

/// Lead of the eventual winner at one play; positive while the winner is ahead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetPoint {
	pub net_actual: i64,
	pub net_expected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadClassification {
	pub leader: TeamCode,
	pub trailer: TeamCode,
	pub colors: ColorAssignment,
	pub net: Vec<NetPoint>,
}

/// Fixes leader and trailer once from the final score and orients both net
/// series so the leader's margin is positive for the whole game.
pub fn classify(projected_plays: &[ProjectedPlay], matchup: &Matchup, final_score: FinalScore) -> LeadClassification {
	let leader_side = final_score.winner();
	let trailer_side = leader_side.opponent();

	let net = projected_plays
		.iter()
		.map(|play| {
			let (home_minus_visitor, home_minus_visitor_expected) = (
				i64::from(play.home_actual) - i64::from(play.visitor_actual),
				play.home_expected - play.visitor_expected,
			);
			match leader_side {
				Side::Home => NetPoint {
					net_actual: home_minus_visitor,
					net_expected: home_minus_visitor_expected,
				},
				Side::Visitor => NetPoint {
					net_actual: -home_minus_visitor,
					net_expected: -home_minus_visitor_expected,
				},
			}
		})
		.collect();

	let classification = LeadClassification {
		leader: matchup.team(leader_side).clone(),
		trailer: matchup.team(trailer_side).clone(),
		colors: ColorAssignment {
			leader: leader_side,
			trailer: trailer_side,
		},
		net,
	};
	debug!(leader = %classification.leader, trailer = %classification.trailer, "classified lead");
	classification
}

use serde::{Deserialize, Serialize};

use crate::lead::ColorAssignment;
use crate::schema::Side;

pub const DEFAULT_HOME_COLOR: &str = "#0000FF";
pub const DEFAULT_VISITOR_COLOR: &str = "#FF0000";
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
	pub primary: String,
	pub secondary: String,
}

impl TeamColors {
	/// Black/white stand in for colours the source leaves empty.
	pub fn new(primary: Option<&str>, secondary: Option<&str>) -> Self {
		let pick = |value: Option<&str>, fallback: &str| value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback).to_string();
		Self {
			primary: pick(primary, "#000000"),
			secondary: pick(secondary, "#FFFFFF"),
		}
	}
}

/// Parses `#RRGGBB` or `#RGB` into its channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
	let digits = hex.trim().trim_start_matches('#');
	let expanded: String = match digits.len() {
		3 => digits.chars().flat_map(|c| [c, c]).collect(),
		6 => digits.to_string(),
		_ => return None,
	};

	let channel = |i: usize| expanded.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok());
	Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Euclidean distance between two colours in RGB space.
pub fn color_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
	let d = |x: u8, y: u8| f64::from(x) - f64::from(y);
	(d(a.0, b.0).powi(2) + d(a.1, b.1).powi(2) + d(a.2, b.2).powi(2)).sqrt()
}

/// Home primary against visitor primary, switching the visitor to its
/// secondary colour when the two primaries are closer than `threshold`.
pub fn distinct_colors(home: &TeamColors, visitor: &TeamColors, threshold: f64) -> (String, String) {
	let too_close = match (hex_to_rgb(&home.primary), hex_to_rgb(&visitor.primary)) {
		(Some(h), Some(v)) => color_distance(h, v) < threshold,
		_ => false,
	};

	if too_close {
		(home.primary.clone(), visitor.secondary.clone())
	} else {
		(home.primary.clone(), visitor.primary.clone())
	}
}

/// Display colours for the two sides of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchupPalette {
	pub home: String,
	pub visitor: String,
}

impl Default for MatchupPalette {
	fn default() -> Self {
		Self {
			home: DEFAULT_HOME_COLOR.to_string(),
			visitor: DEFAULT_VISITOR_COLOR.to_string(),
		}
	}
}

impl MatchupPalette {
	/// Falls back to the default blue/red pairing unless both teams have colours.
	pub fn from_team_colors(home: Option<&TeamColors>, visitor: Option<&TeamColors>) -> Self {
		match (home, visitor) {
			(Some(home), Some(visitor)) => {
				let (home, visitor) = distinct_colors(home, visitor, DEFAULT_CONTRAST_THRESHOLD);
				Self { home, visitor }
			}
			_ => Self::default(),
		}
	}

	pub fn color(&self, side: Side) -> &str {
		match side {
			Side::Home => &self.home,
			Side::Visitor => &self.visitor,
		}
	}

	/// (leader colour, trailer colour)
	pub fn resolve(&self, assignment: ColorAssignment) -> (&str, &str) {
		(self.color(assignment.leader), self.color(assignment.trailer))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn colors(primary: &str, secondary: &str) -> TeamColors {
		TeamColors::new(Some(primary), Some(secondary))
	}

	#[test]
	fn test_hex_to_rgb() {
		assert_eq!(hex_to_rgb("#E31837"), Some((227, 24, 55)));
		assert_eq!(hex_to_rgb("0076B6"), Some((0, 118, 182)));
		assert_eq!(hex_to_rgb("#fff"), Some((255, 255, 255)));
		assert_eq!(hex_to_rgb("#12345"), None);
		assert_eq!(hex_to_rgb("#GGGGGG"), None);
	}

	#[test]
	fn test_color_distance() {
		assert_eq!(color_distance((0, 0, 0), (0, 0, 0)), 0.0);
		assert_eq!(color_distance((0, 0, 0), (3, 4, 0)), 5.0);
	}

	#[test]
	fn test_distinct_colors_switches_visitor_to_secondary() {
		let kc = colors("#E31837", "#FFB612");
		let tb = colors("#D50A0A", "#34302B");
		let det = colors("#0076B6", "#B0B7BC");

		assert_eq!(distinct_colors(&kc, &det, 50.0), ("#E31837".to_string(), "#0076B6".to_string()));
		assert_eq!(distinct_colors(&kc, &tb, 50.0), ("#E31837".to_string(), "#34302B".to_string()));
	}

	#[test]
	fn test_empty_team_colors_fall_back() {
		assert_eq!(TeamColors::new(Some(""), None), colors("#000000", "#FFFFFF"));
	}

	#[test]
	fn test_palette_resolves_assignment() {
		let palette = MatchupPalette::from_team_colors(None, Some(&colors("#0076B6", "#B0B7BC")));
		assert_eq!(palette, MatchupPalette::default());

		let assignment = ColorAssignment {
			leader: Side::Visitor,
			trailer: Side::Home,
		};
		assert_eq!(palette.resolve(assignment), (DEFAULT_VISITOR_COLOR, DEFAULT_HOME_COLOR));
	}
}

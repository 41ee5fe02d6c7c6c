use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::pipeline::TimelinePoint;
use crate::schema::{Quarter, REGULATION_SECONDS};

/// Per-quarter distribution of a timeline, for eyeballing clock and EP gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterSummary {
	pub quarter: Quarter,
	pub plays: usize,
	pub min_seconds_remaining: f64,
	pub max_seconds_remaining: f64,
	pub first_elapsed: f64,
	pub last_elapsed: f64,
	pub min_expected_points: Option<f64>,
	pub max_expected_points: Option<f64>,
	pub mean_expected_points: Option<f64>,
	pub missing_expected_points: usize,
}

impl QuarterSummary {
	pub fn duration(&self) -> f64 {
		(self.last_elapsed - self.first_elapsed).abs()
	}
}

impl fmt::Display for QuarterSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: Range [{:7.1}, {:7.1}], Duration: {:6.1}s, Plays: {:3}",
			self.quarter,
			self.first_elapsed,
			self.last_elapsed,
			self.duration(),
			self.plays
		)?;
		if let Some(mean) = self.mean_expected_points {
			write!(f, ", EP mean: {mean:.2}")?;
		}
		if self.missing_expected_points > 0 {
			write!(f, ", missing EP: {}", self.missing_expected_points)?;
		}
		Ok(())
	}
}

pub fn summarize_quarters(points: &[TimelinePoint]) -> Vec<QuarterSummary> {
	let mut by_quarter: BTreeMap<Quarter, Vec<&TimelinePoint>> = BTreeMap::new();
	for point in points {
		by_quarter.entry(point.quarter).or_default().push(point);
	}

	by_quarter
		.into_iter()
		.filter_map(|(quarter, points)| {
			let first = points.first()?;
			let last = points.last()?;
			let remaining: Vec<f64> = points.iter().map(|p| f64::from(REGULATION_SECONDS) - p.elapsed_seconds).collect();
			let expected: Vec<f64> = points.iter().filter_map(|p| p.expected_points).collect();

			Some(QuarterSummary {
				quarter,
				plays: points.len(),
				min_seconds_remaining: remaining.iter().copied().fold(f64::INFINITY, f64::min),
				max_seconds_remaining: remaining.iter().copied().fold(f64::NEG_INFINITY, f64::max),
				first_elapsed: first.elapsed_seconds,
				last_elapsed: last.elapsed_seconds,
				min_expected_points: expected.iter().copied().reduce(f64::min),
				max_expected_points: expected.iter().copied().reduce(f64::max),
				mean_expected_points: (!expected.is_empty()).then(|| expected.iter().sum::<f64>() / expected.len() as f64),
				missing_expected_points: points.len() - expected.len(),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn point(quarter: Quarter, elapsed_seconds: f64, expected_points: Option<f64>) -> TimelinePoint {
		TimelinePoint {
			elapsed_seconds,
			quarter,
			clock: None,
			possession: None,
			home_actual: 0,
			visitor_actual: 0,
			home_expected: 0.0,
			visitor_expected: 0.0,
			net_actual: 0,
			net_expected: 0.0,
			expected_points,
			expected_points_added: None,
			description: String::new(),
		}
	}

	#[test]
	fn test_summarize_quarters() {
		let points = vec![
			point(Quarter::First, 0.0, Some(1.0)),
			point(Quarter::First, 300.0, Some(3.0)),
			point(Quarter::First, 880.0, None),
			point(Quarter::Second, 950.0, Some(-0.5)),
		];

		let summaries = summarize_quarters(&points);
		assert_eq!(summaries.len(), 2);

		let first = &summaries[0];
		assert_eq!(first.quarter, Quarter::First);
		assert_eq!(first.plays, 3);
		assert_eq!((first.min_seconds_remaining, first.max_seconds_remaining), (2720.0, 3600.0));
		assert_eq!(first.duration(), 880.0);
		assert_eq!((first.min_expected_points, first.max_expected_points, first.mean_expected_points), (Some(1.0), Some(3.0), Some(2.0)));
		assert_eq!(first.missing_expected_points, 1);
		assert_eq!(
			first.to_string(),
			"Q1: Range [    0.0,   880.0], Duration:  880.0s, Plays:   3, EP mean: 2.00, missing EP: 1"
		);

		assert_eq!(summaries[1].mean_expected_points, Some(-0.5));
	}

	#[test]
	fn test_quarter_without_expected_points() {
		let summaries = summarize_quarters(&[point(Quarter::Fourth, 3000.0, None)]);
		assert_eq!(summaries[0].mean_expected_points, None);
		assert_eq!(summaries[0].missing_expected_points, 1);
	}
}

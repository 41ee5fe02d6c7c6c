use serde::Serialize;

/// A row-level problem that was recovered in place instead of failing the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowAnomaly {
	/// The clock could not be read; the play was placed at the end of its quarter.
	MalformedClock { source_index: usize, raw: Option<String> },
	/// No usable quarter; the quarter of the preceding row was assumed.
	MissingQuarter { source_index: usize, assumed: u8 },
	/// No earlier play carried a possession value, so expected points went to neither team.
	UnresolvedPossession { source_index: usize },
}

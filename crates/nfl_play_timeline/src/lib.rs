pub mod anomaly;
pub mod colors;
pub mod error;
pub mod lead;
pub mod pipeline;
pub mod possession;
pub mod projection;
pub mod schema;
pub mod source;
pub mod summary;
pub mod timeline;

pub use anomaly::RowAnomaly;
pub use colors::{MatchupPalette, TeamColors};
pub use error::{GameClockError, GameReferenceError, SourceError, TimelineError};
pub use lead::{classify, ColorAssignment, FinalScore, LeadClassification, NetPoint};
pub use pipeline::{build_timeline, Timeline, TimelinePoint};
pub use possession::{resolve_possession, valid_possession};
pub use projection::project;
pub use schema::{GameReference, Matchup, PlayRecord, ProjectedPlay, Quarter, ResolvedPlay, Side, TeamCode, TimedPlay};
pub use source::{CsvGameSource, GameInfo, GameSource};
pub use summary::{summarize_quarters, QuarterSummary};
pub use timeline::TimelineBuilder;

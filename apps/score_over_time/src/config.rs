use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false", global = true)]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG", global = true)]
	pub rust_log: Option<String>,

	/// Directory holding the nflverse CSV exports
	#[arg(long, env = "NFLVERSE_DATA_DIR", default_value = "data", global = true)]
	pub data_dir: PathBuf,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
	/// Build the actual and expected score timeline of one game
	Timeline {
		/// Game reference, e.g. 2023_01_DET_KC
		game_id: String,

		/// Write the timeline here instead of stdout
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,

		#[arg(long, value_enum, default_value_t = Format::Json)]
		format: Format,

		/// Log a per-quarter summary of the timeline
		#[arg(long)]
		debug: bool,
	},

	/// Print the play-by-play listing of one game
	Plays { game_id: String },

	/// List a team's games in a season
	Games { season: u16, team: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
	#[default]
	Json,
	Csv,
}

impl Config {
	pub const fn debug_requested(&self) -> bool {
		matches!(self.command, Command::Timeline { debug: true, .. })
	}

	/// `--debug` overrides whatever `RUST_LOG` asks for.
	pub fn log_filter(&self) -> Option<&str> {
		if self.debug_requested() {
			Some("debug")
		} else {
			self.rust_log.as_deref()
		}
	}
}

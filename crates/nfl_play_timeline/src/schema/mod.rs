pub mod game_clock;
pub mod game_reference;
pub mod play_record;
pub mod teams;

pub use game_clock::*;
pub use game_reference::*;
pub use play_record::*;
pub use teams::*;

// Service exports
pub mod portraits;
pub mod roster;

pub use portraits::PortraitResolver;
pub use roster::{RosterError, load_roster, parse_roster_csv, parse_roster_json, check_ids};

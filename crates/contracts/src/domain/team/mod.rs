pub mod aggregate;
pub mod lookup;

pub use aggregate::{decode_teams, group_by_league, RawTeamRow, TeamRecord, TeamsByLeague};
pub use lookup::{find_team, find_team_with_strategy, MatchStrategy};

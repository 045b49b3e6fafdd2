//! Subcommands of the `noughts` binary

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod play;
pub mod stats;
pub mod suggest;

/// Parse a player flag value (`x` or `o`, case-insensitive).
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    Player::parse(value).map_err(|err| anyhow!("Invalid value for {flag}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--player").unwrap(), Player::X);
        assert_eq!(parse_player_token(" o ", "--player").unwrap(), Player::O);

        let err = parse_player_token("z", "--player").unwrap_err();
        assert!(err.to_string().contains("--player"));
        assert!(parse_player_token("computer", "--player").is_err());
    }
}

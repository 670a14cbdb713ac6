use std::fmt;
use std::str::FromStr;

/// Riot ID sous la forme `nom#tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('#');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(game_name), Some(tag_line), None) => Ok(RiotId {
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            }),
            _ => Err(format!("Riot ID invalide: {}", s)),
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound,
    Transient,
}

//! Shared types for battle protocol messages

use crate::ParseError;

/// Normalize a display name to a lookup id: lowercase ASCII alphanumerics only.
/// "Necrozma-Dusk-Mane" -> "necrozmaduskmane", "Life Orb" -> "lifeorb"
pub fn to_id(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Player in a battle (p1, p2, p3, p4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
    P3,
    P4,
}

impl Player {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            "p3" => Some(Player::P3),
            "p4" => Some(Player::P4),
            _ => None,
        }
    }

    /// Parse the seat prefix of "p1a: Name", "p2: Name" or "p1: Player"
    pub fn from_prefix(s: &str) -> Option<Self> {
        Self::parse(s.get(..2)?)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
            Player::P3 => "p3",
            Player::P4 => "p4",
        }
    }

    /// The opposing seat in a two-sided battle
    pub fn foe(&self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
            Player::P3 => Player::P4,
            Player::P4 => Player::P3,
        }
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// Player who owns this pokemon
    pub player: Player,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl Pokemon {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let player = Player::from_prefix(pos_part)?;
        let position = pos_part.chars().nth(2);

        Some(Pokemon {
            player,
            position,
            name: name.to_string(),
        })
    }

    /// Whether the identifier names an active slot ("p1a:") rather than a bench member ("p1:")
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}

/// Pokemon details string (species, level, gender, shiny)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny" or "Arceus-*"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let mut parts = s.split(", ");

        if let Some(species) = parts.next() {
            details.species = species.to_string();
        }

        for part in parts {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if part == "M" {
                details.gender = Some('M');
            } else if part == "F" {
                details.gender = Some('F');
            } else if part == "shiny" {
                details.shiny = true;
            }
        }

        details
    }

    /// Species lookup id ("Gyarados-Mega" -> "gyaradosmega")
    pub fn species_id(&self) -> String {
        to_id(&self.species)
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpStatus {
    /// Current HP (as raw value or percentage depending on context)
    pub current: u32,
    /// Max HP (None when only a percentage is shown)
    pub max: Option<u32>,
    /// Status condition (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let hp_part = parts.next()?;
        let status = parts.next().map(|s| s.to_string());

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                status,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                status,
            })
        }
    }
}

/// Game type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    Singles,
    Doubles,
    Triples,
    Multi,
    FreeForAll,
}

impl GameType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "singles" => Some(GameType::Singles),
            "doubles" => Some(GameType::Doubles),
            "triples" => Some(GameType::Triples),
            "multi" => Some(GameType::Multi),
            "freeforall" => Some(GameType::FreeForAll),
            _ => None,
        }
    }
}

/// Stat abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Every boostable stat, in protocol order
    pub const ALL: [Stat; 7] = [
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
        Stat::Accuracy,
        Stat::Evasion,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// Side of the field (for side conditions), e.g. "p1: Alice"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub player: Player,
    pub raw: String,
}

impl Side {
    pub fn parse(s: &str) -> Option<Self> {
        Some(Side {
            player: Player::from_prefix(s)?,
            raw: s.to_string(),
        })
    }
}

/// Positional fields of a tokenized line. Index 1 holds the keyword and
/// arguments start at 2. Optional fields read as empty or `None` when the line
/// is short; required ones fail with [`ParseError::MissingField`].
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a, 'b>(pub &'b [&'a str]);

impl<'a, 'b> Fields<'a, 'b> {
    fn required<T>(
        &self,
        index: usize,
        what: &str,
        parse: impl FnOnce(&'a str) -> Option<T>,
    ) -> anyhow::Result<T> {
        self.0
            .get(index)
            .copied()
            .and_then(parse)
            .ok_or_else(|| ParseError::MissingField(what.to_string()).into())
    }

    pub fn text(&self, index: usize) -> &'a str {
        self.0.get(index).copied().unwrap_or("")
    }

    pub fn string(&self, index: usize) -> String {
        self.text(index).to_string()
    }

    pub fn maybe_string(&self, index: usize) -> Option<String> {
        self.0.get(index).map(|s| s.to_string())
    }

    /// Everything from `index` on
    pub fn rest(&self, index: usize) -> &'b [&'a str] {
        self.0.get(index..).unwrap_or_default()
    }

    /// Whether a bare flag such as `[eat]` or `[upkeep]` is present
    pub fn has_flag(&self, flag: &str) -> bool {
        self.0.contains(&flag)
    }

    pub fn player(&self, index: usize) -> anyhow::Result<Player> {
        self.required(index, "player", Player::parse)
    }

    pub fn pokemon(&self, index: usize) -> anyhow::Result<Pokemon> {
        self.required(index, "pokemon", Pokemon::parse)
    }

    pub fn maybe_pokemon(&self, index: usize) -> Option<Pokemon> {
        self.0.get(index).and_then(|s| Pokemon::parse(s))
    }

    pub fn side(&self, index: usize) -> anyhow::Result<Side> {
        self.required(index, "side", Side::parse)
    }

    pub fn stat(&self, index: usize) -> anyhow::Result<Stat> {
        self.required(index, "stat", Stat::parse)
    }

    pub fn number<T: std::str::FromStr>(&self, index: usize, what: &str) -> anyhow::Result<T> {
        self.required(index, what, |s| s.trim().parse().ok())
    }

    pub fn details(&self, index: usize) -> PokemonDetails {
        PokemonDetails::parse(self.text(index))
    }

    pub fn hp_status(&self, index: usize) -> Option<HpStatus> {
        HpStatus::parse(self.text(index))
    }

    /// A comma separated stat list ("atk, spa"); missing means empty
    pub fn stats(&self, index: usize) -> Vec<Stat> {
        self.text(index)
            .split(',')
            .filter_map(|s| Stat::parse(s.trim()))
            .collect()
    }
}

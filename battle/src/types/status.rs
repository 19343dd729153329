//! Status conditions (volatile and non-volatile)

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
    Fainted,
}

impl Status {
    /// Parse from protocol string ("brn", "frz", "par", "psn", "tox", "slp", "fnt")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            "fnt" => Some(Status::Fainted),
            _ => None,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::BadPoison => "tox",
            Status::Sleep => "slp",
            Status::Fainted => "fnt",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_protocol())
    }
}

/// Volatile effects (cleared on switching). The perish counter is tracked as
/// three separate stages because the protocol starts each one independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Volatile {
    Confusion,
    Curse,
    Embargo,
    Encore,
    HealBlock,
    Foresight,
    MiracleEye,
    Attract,
    LeechSeed,
    Nightmare,
    Perish3,
    Perish2,
    Perish1,
    Taunt,
    Telekinesis,
    Torment,
    AquaRing,
    Ingrain,
    MagnetRise,
    PowerTrick,
    FocusEnergy,
    Substitute,
}

impl Volatile {
    /// Parse from a protocol effect ("move: Leech Seed", "confusion", "perish3")
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);

        match scout_protocol::to_id(clean).as_str() {
            "confusion" => Some(Volatile::Confusion),
            "curse" => Some(Volatile::Curse),
            "embargo" => Some(Volatile::Embargo),
            "encore" => Some(Volatile::Encore),
            "healblock" => Some(Volatile::HealBlock),
            "foresight" => Some(Volatile::Foresight),
            "miracleeye" => Some(Volatile::MiracleEye),
            "attract" => Some(Volatile::Attract),
            "leechseed" => Some(Volatile::LeechSeed),
            "nightmare" => Some(Volatile::Nightmare),
            "perish3" => Some(Volatile::Perish3),
            "perish2" => Some(Volatile::Perish2),
            "perish1" => Some(Volatile::Perish1),
            "taunt" => Some(Volatile::Taunt),
            "telekinesis" => Some(Volatile::Telekinesis),
            "torment" => Some(Volatile::Torment),
            "aquaring" => Some(Volatile::AquaRing),
            "ingrain" => Some(Volatile::Ingrain),
            "magnetrise" => Some(Volatile::MagnetRise),
            "powertrick" => Some(Volatile::PowerTrick),
            "focusenergy" => Some(Volatile::FocusEnergy),
            "substitute" => Some(Volatile::Substitute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("fnt"), Some(Status::Fainted));
        assert_eq!(Status::from_protocol("invalid"), None);
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["brn", "frz", "par", "psn", "tox", "slp", "fnt"] {
            assert_eq!(Status::from_protocol(s).unwrap().to_protocol(), s);
        }
    }

    #[test]
    fn test_volatile_from_protocol() {
        assert_eq!(
            Volatile::from_protocol("move: Leech Seed"),
            Some(Volatile::LeechSeed)
        );
        assert_eq!(
            Volatile::from_protocol("confusion"),
            Some(Volatile::Confusion)
        );
        assert_eq!(Volatile::from_protocol("perish2"), Some(Volatile::Perish2));
        assert_eq!(
            Volatile::from_protocol("Substitute"),
            Some(Volatile::Substitute)
        );
    }

    #[test]
    fn test_volatile_unknown() {
        assert_eq!(Volatile::from_protocol("ability: Flash Fire"), None);
        assert_eq!(Volatile::from_protocol("typechange"), None);
    }
}

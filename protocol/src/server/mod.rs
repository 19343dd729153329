mod battle;
mod battle_init;
mod battle_major;
mod battle_minor;
mod battle_progress;
mod request;
mod tokenizer;

pub use battle::{GameType, HpStatus, Player, Pokemon, PokemonDetails, Side, Stat, to_id};
pub use request::{
    ActivePokemon, BattleRequest, MoveSlot, PokemonStats, SideInfo, SidePokemon,
};
pub use tokenizer::{Attributes, RawEvent, tokenize};

use anyhow::Result;

/// Every battle message the tracker understands. Anything else is `Raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    // === Battle initialization ===
    Player {
        player: Player,
        username: String,
    },
    TeamSize {
        player: Player,
        size: usize,
    },
    GameType(GameType),
    Gen(u8),
    Tier(String),
    TeamPreview(Option<u8>),
    BattleStart,

    // === Battle progress ===
    /// None for an empty `|request|` line
    Request(Option<Box<BattleRequest>>),
    Turn(u32),
    Upkeep,
    Win(String),
    Tie,

    // === Major actions ===
    Move {
        pokemon: Pokemon,
        move_name: String,
        target: Option<Pokemon>,
    },
    Switch {
        pokemon: Pokemon,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    Drag {
        pokemon: Pokemon,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    DetailsChange {
        pokemon: Pokemon,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    FormeChange {
        pokemon: Pokemon,
        species: String,
        hp_status: Option<HpStatus>,
    },
    Replace {
        pokemon: Pokemon,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    Cant {
        pokemon: Pokemon,
        reason: String,
        move_name: Option<String>,
    },
    Faint(Pokemon),

    // === Minor actions ===
    Fail {
        pokemon: Pokemon,
        action: Option<String>,
    },
    Miss {
        source: Pokemon,
        target: Option<Pokemon>,
    },
    Damage {
        pokemon: Pokemon,
        hp_status: Option<HpStatus>,
    },
    Heal {
        pokemon: Pokemon,
        hp_status: Option<HpStatus>,
    },
    SetHp {
        pokemon: Pokemon,
        hp_status: Option<HpStatus>,
    },
    Status {
        pokemon: Pokemon,
        status: String,
    },
    CureStatus {
        pokemon: Pokemon,
        status: String,
    },
    CureTeam(Pokemon),
    Boost {
        pokemon: Pokemon,
        stat: Stat,
        amount: i8,
    },
    Unboost {
        pokemon: Pokemon,
        stat: Stat,
        amount: i8,
    },
    SetBoost {
        pokemon: Pokemon,
        stat: Stat,
        amount: i8,
    },
    /// Empty `stats` means every stat
    SwapBoost {
        source: Pokemon,
        target: Option<Pokemon>,
        stats: Vec<Stat>,
    },
    /// `source` receives the boosts of `target`. Empty `stats` means every stat
    CopyBoost {
        source: Pokemon,
        target: Option<Pokemon>,
        stats: Vec<Stat>,
    },
    InvertBoost(Pokemon),
    ClearBoost(Pokemon),
    ClearAllBoost,
    ClearPositiveBoost {
        target: Pokemon,
        source: Option<Pokemon>,
        effect: Option<String>,
    },
    ClearNegativeBoost(Pokemon),
    Weather {
        weather: String,
        upkeep: bool,
    },
    FieldStart(String),
    FieldEnd(String),
    SideStart {
        side: Side,
        condition: String,
    },
    SideEnd {
        side: Side,
        condition: String,
    },
    VolatileStart {
        pokemon: Pokemon,
        effect: String,
        detail: Option<String>,
    },
    VolatileEnd {
        pokemon: Pokemon,
        effect: String,
    },
    Crit(Pokemon),
    SuperEffective(Pokemon),
    Resisted(Pokemon),
    Immune(Pokemon),
    Item {
        pokemon: Pokemon,
        item: String,
    },
    EndItem {
        pokemon: Pokemon,
        item: String,
        eat: bool,
    },
    Ability {
        pokemon: Pokemon,
        ability: String,
    },
    EndAbility {
        pokemon: Pokemon,
        ability: Option<String>,
    },
    Transform {
        pokemon: Pokemon,
        target: Option<Pokemon>,
    },
    Mega {
        pokemon: Pokemon,
        species: String,
        megastone: String,
    },
    ZPower(Pokemon),
    Activate {
        pokemon: Option<Pokemon>,
        effect: String,
        args: Vec<String>,
    },

    Raw(String),
}

impl ServerMessage {
    /// Classify a tokenized line. Unknown keywords become `Raw`; a known
    /// keyword with missing or garbled required fields is an error.
    pub fn parse(event: &RawEvent<'_>) -> Result<Self> {
        let parts = event.parts.as_slice();

        match event.keyword() {
            "player" => battle_init::parse_player(parts),
            "teamsize" => battle_init::parse_teamsize(parts),
            "gametype" => battle_init::parse_gametype(parts),
            "gen" => battle_init::parse_gen(parts),
            "tier" => battle_init::parse_tier(parts),
            "teampreview" => battle_init::parse_teampreview(parts),
            "start" => battle_init::parse_start(parts),

            "request" => battle_progress::parse_request(parts),
            "turn" => battle_progress::parse_turn(parts),
            "upkeep" => battle_progress::parse_upkeep(parts),
            "win" => battle_progress::parse_win(parts),
            "tie" => battle_progress::parse_tie(parts),

            "move" => battle_major::parse_move(parts),
            "switch" => battle_major::parse_switch(parts),
            "drag" => battle_major::parse_drag(parts),
            "detailschange" => battle_major::parse_detailschange(parts),
            "-formechange" => battle_major::parse_formechange(parts),
            "replace" => battle_major::parse_replace(parts),
            "cant" => battle_major::parse_cant(parts),
            "faint" => battle_major::parse_faint(parts),

            "-fail" => battle_minor::parse_fail(parts),
            "-miss" => battle_minor::parse_miss(parts),
            "-damage" => battle_minor::parse_damage(parts),
            "-heal" => battle_minor::parse_heal(parts),
            "-sethp" => battle_minor::parse_sethp(parts),
            "-status" => battle_minor::parse_status(parts),
            "-curestatus" => battle_minor::parse_curestatus(parts),
            "-cureteam" => battle_minor::parse_cureteam(parts),
            "-boost" => battle_minor::parse_boost(parts),
            "-unboost" => battle_minor::parse_unboost(parts),
            "-setboost" => battle_minor::parse_setboost(parts),
            "-swapboost" => battle_minor::parse_swapboost(parts),
            "-copyboost" => battle_minor::parse_copyboost(parts),
            "-invertboost" => battle_minor::parse_invertboost(parts),
            "-clearboost" => battle_minor::parse_clearboost(parts),
            "-clearallboost" => battle_minor::parse_clearallboost(parts),
            "-clearpositiveboost" => battle_minor::parse_clearpositiveboost(parts),
            "-clearnegativeboost" => battle_minor::parse_clearnegativeboost(parts),
            "-weather" => battle_minor::parse_weather(parts),
            "-fieldstart" => battle_minor::parse_fieldstart(parts),
            "-fieldend" => battle_minor::parse_fieldend(parts),
            "-sidestart" => battle_minor::parse_sidestart(parts),
            "-sideend" => battle_minor::parse_sideend(parts),
            "-start" => battle_minor::parse_start(parts),
            "-end" => battle_minor::parse_end(parts),
            "-crit" => battle_minor::parse_crit(parts),
            "-supereffective" => battle_minor::parse_supereffective(parts),
            "-resisted" => battle_minor::parse_resisted(parts),
            "-immune" => battle_minor::parse_immune(parts),
            "-item" => battle_minor::parse_item(parts),
            "-enditem" => battle_minor::parse_enditem(parts),
            "-ability" => battle_minor::parse_ability(parts),
            "-endability" => battle_minor::parse_endability(parts),
            "-transform" => battle_minor::parse_transform(parts),
            "-mega" => battle_minor::parse_mega(parts),
            "-zpower" => battle_minor::parse_zpower(parts),
            "-activate" => battle_minor::parse_activate(parts),

            _ => Ok(ServerMessage::Raw(event.line.to_string())),
        }
    }
}

/// A classified line together with the attribute tags it carried
#[derive(Debug, Clone, PartialEq)]
pub struct BattleEvent {
    pub message: ServerMessage,
    pub attributes: Attributes,
}

impl BattleEvent {
    pub fn new(message: ServerMessage) -> Self {
        Self {
            message,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(message: ServerMessage, attributes: Attributes) -> Self {
        Self {
            message,
            attributes,
        }
    }
}

/// Parse a single protocol line. Ok(None) for empty lines and lines that are
/// not protocol messages (first field not empty).
pub fn parse_battle_event(line: &str) -> Result<Option<BattleEvent>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(event) = tokenize(line) else {
        return Ok(None);
    };

    let message = ServerMessage::parse(&event)?;
    Ok(Some(BattleEvent {
        message,
        attributes: event.attributes,
    }))
}

/// Parse a single line from the server into a ServerMessage, dropping attributes
pub fn parse_server_message(line: &str) -> Result<ServerMessage> {
    Ok(match parse_battle_event(line)? {
        Some(event) => event.message,
        None => ServerMessage::Raw(line.to_string()),
    })
}

//! What the tracker infers about the opponent over a few turns

mod common;

use common::{active_moves, feed, member, request_line, tracker};
use scout_battle::{
    Observed, RequestState, SideCondition, Stat, Status, TrackedBattle, Volatile,
    query::available_choices,
};
use serde_json::json;

/// Alice (p1) leads Mew with Snorlax in the back. Bob (p2) brings two.
fn start(opponent_lead: &str) -> TrackedBattle {
    let mut battle = tracker("Alice");
    let request = request_line(
        "p1",
        "Alice",
        vec![
            member("p1: Mew", "Mew", &["psychic", "skillswap"], "synchronize", true),
            member("p1: Lax", "Snorlax, F", &["tackle", "bulkup"], "thickfat", false),
        ],
        json!({"active": active_moves(&[("Psychic", "psychic", 16), ("Skill Swap", "skillswap", 16)])}),
    );
    feed(
        &mut battle,
        &format!(
            "|player|p1|Alice|1\n|player|p2|Bob|2\n|teamsize|p1|2\n|teamsize|p2|2\n|gametype|singles\n|gen|7\n{request}\n|start\n|switch|p1a: Mew|Mew|341/341\n|switch|{opponent_lead}|100/100\n|turn|1"
        ),
    );
    battle
}

#[test]
fn test_z_move_reveals_crystal_and_base_move() {
    let mut battle = start("p2a: Owl|Decidueye, M");
    feed(
        &mut battle,
        "|
|-zpower|p2a: Owl
|move|p2a: Owl|Sinister Arrow Raid|p1a: Mew
|-damage|p1a: Mew|120/341
|move|p1a: Mew|Psychic|p2a: Owl
|-damage|p2a: Owl|40/100
|
|upkeep
|turn|2",
    );

    let owl = battle.opponent.active_pokemon().unwrap();
    assert!(owl.item.is("decidiumz"));
    assert_eq!(
        owl.moves[0].as_ref().map(|m| m.id.as_str()),
        Some("spiritshackle")
    );
    assert!(owl.moves[1..].iter().all(Option::is_none));
    assert_eq!(owl.health, 40);
    assert!(battle.opponent.z_used);
    assert!(!battle.me.z_used);

    let mew = battle.me.active_pokemon().unwrap();
    assert_eq!((mew.health, mew.max_health), (120, 341));
    assert_eq!(battle.turn, 2);
}

#[test]
fn test_eaten_berry_stays_absent() {
    let mut battle = start("p2a: Lava|Heatran, L80, M");
    feed(
        &mut battle,
        "|move|p1a: Mew|Psychic|p2a: Lava
|-damage|p2a: Lava|45/100
|-enditem|p2a: Lava|Sitrus Berry|[eat]
|-heal|p2a: Lava|70/100|[from] item: Sitrus Berry
|turn|2",
    );

    let lava = battle.opponent.active_pokemon().unwrap();
    assert_eq!(lava.item, Observed::Absent);
    assert_eq!(lava.health, 70);
}

#[test]
fn test_boosts_stay_in_range() {
    let mut battle = start("p2a: Lava|Heatran, L80, M");
    let mut log = String::new();
    for _ in 0..4 {
        log.push_str("|-boost|p2a: Lava|spa|2\n|-unboost|p1a: Mew|spd|2\n");
    }
    log.push_str("|-setboost|p2a: Lava|atk|12|[from] ability: Anger Point\n");
    log.push_str("|-unboost|p2a: Lava|spe|9\n");
    feed(&mut battle, &log);

    assert_eq!(battle.opponent.boosts.get(Stat::Spa), 6);
    assert_eq!(battle.opponent.boosts.get(Stat::Atk), 6);
    assert_eq!(battle.opponent.boosts.get(Stat::Spe), -6);
    assert_eq!(battle.me.boosts.get(Stat::Spd), -6);
    for side in [&battle.me, &battle.opponent] {
        assert!(Stat::ALL.iter().all(|&stat| (-6..=6).contains(&side.boosts.get(stat))));
    }
}

#[test]
fn test_switching_keeps_what_was_revealed() {
    let mut battle = start("p2a: Lava|Heatran, L80, M");
    feed(
        &mut battle,
        "|move|p2a: Lava|Flamethrower|p1a: Mew
|-damage|p1a: Mew|200/341
|-boost|p2a: Lava|spa|1
|-start|p2a: Lava|move: Leech Seed
|-heal|p2a: Lava|90/100|[from] item: Leftovers
|-sidestart|p2: Bob|Spikes
|turn|2
|switch|p2a: Gengar|Gengar, M|100/100
|turn|3
|switch|p2a: Lava|Heatran, L80, M|90/100
|turn|4",
    );

    assert_eq!(battle.opponent.roster.len(), 2);
    assert!(battle.opponent.boosts.is_clear());
    assert!(!battle.opponent.volatiles.contains(&Volatile::LeechSeed));
    assert_eq!(battle.opponent.condition_layers(SideCondition::Spikes), 1);

    let lava = battle.opponent.active_pokemon().unwrap();
    assert_eq!(lava.species, "heatran");
    assert!(lava.item.is("leftovers"));
    assert_eq!(
        lava.moves[0].as_ref().map(|m| m.id.as_str()),
        Some("flamethrower")
    );
    assert!(battle.opponent.find_species("gengar").is_some());
}

#[test]
fn test_status_and_faint() {
    let mut battle = start("p2a: Lava|Heatran, L80, M");
    feed(
        &mut battle,
        "|-status|p2a: Lava|brn
|-damage|p2a: Lava|6/100 brn|[from] brn
|faint|p2a: Lava
|win|Alice",
    );

    let lava = battle.opponent.active_pokemon().unwrap();
    assert!(lava.is_fainted());
    assert_eq!(lava.status, Some(Status::Fainted));
    assert_eq!(battle.opponent.alive_count(), 0);
    assert!(battle.is_ended());
    assert_eq!(battle.winner.as_deref(), Some("Alice"));
}

#[test]
fn test_one_request_state_at_a_time() {
    let mut battle = start("p2a: Lava|Heatran, L80, M");
    let members = || {
        vec![
            member("p1: Mew", "Mew", &["psychic", "skillswap"], "synchronize", true),
            member("p1: Lax", "Snorlax, F", &["tackle", "bulkup"], "thickfat", false),
        ]
    };
    let flags = [
        json!({"wait": true}),
        json!({"forceSwitch": [true]}),
        json!({"teamPreview": true}),
        json!({"active": active_moves(&[("Psychic", "psychic", 16)])}),
    ];

    for extra in flags {
        feed(&mut battle, &request_line("p1", "Alice", members(), extra));
        let pending = [
            battle.awaiting_opponent(),
            battle.forced_switch_pending(),
            battle.team_preview_pending(),
        ];
        assert!(pending.iter().filter(|&&flag| flag).count() <= 1);
        assert_eq!(
            pending.iter().all(|&flag| !flag),
            battle.request_state == RequestState::Move
        );
        assert_eq!(
            available_choices(&battle).is_empty(),
            battle.request_state == RequestState::Waiting
        );
    }
}

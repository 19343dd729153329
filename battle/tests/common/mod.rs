//! Shared helpers for the integration tests
#![allow(dead_code)]

use std::sync::Arc;

use scout_battle::{Compendium, TrackedBattle};
use scout_protocol::{Player, Route, SimStreamRouter, parse_battle_event};
use serde_json::{Value, json};

/// The fixture compendium under `tests/fixtures`
pub fn dex() -> Arc<Compendium> {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
    Arc::new(Compendium::load(dir).expect("fixture compendium loads"))
}

pub fn tracker(name: &str) -> TrackedBattle {
    TrackedBattle::new(dex(), name)
}

/// Apply every protocol line of `log`, failing on lines that do not parse
pub fn feed(battle: &mut TrackedBattle, log: &str) {
    for line in log.lines().map(str::trim) {
        if let Some(event) = parse_battle_event(line).expect("line parses") {
            battle.update(&event).expect("event applies");
        }
    }
}

/// One entry of a request's `side.pokemon`
pub fn member(ident: &str, details: &str, moves: &[&str], ability: &str, active: bool) -> Value {
    json!({
        "ident": ident,
        "details": details,
        "condition": "100/100",
        "active": active,
        "stats": {"atk": 100, "def": 100, "spa": 100, "spd": 100, "spe": 100},
        "moves": moves,
        "baseAbility": ability,
        "item": "",
    })
}

/// The `active` list of a move request: (name, id, pp)
pub fn active_moves(moves: &[(&str, &str, u32)]) -> Value {
    let slots: Vec<Value> = moves
        .iter()
        .map(|(name, id, pp)| {
            json!({"move": name, "id": id, "pp": pp, "maxpp": pp, "target": "normal", "disabled": false})
        })
        .collect();
    json!([{ "moves": slots }])
}

/// A `|request|` line. `extra` holds the top-level keys besides `side`.
pub fn request_line(seat: &str, name: &str, members: Vec<Value>, extra: Value) -> String {
    let mut body = json!({
        "side": {"name": name, "id": seat, "pokemon": members},
        "rqid": 1,
    });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }
    format!("|request|{body}")
}

/// Split simulator output into the lines each seat receives
pub fn route(router: &mut SimStreamRouter, output: &str) -> (Vec<String>, Vec<String>) {
    let mut p1 = Vec::new();
    let mut p2 = Vec::new();
    for line in output.lines() {
        match router.route(line) {
            Route::Both => {
                p1.push(line.to_string());
                p2.push(line.to_string());
            }
            Route::Only(Player::P1) => p1.push(line.to_string()),
            Route::Only(Player::P2) => p2.push(line.to_string()),
            Route::Only(_) | Route::Drop => {}
        }
    }
    (p1, p2)
}

fn side_update(seat: &str, request: &str) -> String {
    format!("sideupdate\n{seat}\n{request}\n")
}

/// Simulator output of a short singles battle, one chunk per decision point.
///
/// p1 "a" brings Butterfree (U-turn) and Jirachi (Wish) and plays
/// `team 1, move 1, switch 2, switch 2`. p2 "b" brings Jirachi and
/// Butterfree and plays `team 2, switch 2, switch 2`.
pub fn switching_battle() -> Vec<String> {
    let a_butterfree = |active| member("p1: Butterfree", "Butterfree, M", &["uturn"], "compoundeyes", active);
    let a_jirachi = |active| member("p1: Jirachi", "Jirachi", &["wish"], "serenegrace", active);
    let b_butterfree = |active| member("p2: Butterfree", "Butterfree, F", &["uturn"], "compoundeyes", active);
    let b_jirachi = |active| member("p2: Jirachi", "Jirachi", &["wish"], "serenegrace", active);
    let uturn = active_moves(&[("U-turn", "uturn", 32)]);
    let wish = active_moves(&[("Wish", "wish", 16)]);

    let preview = format!(
        "update\n|player|p1|a|1\n|player|p2|b|2\n|teamsize|p1|2\n|teamsize|p2|2\n|gametype|singles\n|gen|7\n|tier|[Gen 7] Ubers\n|poke|p1|Butterfree, M|\n|poke|p1|Jirachi|\n|poke|p2|Jirachi|\n|poke|p2|Butterfree, F|\n|teampreview\n{}{}",
        side_update(
            "p1",
            &request_line("p1", "a", vec![a_butterfree(false), a_jirachi(false)], json!({"teamPreview": true})),
        ),
        side_update(
            "p2",
            &request_line("p2", "b", vec![b_jirachi(false), b_butterfree(false)], json!({"teamPreview": true})),
        ),
    );

    let leads = format!(
        "{}{}update\n|\n|start\n|split|p1\n|switch|p1a: Butterfree|Butterfree, M|263/263\n|switch|p1a: Butterfree|Butterfree, M|100/100\n|split|p2\n|switch|p2a: Butterfree|Butterfree, F|263/263\n|switch|p2a: Butterfree|Butterfree, F|100/100\n|turn|1\n",
        side_update(
            "p1",
            &request_line("p1", "a", vec![a_butterfree(true), a_jirachi(false)], json!({"active": uturn})),
        ),
        side_update(
            "p2",
            &request_line("p2", "b", vec![b_butterfree(true), b_jirachi(false)], json!({"active": uturn})),
        ),
    );

    let turn_one = format!(
        "update\n|\n|split|p2\n|switch|p2a: Jirachi|Jirachi|341/341\n|switch|p2a: Jirachi|Jirachi|100/100\n|move|p1a: Butterfree|U-turn|p2a: Jirachi\n|-resisted|p2a: Jirachi\n|split|p2\n|-damage|p2a: Jirachi|325/341\n|-damage|p2a: Jirachi|95/100\n{}{}",
        side_update(
            "p1",
            &request_line("p1", "a", vec![a_butterfree(true), a_jirachi(false)], json!({"forceSwitch": [true]})),
        ),
        side_update(
            "p2",
            &request_line("p2", "b", vec![b_jirachi(true), b_butterfree(false)], json!({"wait": true})),
        ),
    );

    let forced = format!(
        "{}{}update\n|split|p1\n|switch|p1a: Jirachi|Jirachi|341/341\n|switch|p1a: Jirachi|Jirachi|100/100\n|\n|upkeep\n|turn|2\n",
        side_update(
            "p1",
            &request_line("p1", "a", vec![a_jirachi(true), a_butterfree(false)], json!({"active": wish})),
        ),
        side_update(
            "p2",
            &request_line("p2", "b", vec![b_jirachi(true), b_butterfree(false)], json!({"active": wish})),
        ),
    );

    let turn_two = format!(
        "{}{}update\n|\n|split|p1\n|switch|p1a: Butterfree|Butterfree, M|263/263\n|switch|p1a: Butterfree|Butterfree, M|100/100\n|split|p2\n|switch|p2a: Butterfree|Butterfree, F|263/263\n|switch|p2a: Butterfree|Butterfree, F|100/100\n|\n|upkeep\n|turn|3\n",
        side_update(
            "p1",
            &request_line("p1", "a", vec![a_butterfree(true), a_jirachi(false)], json!({"active": uturn})),
        ),
        side_update(
            "p2",
            &request_line("p2", "b", vec![b_butterfree(true), b_jirachi(false)], json!({"active": uturn})),
        ),
    );

    vec![preview, leads, turn_one, forced, turn_two]
}

//! Routing for a local simulator's multiplexed output stream
//!
//! A locally run simulator writes every seat's view to one stream. Public
//! lines go to both seats. `sideupdate` is followed by a seat line and one
//! private line for that seat. A legacy `|split` block is followed by
//! spectator, p1, p2 and omniscient copies of the same line. A `|split|pN`
//! block is followed by a secret line for pN and a public line for everyone
//! else. `end` marks the end of the battle.

use crate::server::Player;

/// Where a line of simulator output should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Deliver to both seats
    Both,
    /// Deliver to one seat only
    Only(Player),
    /// Framing or a copy nobody needs
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Both,
    SideUpdate,
    SideUpdateFor(Player),
    SplitSpectator,
    SplitP1,
    SplitP2,
    SplitOmniscient,
    SplitSecret(Player),
    SplitPublic(Player),
}

#[derive(Debug, Clone, Default)]
pub struct SimStreamRouter {
    mode: Mode,
    ended: bool,
}

impl SimStreamRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an `end` line has been seen
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Start a new battle on the same stream
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Classify one output line and advance the framing state
    pub fn route(&mut self, line: &str) -> Route {
        let line = line.trim();

        match self.mode {
            Mode::Both => match line {
                "end" => {
                    self.ended = true;
                    Route::Drop
                }
                "update" | "" => Route::Drop,
                "sideupdate" => {
                    self.mode = Mode::SideUpdate;
                    Route::Drop
                }
                "|split" => {
                    self.mode = Mode::SplitSpectator;
                    Route::Drop
                }
                _ => match line.strip_prefix("|split|").and_then(Player::parse) {
                    Some(player) => {
                        self.mode = Mode::SplitSecret(player);
                        Route::Drop
                    }
                    None => Route::Both,
                },
            },
            Mode::SideUpdate => {
                self.mode = match Player::parse(line) {
                    Some(player) => Mode::SideUpdateFor(player),
                    None => Mode::Both,
                };
                Route::Drop
            }
            Mode::SideUpdateFor(player) => {
                self.mode = Mode::Both;
                Route::Only(player)
            }
            Mode::SplitSpectator => {
                self.mode = Mode::SplitP1;
                Route::Drop
            }
            Mode::SplitP1 => {
                self.mode = Mode::SplitP2;
                Route::Only(Player::P1)
            }
            Mode::SplitP2 => {
                self.mode = Mode::SplitOmniscient;
                Route::Only(Player::P2)
            }
            Mode::SplitOmniscient => {
                self.mode = Mode::Both;
                Route::Drop
            }
            Mode::SplitSecret(player) => {
                self.mode = Mode::SplitPublic(player);
                Route::Only(player)
            }
            Mode::SplitPublic(player) => {
                self.mode = Mode::Both;
                Route::Only(player.foe())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_all(router: &mut SimStreamRouter, lines: &[&str]) -> Vec<Route> {
        lines.iter().map(|l| router.route(l)).collect()
    }

    #[test]
    fn test_public_lines_go_to_both() {
        let mut router = SimStreamRouter::new();
        let routes = route_all(&mut router, &["update", "|turn|1", "|-weather|none"]);
        assert_eq!(routes, vec![Route::Drop, Route::Both, Route::Both]);
    }

    #[test]
    fn test_sideupdate() {
        let mut router = SimStreamRouter::new();
        let routes = route_all(
            &mut router,
            &["sideupdate", "p2", "|request|{}", "|turn|2"],
        );
        assert_eq!(
            routes,
            vec![
                Route::Drop,
                Route::Drop,
                Route::Only(Player::P2),
                Route::Both
            ]
        );
    }

    #[test]
    fn test_legacy_split() {
        let mut router = SimStreamRouter::new();
        let routes = route_all(
            &mut router,
            &[
                "|split",
                "|-damage|p2a: Mew|50/100",
                "|-damage|p2a: Mew|50/100",
                "|-damage|p2a: Mew|150/300",
                "|-damage|p2a: Mew|150/300",
                "|upkeep",
            ],
        );
        assert_eq!(
            routes,
            vec![
                Route::Drop,
                Route::Drop,
                Route::Only(Player::P1),
                Route::Only(Player::P2),
                Route::Drop,
                Route::Both
            ]
        );
    }

    #[test]
    fn test_seat_split() {
        let mut router = SimStreamRouter::new();
        let routes = route_all(
            &mut router,
            &[
                "|split|p1",
                "|-heal|p1a: Mew|300/300",
                "|-heal|p1a: Mew|100/100",
                "|upkeep",
            ],
        );
        assert_eq!(
            routes,
            vec![
                Route::Drop,
                Route::Only(Player::P1),
                Route::Only(Player::P2),
                Route::Both
            ]
        );
    }

    #[test]
    fn test_end_marks_battle_finished() {
        let mut router = SimStreamRouter::new();
        assert!(!router.is_ended());
        assert_eq!(router.route("end"), Route::Drop);
        assert!(router.is_ended());

        router.reset();
        assert!(!router.is_ended());
    }
}

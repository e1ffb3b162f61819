// Game logic
//
// - `config`: Match settings and fixed control bindings
// - `weapons`: Weapon registry and effect bodies
// - `effects`: Timed activation/expiry of weapon effects
// - `player`: Player entity and per-player effect state
// - `round`: One round of play
// - `menu`: Weapon selection before a match

pub mod config;
pub mod effects;
pub mod menu;
pub mod player;
pub mod round;
pub mod weapons;

use crate::engine::input::InputState;

use config::{Controls, MatchSettings};
use menu::WeaponSelect;
use round::Round;
use weapons::GlobalEffect;

/// What the game is currently doing
#[derive(Debug)]
pub enum Phase {
    WeaponSelect(WeaponSelect),
    Playing(Round),
}

/// Top-level game state, stepped once per frame
#[derive(Debug)]
pub struct Game {
    phase: Phase,
    settings: MatchSettings,
}

impl Game {
    pub fn new(lineup: &[Controls], settings: MatchSettings) -> Self {
        log::info!("{} players seated", lineup.len());
        Self {
            phase: Phase::WeaponSelect(WeaponSelect::new(lineup)),
            settings,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, input: &mut InputState, dt_ms: u32) {
        match &mut self.phase {
            Phase::WeaponSelect(menu) => {
                if menu.update(input) {
                    log::info!("Weapons picked, starting round");
                    let round = Round::new(menu.seats(), self.settings.clone());
                    input.reset();
                    self.phase = Phase::Playing(round);
                }
            }
            Phase::Playing(round) => {
                round.update(input, dt_ms);
                if round.is_over() {
                    match round.winner() {
                        Some(id) => log::info!("Player {} wins the round", id + 1),
                        None => log::info!("Round over, no survivors"),
                    }
                    round.finish();
                    let seats = round
                        .players()
                        .iter()
                        .map(|p| (p.controls, p.weapon))
                        .collect();
                    self.phase = Phase::WeaponSelect(WeaponSelect::with_picks(seats));
                }
            }
        }
    }

    /// Lines describing the current screen
    pub fn status_lines(&self, input: &InputState) -> Vec<String> {
        match &self.phase {
            Phase::WeaponSelect(menu) => menu.lines(input),
            Phase::Playing(round) => {
                let mut lines: Vec<String> = round
                    .players()
                    .iter()
                    .map(|p| {
                        format!(
                            "P{} {} {} charges{}",
                            p.id + 1,
                            if p.alive { "in" } else { "out" },
                            p.effects.charges(p.weapon),
                            if p.effects.is_active(p.weapon) {
                                " (active)"
                            } else {
                                ""
                            }
                        )
                    })
                    .collect();

                let flags = round.flags();
                let active: Vec<String> = GlobalEffect::ALL
                    .iter()
                    .filter(|&&effect| flags.is_active(effect))
                    .map(|effect| format!("{:?}", effect).to_lowercase())
                    .collect();
                if !active.is_empty() {
                    lines.push(format!("active: {}", active.join(", ")));
                }
                lines
            }
        }
    }

    /// Report a collision from the physics collaborator
    #[allow(dead_code)]
    pub fn eliminate(&mut self, id: usize) -> bool {
        match &mut self.phase {
            Phase::Playing(round) => round.eliminate(id),
            Phase::WeaponSelect(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::keys;
    use crate::game::config::DEFAULT_SETTINGS;
    use crate::game::weapons::WeaponKind;

    fn start(game: &mut Game, input: &mut InputState) {
        input.set_key_down(keys::SPACE, true);
        game.update(input, 16);
    }

    #[test]
    fn test_menu_to_round() {
        let mut game = Game::new(&config::lineup(2, &[]), DEFAULT_SETTINGS);
        let mut input = InputState::new();
        assert!(matches!(game.phase, Phase::WeaponSelect(_)));

        start(&mut game, &mut input);
        assert!(matches!(game.phase, Phase::Playing(_)));
    }

    #[test]
    fn test_round_over_returns_to_menu_with_picks() {
        let mut game = Game::new(&config::lineup(2, &[]), DEFAULT_SETTINGS);
        let mut input = InputState::new();

        input.set_key_down(keys::RIGHT, true);
        game.update(&mut input, 16);
        start(&mut game, &mut input);

        assert!(game.eliminate(1));
        game.update(&mut input, 16);

        match &game.phase {
            Phase::WeaponSelect(menu) => {
                assert_eq!(menu.seats()[0].1, WeaponKind::FrostWave);
            }
            Phase::Playing(_) => panic!("round should be over"),
        }
    }

    #[test]
    fn test_status_lines() {
        let mut game = Game::new(&config::lineup(2, &[]), DEFAULT_SETTINGS);
        let mut input = InputState::new();
        assert_eq!(game.status_lines(&input).len(), 2);

        start(&mut game, &mut input);
        let lines = game.status_lines(&input);
        assert_eq!(lines[0], "P1 in 3 charges");
    }

    #[test]
    fn test_status_lines_list_global_effects() {
        let mut game = Game::new(&config::lineup(2, &[]), DEFAULT_SETTINGS);
        let mut input = InputState::new();

        input.set_key_down(keys::RIGHT, true);
        game.update(&mut input, 16);
        start(&mut game, &mut input);

        // Player one fires frost wave with the up arrow
        input.set_key_down(keys::UP, true);
        game.update(&mut input, 16);

        let lines = game.status_lines(&input);
        assert_eq!(lines[0], "P1 in 1 charges (active)");
        assert_eq!(lines.last().map(String::as_str), Some("active: freeze"));
    }

    #[test]
    fn test_eliminate_outside_round() {
        let mut game = Game::new(&config::lineup(2, &[]), DEFAULT_SETTINGS);
        assert!(!game.eliminate(0));
    }
}

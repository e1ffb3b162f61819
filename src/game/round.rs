// One round of play: players moving, firing weapons, effects ticking

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use crate::engine::input::InputState;

use super::config::{Controls, MatchSettings};
use super::effects::{EffectEngine, GlobalEffects};
use super::player::Player;
use super::weapons::WeaponKind;

/// Fraction of the smaller arena side used as the spawn circle radius
const SPAWN_RADIUS_FACTOR: f32 = 0.35;

#[derive(Debug)]
pub struct Round {
    players: Vec<Player>,
    effects: EffectEngine,
    settings: MatchSettings,
}

impl Round {
    /// Seat one player per `(controls, weapon)` pair on a circle around the
    /// arena centre, each facing inward.
    pub fn new(seats: &[(Controls, WeaponKind)], settings: MatchSettings) -> Self {
        let center = Vec2::new(settings.arena_width, settings.arena_height) / 2.0;
        let radius = settings.arena_width.min(settings.arena_height) * SPAWN_RADIUS_FACTOR;
        let count = seats.len().max(1) as f32;

        let players = seats
            .iter()
            .enumerate()
            .map(|(id, &(controls, weapon))| {
                let angle = TAU * id as f32 / count;
                let position = center + Vec2::from_angle(angle) * radius;
                Player::new(id, controls, weapon, position, angle + PI)
            })
            .collect();

        Self {
            players,
            effects: EffectEngine::new(),
            settings,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn flags(&self) -> GlobalEffects {
        self.effects.flags()
    }

    /// Run one frame.
    ///
    /// Weapon buttons are level-triggered and cleared after reading, so one
    /// press fires once. Effects tick after movement; the frame an effect
    /// is fired in counts toward its duration.
    pub fn update(&mut self, input: &mut InputState, dt_ms: u32) {
        for player in self.players.iter_mut().filter(|p| p.alive) {
            let fire = player.controls.weapon;
            if input.is_down(fire) {
                input.clear(fire);
                let weapon = player.weapon;
                self.effects.activate(player, weapon);
            }
        }

        let flags = self.effects.flags();
        for player in self.players.iter_mut().filter(|p| p.alive) {
            player.steer(input, flags, dt_ms, &self.settings);
            player.advance(dt_ms, flags, &self.settings);
        }

        self.effects.tick(&mut self.players, dt_ms);
    }

    /// Knock a player out, e.g. on a trail collision.
    ///
    /// Returns `false` if the player was protected or already out.
    pub fn eliminate(&mut self, id: usize) -> bool {
        let Some(player) = self.players.get_mut(id) else {
            return false;
        };
        if !player.alive || player.effects.is_invincible() || player.underground {
            return false;
        }
        player.alive = false;
        log::info!("Player {} is out", id + 1);
        true
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    /// A multi-player round ends when at most one player is left
    pub fn is_over(&self) -> bool {
        self.players.len() > 1 && self.alive_count() <= 1
    }

    /// Last player standing, if the round is over
    pub fn winner(&self) -> Option<usize> {
        if !self.is_over() {
            return None;
        }
        self.players.iter().find(|p| p.alive).map(|p| p.id)
    }

    /// End the round: revert running effects
    pub fn finish(&mut self) {
        self.effects.reset(&mut self.players);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::device::testing::FakeBackend;
    use crate::engine::input::{Button, Direction};
    use crate::game::config::{lineup, DEFAULT_SETTINGS};
    use crate::game::weapons::{DURATION_FROSTWAVE, INV_TIME};
    use approx::assert_relative_eq;

    fn round(weapons: &[WeaponKind]) -> Round {
        let seats: Vec<_> = lineup(weapons.len(), &[])
            .into_iter()
            .zip(weapons.iter().copied())
            .collect();
        Round::new(&seats, DEFAULT_SETTINGS)
    }

    #[test]
    fn test_spawn_positions() {
        let round = round(&[WeaponKind::Warp, WeaponKind::Warp]);
        let center = Vec2::new(400.0, 300.0);
        let a = round.players()[0].position;
        let b = round.players()[1].position;
        assert_relative_eq!((a - center).length(), (b - center).length(), epsilon = 1e-3);
        // Opposite sides of the circle
        assert_relative_eq!(((a + b) / 2.0 - center).length(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_weapon_button_fires_once_per_press() {
        let mut round = round(&[WeaponKind::LightningSpeed, WeaponKind::Ghost]);
        let mut input = InputState::new();
        let fire = round.players()[0].controls.weapon;

        input.set_key_down(fire.raw() as u16, true);
        round.update(&mut input, 16);
        assert!(round.players()[0].effects.is_active(WeaponKind::LightningSpeed));
        assert!(!input.is_down(fire));

        round.update(&mut input, 16);
        assert_eq!(round.players()[0].effects.charges(WeaponKind::LightningSpeed), 2);
    }

    #[test]
    fn test_two_players_share_global_effect() {
        let mut round = round(&[WeaponKind::Confusion, WeaponKind::Confusion]);
        let mut input = InputState::new();
        let fire0 = round.players()[0].controls.weapon;
        let fire1 = round.players()[1].controls.weapon;

        input.set_key_down(fire0.raw() as u16, true);
        round.update(&mut input, 100);
        input.set_key_down(fire1.raw() as u16, true);
        round.update(&mut input, 100);
        assert!(round.players().iter().all(|p| p.effects.is_active(WeaponKind::Confusion)));

        round.update(&mut input, 400);
        assert!(round.flags().confusion);
        round.update(&mut input, 100);
        assert!(!round.flags().confusion);
    }

    #[test]
    fn test_joystick_player_fires() {
        let mut input = InputState::new();
        input.open_joysticks(&mut FakeBackend::with_devices(2));
        let seats: Vec<_> = lineup(0, &[0, 1])
            .into_iter()
            .map(|c| (c, WeaponKind::Tron))
            .collect();
        let mut round = Round::new(&seats, DEFAULT_SETTINGS);

        input.set_joy_button_down(1, 0, true);
        round.update(&mut input, 16);

        assert!(round.flags().tron);
        assert!(round.players()[1].effects.is_active(WeaponKind::Tron));
        assert!(!round.players()[0].effects.is_active(WeaponKind::Tron));
        assert!(!input.is_down(Button::joy_button(1, 0).unwrap()));
    }

    #[test]
    fn test_joystick_steering() {
        let mut input = InputState::new();
        input.open_joysticks(&mut FakeBackend::with_devices(1));
        let seats = vec![(lineup(0, &[0])[0], WeaponKind::Warp)];
        let mut round = Round::new(&seats, DEFAULT_SETTINGS);
        let heading = round.players()[0].heading;

        input.set_joy_axis_down(0, Direction::Right, true);
        round.update(&mut input, 100);
        assert!(round.players()[0].heading != heading);
    }

    #[test]
    fn test_eliminate_respects_invincibility() {
        let mut round = round(&[WeaponKind::Warp, WeaponKind::Warp, WeaponKind::Warp]);
        let mut input = InputState::new();
        let fire = round.players()[0].controls.weapon;

        input.set_key_down(fire.raw() as u16, true);
        round.update(&mut input, 10);
        assert!(!round.eliminate(0));

        round.update(&mut input, INV_TIME);
        assert!(round.eliminate(0));
        assert!(!round.eliminate(0));
        assert_eq!(round.alive_count(), 2);
        assert!(!round.is_over());
    }

    #[test]
    fn test_winner() {
        let mut round = round(&[WeaponKind::Mole, WeaponKind::Mole]);
        assert_eq!(round.winner(), None);
        round.eliminate(1);
        assert!(round.is_over());
        assert_eq!(round.winner(), Some(0));
    }

    #[test]
    fn test_dead_players_do_not_move() {
        let mut round = round(&[WeaponKind::Mole, WeaponKind::Mole, WeaponKind::Mole]);
        round.eliminate(2);
        let before = round.players()[2].position;
        round.update(&mut InputState::new(), 100);
        assert_eq!(round.players()[2].position, before);
    }

    #[test]
    fn test_finish_clears_flags() {
        let mut round = round(&[WeaponKind::FrostWave, WeaponKind::Mole]);
        let mut input = InputState::new();
        input.set_key_down(round.players()[0].controls.weapon.raw() as u16, true);
        round.update(&mut input, 16);
        assert!(round.flags().freeze);

        assert_eq!(
            round.players()[0].effects.remaining(WeaponKind::FrostWave),
            Some(DURATION_FROSTWAVE - 16)
        );

        round.finish();
        assert!(!round.flags().freeze);
    }
}

// Timed weapon effects
//
// Each (player, weapon) pair is either inactive or running with a timer.
// Global effects are mirrored in `GlobalEffects`; the engine counts how many
// players hold each one so a flag only drops when the last instance expires.

use super::player::Player;
use super::weapons::{GlobalEffect, Scope, WeaponKind, INV_TIME};

/// Match-wide effect flags, read by movement, collision and rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalEffects {
    pub freeze: bool,
    pub confusion: bool,
    pub tron: bool,
    pub chilirun: bool,
}

impl GlobalEffects {
    pub fn is_active(&self, effect: GlobalEffect) -> bool {
        match effect {
            GlobalEffect::Freeze => self.freeze,
            GlobalEffect::Confusion => self.confusion,
            GlobalEffect::Tron => self.tron,
            GlobalEffect::ChiliRun => self.chilirun,
        }
    }

    fn set(&mut self, effect: GlobalEffect, on: bool) {
        match effect {
            GlobalEffect::Freeze => self.freeze = on,
            GlobalEffect::Confusion => self.confusion = on,
            GlobalEffect::Tron => self.tron = on,
            GlobalEffect::ChiliRun => self.chilirun = on,
        }
    }
}

/// Drives activation and expiry of weapon effects.
///
/// The sole writer of `GlobalEffects`.
#[derive(Debug, Default)]
pub struct EffectEngine {
    /// Running instances of each global effect
    holders: [u32; GlobalEffect::COUNT],
    flags: GlobalEffects,
}

impl EffectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> GlobalEffects {
        self.flags
    }

    /// Fire `kind` for `player`.
    ///
    /// Does nothing (and returns `false`) when the player is out, has no
    /// charges left, or already has the effect running and the weapon
    /// cannot be refreshed.
    pub fn activate(&mut self, player: &mut Player, kind: WeaponKind) -> bool {
        let weapon = kind.descriptor();

        if !player.alive || player.effects.charges(kind) == 0 {
            return false;
        }

        if player.effects.is_active(kind) {
            if !weapon.refreshable {
                return false;
            }
            player.effects.take_charge(kind);
            let applied = (weapon.effect)(player, true);
            player.effects.set_timer(kind, Some(applied));
            log::debug!("Player {} refreshed {}", player.id + 1, weapon.name);
            return true;
        }

        player.effects.take_charge(kind);
        let applied = (weapon.effect)(player, true);

        if weapon.risky {
            player.effects.grant_invincibility(INV_TIME);
        }

        if applied > 0 {
            player.effects.set_timer(kind, Some(applied));
            if let Scope::Global(effect) = weapon.scope {
                self.holders[effect.index()] += 1;
                self.flags.set(effect, true);
            }
        }

        log::debug!(
            "Player {} fired {} ({} ms, {} charges left)",
            player.id + 1,
            weapon.name,
            applied,
            player.effects.charges(kind)
        );
        true
    }

    /// Advance every running effect by `elapsed_ms`, reverting those that run out
    pub fn tick(&mut self, players: &mut [Player], elapsed_ms: u32) {
        for player in players.iter_mut() {
            player.effects.wear_invincibility(elapsed_ms);

            for kind in WeaponKind::ALL {
                let Some(remaining) = player.effects.remaining(kind) else {
                    continue;
                };
                if remaining > elapsed_ms {
                    player.effects.set_timer(kind, Some(remaining - elapsed_ms));
                } else {
                    self.expire(player, kind);
                }
            }
        }
    }

    fn expire(&mut self, player: &mut Player, kind: WeaponKind) {
        let weapon = kind.descriptor();
        player.effects.set_timer(kind, None);
        (weapon.effect)(player, false);

        if let Scope::Global(effect) = weapon.scope {
            let holders = &mut self.holders[effect.index()];
            *holders = holders.saturating_sub(1);
            self.flags.set(effect, *holders > 0);
        }

        log::debug!("Player {}: {} wore off", player.id + 1, weapon.name);
    }

    /// Revert everything still running and clear all flags, between rounds
    pub fn reset(&mut self, players: &mut [Player]) {
        for player in players.iter_mut() {
            for kind in WeaponKind::ALL {
                if player.effects.is_active(kind) {
                    self.expire(player, kind);
                }
            }
            player.effects.clear_invincibility();
        }
        self.holders = [0; GlobalEffect::COUNT];
        self.flags = GlobalEffects::default();
    }
}

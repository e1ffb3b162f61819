// Weapon registry
//
// Each player picks one weapon per match and fires it a limited number of
// times. The registry is a fixed table indexed by `WeaponKind`; the timed
// activate/revert bookkeeping lives in `game::effects`.

pub mod effects;

use crate::game::player::Player;

/// Number of weapon kinds
pub const N_WEAPONS: usize = 10;

/// Invincibility granted after firing a weapon that can cause a
/// self-elimination (milliseconds)
pub const INV_TIME: u32 = 250;

// Effect durations (milliseconds)
pub const DURATION_LIGHTNINGSPEED: u32 = 1300;
pub const DURATION_FROSTWAVE: u32 = 1600;
pub const DURATION_SHARPTURN: u32 = 200;
pub const DURATION_CONFUSION: u32 = 600;
pub const DURATION_MOLE: u32 = 350;
pub const DURATION_GHOSTWALK: u32 = 2100;
pub const DURATION_TRON: u32 = 3000;
pub const DURATION_CHILIRUN: u32 = 1500;

/// Weapon kinds, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    LightningSpeed = 0,
    FrostWave,
    Confusion,
    SharpTurn,
    TimeStep,
    Mole,
    Warp,
    Ghost,
    Tron,
    ChiliRun,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; N_WEAPONS] = [
        WeaponKind::LightningSpeed,
        WeaponKind::FrostWave,
        WeaponKind::Confusion,
        WeaponKind::SharpTurn,
        WeaponKind::TimeStep,
        WeaponKind::Mole,
        WeaponKind::Warp,
        WeaponKind::Ghost,
        WeaponKind::Tron,
        WeaponKind::ChiliRun,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Registry entry for this weapon
    pub fn descriptor(self) -> &'static WeaponDescriptor {
        &WEAPONS[self.index()]
    }

    /// Next weapon in menu order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % N_WEAPONS]
    }

    /// Previous weapon in menu order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + N_WEAPONS - 1) % N_WEAPONS]
    }
}

/// Match-wide effects, visible to every player while any instance runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalEffect {
    Freeze,
    Confusion,
    Tron,
    ChiliRun,
}

impl GlobalEffect {
    pub const COUNT: usize = 4;

    pub const ALL: [GlobalEffect; GlobalEffect::COUNT] = [
        GlobalEffect::Freeze,
        GlobalEffect::Confusion,
        GlobalEffect::Tron,
        GlobalEffect::ChiliRun,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Who an effect applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the player who fired it
    Player,
    /// Every player, mirrored in a shared flag
    Global(GlobalEffect),
}

/// Applies (`on = true`) or reverts (`on = false`) a weapon's effect on
/// the player who fired it. Returns the duration applied in milliseconds;
/// 0 means the effect is instant and never reverted.
pub type EffectFn = fn(&mut Player, bool) -> u32;

/// Registry entry for one weapon kind
#[derive(Debug, Clone, Copy)]
pub struct WeaponDescriptor {
    pub effect: EffectFn,
    /// Charges a player starts each round with
    pub charges: u32,
    pub name: &'static str,
    pub desc1: &'static str,
    pub desc2: &'static str,
    /// Nominal duration (milliseconds), 0 for instant weapons
    pub duration: u32,
    pub scope: Scope,
    /// Firing again while active restarts the timer instead of doing nothing
    pub refreshable: bool,
    /// Can cause a self-elimination; firing grants `INV_TIME`
    pub risky: bool,
}

/// All weapons, indexed by `WeaponKind`
pub static WEAPONS: [WeaponDescriptor; N_WEAPONS] = [
    WeaponDescriptor {
        effect: effects::lightning_speed,
        charges: 3,
        name: "lightning speed",
        desc1: "Double your speed",
        desc2: "for a short while.",
        duration: DURATION_LIGHTNINGSPEED,
        scope: Scope::Player,
        refreshable: false,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::frost_wave,
        charges: 2,
        name: "frost wave",
        desc1: "Slow down every",
        desc2: "other player.",
        duration: DURATION_FROSTWAVE,
        scope: Scope::Global(GlobalEffect::Freeze),
        refreshable: false,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::confusion,
        charges: 2,
        name: "confusion",
        desc1: "Swap left and right",
        desc2: "for every other player.",
        duration: DURATION_CONFUSION,
        scope: Scope::Global(GlobalEffect::Confusion),
        refreshable: false,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::sharp_turn,
        charges: 4,
        name: "sharp turn",
        desc1: "Your next turn is",
        desc2: "a right angle.",
        duration: DURATION_SHARPTURN,
        scope: Scope::Player,
        refreshable: true,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::time_step,
        charges: 2,
        name: "timestep",
        desc1: "Leap forward,",
        desc2: "leaving a gap.",
        duration: 0,
        scope: Scope::Player,
        refreshable: false,
        risky: true,
    },
    WeaponDescriptor {
        effect: effects::mole,
        charges: 2,
        name: "mole",
        desc1: "Dig under the arena",
        desc2: "and resurface.",
        duration: DURATION_MOLE,
        scope: Scope::Player,
        refreshable: false,
        risky: true,
    },
    WeaponDescriptor {
        effect: effects::warp,
        charges: 2,
        name: "warp",
        desc1: "Jump to the opposite",
        desc2: "side of the arena.",
        duration: 0,
        scope: Scope::Player,
        refreshable: false,
        risky: true,
    },
    WeaponDescriptor {
        effect: effects::ghost,
        charges: 1,
        name: "ghost walk",
        desc1: "Pass through trails",
        desc2: "without leaving one.",
        duration: DURATION_GHOSTWALK,
        scope: Scope::Player,
        refreshable: false,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::tron,
        charges: 1,
        name: "tron",
        desc1: "Everyone may only",
        desc2: "make right-angle turns.",
        duration: DURATION_TRON,
        scope: Scope::Global(GlobalEffect::Tron),
        refreshable: false,
        risky: false,
    },
    WeaponDescriptor {
        effect: effects::chili_run,
        charges: 2,
        name: "chili run",
        desc1: "Every other player",
        desc2: "is forced to sprint.",
        duration: DURATION_CHILIRUN,
        scope: Scope::Global(GlobalEffect::ChiliRun),
        refreshable: false,
        risky: false,
    },
];

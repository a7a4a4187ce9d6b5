use super::Fighter;
use crate::animation::ActionKind;
use crate::archetype::Archetype;
use crate::arena::Arena;
use crate::combat::AttackKind;
use crate::geometry::{Facing, Rect};
use crate::ordnance::{ProjectileView, TrapView};
use crate::slot::Slot;
use crate::status::{DamageOverTime, StatusKind};

/// Everything a renderer or HUD needs from one fighter for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterView {
    pub slot: Slot,
    pub archetype: Archetype,
    pub action: ActionKind,
    /// Render id of `action`, 0-7.
    pub action_id: u8,
    pub frame: u16,
    pub facing: Facing,
    /// Sprite flip flag, already corrected for left-facing art.
    pub flipped: bool,
    pub body: Rect,
    pub attack_area: Option<Rect>,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    pub death_done: bool,
    pub hit: bool,
    pub attack: Option<AttackKind>,
    pub cooldown: u32,
    pub burn: Option<DamageOverTime>,
    pub bleed: Option<DamageOverTime>,
    pub projectiles: Vec<ProjectileView>,
    pub traps: Vec<TrapView>,
}

impl Fighter {
    pub fn view(&self, arena: &Arena) -> FighterView {
        FighterView {
            slot: self.slot,
            archetype: self.archetype,
            action: self.action,
            action_id: self.action.id(),
            frame: self.frame,
            facing: self.facing,
            flipped: self.facing.is_flipped() != self.profile.mirrored_art,
            body: self.body,
            attack_area: self.attack_area(arena),
            health: self.health.current(),
            max_health: self.health.max(),
            alive: self.is_alive(),
            death_done: self.death_done,
            hit: self.is_hit,
            attack: self.attack.kind,
            cooldown: self.attack.cooldown,
            burn: self.status.get(StatusKind::Burn).copied(),
            bleed: self.status.get(StatusKind::Bleed).copied(),
            projectiles: self.ordnance.projectile_views(),
            traps: self.ordnance.trap_views(),
        }
    }
}

impl FighterView {
    /// Health as a fraction of the maximum, for health bars.
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::execute_attack;
    use crate::cue::Muted;

    #[test]
    fn mirrored_art_inverts_the_flip_flag() {
        let arena = Arena::default();
        let slime = Fighter::new(Slot::Two, Archetype::SlimeDemon, 900, &arena).expect("p2");
        let tank = Fighter::new(Slot::Two, Archetype::Tank, 900, &arena).expect("p2");
        assert_eq!(slime.view(&arena).facing, Facing::Left);
        assert!(!slime.view(&arena).flipped);
        assert!(tank.view(&arena).flipped);
    }

    #[test]
    fn attack_area_shows_only_while_attacking() {
        let arena = Arena::default();
        let mut warrior = Fighter::new(Slot::One, Archetype::Warrior, 200, &arena).expect("p1");
        assert_eq!(warrior.view(&arena).attack_area, None);
        assert!(execute_attack(&mut warrior, AttackKind::First, &mut Muted));
        let view = warrior.view(&arena);
        assert_eq!(view.attack, Some(AttackKind::First));
        assert!(view.attack_area.is_some());
        assert_eq!(view.health_ratio(), 1.0);
    }
}

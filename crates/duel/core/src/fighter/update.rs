use super::Fighter;
use crate::animation::ActionKind;
use crate::arena::Arena;
use crate::combat::resolve_contact;
use crate::config::SimConfig;

impl Fighter {
    /// Advances the action state machine by `dt_ms` of simulated time.
    ///
    /// Contact strikes resolve only on the update where a new frame lands;
    /// archetype frame effects and ordnance run on every update.
    pub fn update(&mut self, arena: &Arena, opponent: Option<&mut Fighter>, dt_ms: u32) {
        let mut opponent = opponent;
        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(dt_ms));

        let action = self.select_action();
        if matches!(action, ActionKind::Hit | ActionKind::Death) {
            self.attack.cancel();
        }
        self.enter(action);

        if self.pacing.advance(dt_ms) {
            self.frame = self.frame.saturating_add(1);
            if self.attack.is_attacking() {
                if let Some(target) = opponent.as_deref_mut() {
                    resolve_contact(self, target, arena);
                }
            }
        }

        if self.attack.is_attacking() {
            if let Some(target) = opponent.as_deref_mut() {
                (self.archetype.policy().on_frame)(self, target, arena);
            }
        }

        self.complete_animation();

        self.attack.cooldown = self.attack.cooldown.saturating_sub(1);
        self.stun_ticks = self.stun_ticks.saturating_sub(1);

        self.ordnance.tick(opponent, arena, dt_ms, self.elapsed_ms);
        self.attack.combo.expire(self.elapsed_ms, SimConfig::COMBO_WINDOW_MS);
    }

    /// Picks the visible action by priority: death, hit, attack, jump, run.
    fn select_action(&mut self) -> ActionKind {
        if !self.is_alive() {
            return ActionKind::Death;
        }
        if self.is_hit || self.stun_ticks > 0 {
            return ActionKind::Hit;
        }
        if let Some(kind) = self.attack.kind {
            let policy = self.archetype.policy();
            if !(policy.channelled)(kind) {
                self.attack.ticks += 1;
                return ActionKind::from_attack(kind);
            }
            let duration = u32::from(self.frame_count(ActionKind::from_attack(kind)));
            if self.attack.ticks >= duration {
                self.attack.finish(policy.recovery_cooldown);
            } else {
                self.attack.ticks += 1;
            }
            return ActionKind::Idle;
        }
        if self.jumping {
            ActionKind::Jump
        } else if self.running {
            ActionKind::Run
        } else {
            ActionKind::Idle
        }
    }

    fn enter(&mut self, action: ActionKind) {
        if self.action != action {
            self.action = action;
            self.frame = 0;
            self.pacing.reset();
        }
    }

    fn complete_animation(&mut self) {
        let count = self.frame_count(self.action);
        if self.frame < count {
            return;
        }
        if !self.is_alive() {
            self.frame = count - 1;
            self.death_done = true;
            return;
        }

        self.frame = 0;
        if self.action.is_attack() && self.attack.is_attacking() {
            self.attack.finish(self.archetype.policy().recovery_cooldown);
        }
        if self.action == ActionKind::Hit {
            if self.stun_ticks == 0 {
                self.is_hit = false;
            }
            self.attack.finish(SimConfig::HIT_RECOVERY_COOLDOWN);
        }
    }
}

use super::Fighter;
use crate::arena::Arena;
use crate::combat::execute_attack;
use crate::cue::CueSink;
use crate::geometry::Facing;
use crate::input::{Buttons, InputSnapshot};

impl Fighter {
    /// Consumes one tick of input, applies gravity and clamps to the arena.
    ///
    /// Voluntary input is ignored while attacking, dead, stunned or once the
    /// round is over. Gravity, facing and damage over time apply regardless.
    pub fn move_step<C: CueSink + ?Sized>(
        &mut self,
        arena: &Arena,
        input: InputSnapshot,
        opponent: &Fighter,
        round_over: bool,
        cues: &mut C,
    ) {
        let mut dx = 0;
        self.running = false;

        let jump_pressed = input.held(Buttons::JUMP) && !self.jump_held;
        self.jump_held = input.held(Buttons::JUMP);

        if self.accepts_input(round_over) {
            let direction = input.horizontal();
            if direction != 0 {
                dx = direction * self.profile.speed;
                self.running = true;
            }
            if jump_pressed && !self.jumping {
                self.velocity_y = self.profile.jump_impulse;
                self.jumping = true;
            }
            if !self.is_hit {
                if let Some(kind) = input.attack() {
                    execute_attack(self, kind, cues);
                }
            }
        }

        self.velocity_y += arena.gravity();
        let dx = arena.clamp_horizontal_delta(&self.body, dx);
        let (dy, landed) = arena.clamp_vertical(&self.body, self.velocity_y);
        if landed {
            self.velocity_y = 0;
            self.jumping = false;
        }

        self.facing = Facing::toward(self.body.center_x(), opponent.body.center_x());

        for (_, amount) in self.status.tick() {
            self.health.apply_damage(amount);
        }

        self.body.x += dx;
        self.body.y += dy;
    }

    fn accepts_input(&self, round_over: bool) -> bool {
        !self.attack.is_attacking() && self.is_alive() && self.stun_ticks == 0 && !round_over
    }
}

#[cfg(test)]
mod tests {
    use crate::archetype::Archetype;
    use crate::arena::Arena;
    use crate::cue::{AttackCue, Muted};
    use crate::fighter::Fighter;
    use crate::geometry::Facing;
    use crate::input::{Buttons, InputSnapshot};
    use crate::slot::Slot;
    use crate::status::StatusKind;

    fn duel() -> (Fighter, Fighter, Arena) {
        let arena = Arena::default();
        let p1 = Fighter::new(Slot::One, Archetype::Warrior, 300, &arena).expect("p1");
        let p2 = Fighter::new(Slot::Two, Archetype::Tank, 900, &arena).expect("p2");
        (p1, p2, arena)
    }

    fn press(buttons: Buttons) -> InputSnapshot {
        InputSnapshot::new(buttons)
    }

    #[test]
    fn right_wins_over_left() {
        let (mut p1, p2, arena) = duel();
        p1.move_step(&arena, press(Buttons::LEFT | Buttons::RIGHT), &p2, false, &mut Muted);
        assert_eq!(p1.body().x, 310);
        assert!(p1.is_running());
    }

    #[test]
    fn walls_stop_movement() {
        let arena = Arena::default();
        let mut p1 = Fighter::new(Slot::One, Archetype::Trapper, 5, &arena).expect("p1");
        let p2 = Fighter::new(Slot::Two, Archetype::Tank, 900, &arena).expect("p2");
        p1.move_step(&arena, press(Buttons::LEFT), &p2, false, &mut Muted);
        assert_eq!(p1.body().x, 0);
    }

    #[test]
    fn jump_fires_on_the_rising_edge_only() {
        let (mut p1, p2, arena) = duel();
        let ground = arena.ground();
        p1.move_step(&arena, press(Buttons::JUMP), &p2, false, &mut Muted);
        assert!(p1.is_jumping());
        assert_eq!(p1.body().bottom(), ground - 28);

        let mut ticks = 1;
        while p1.is_jumping() {
            p1.move_step(&arena, press(Buttons::JUMP), &p2, false, &mut Muted);
            ticks += 1;
            assert!(ticks < 100, "never landed");
        }
        assert_eq!(p1.body().bottom(), ground);

        // still held: no second jump
        p1.move_step(&arena, press(Buttons::JUMP), &p2, false, &mut Muted);
        assert!(!p1.is_jumping());
        p1.move_step(&arena, InputSnapshot::IDLE, &p2, false, &mut Muted);
        p1.move_step(&arena, press(Buttons::JUMP), &p2, false, &mut Muted);
        assert!(p1.is_jumping());
    }

    #[test]
    fn input_is_ignored_once_the_round_is_over() {
        let (mut p1, p2, arena) = duel();
        let mut cues: Vec<AttackCue> = Vec::new();
        p1.move_step(&arena, press(Buttons::RIGHT | Buttons::ATTACK1), &p2, true, &mut cues);
        assert_eq!(p1.body().x, 300);
        assert!(cues.is_empty());
        assert!(!p1.attack().is_attacking());
    }

    #[test]
    fn attacking_freezes_movement() {
        let (mut p1, p2, arena) = duel();
        let mut cues: Vec<AttackCue> = Vec::new();
        p1.move_step(&arena, press(Buttons::ATTACK2), &p2, false, &mut cues);
        assert_eq!(cues.len(), 1);
        p1.move_step(&arena, press(Buttons::RIGHT), &p2, false, &mut cues);
        assert_eq!(p1.body().x, 300);
    }

    #[test]
    fn facing_tracks_the_opponent() {
        let (mut p1, mut p2, arena) = duel();
        p2.body.x = 100;
        p1.move_step(&arena, InputSnapshot::IDLE, &p2, false, &mut Muted);
        assert_eq!(p1.facing(), Facing::Left);
    }

    #[test]
    fn status_ticks_even_after_the_round() {
        let (mut p1, p2, arena) = duel();
        p1.apply_status(StatusKind::Bleed, 6, 45);
        for _ in 0..45 {
            p1.move_step(&arena, InputSnapshot::IDLE, &p2, true, &mut Muted);
        }
        assert_eq!(p1.health().damage_taken(), 6);
        assert!(p1.status().is_empty());
    }
}

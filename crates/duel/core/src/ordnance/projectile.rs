use crate::arena::Arena;
use crate::combat::HitTarget;
use crate::geometry::Rect;
use crate::health::DamageOutcome;

/// Lifecycle shared by every projectile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ProjectilePhase {
    #[default]
    Flying,
    Landing,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ProjectileKind {
    Bolt,
    LavaDrop,
}

/// Straight-line shot aimed at a point.
///
/// Position is the center of a 30x30 box. The bolt damages the first target
/// it overlaps, drops to the ground once it reaches `ground - 10`, and is
/// discarded outright if it leaves the padded arena bounds first.
#[derive(Clone, Debug, PartialEq)]
pub struct Bolt {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    damage: i32,
    phase: ProjectilePhase,
    land_frame: u16,
    land_frames: u16,
    land_counter: u16,
    struck: bool,
}

impl Bolt {
    pub const SIZE: i32 = 30;
    pub const LAND_TICKS_PER_FRAME: u16 = 8;
    /// Slack around the arena before a bolt counts as gone.
    pub const BOUNDS_MARGIN: i32 = 100;
    pub const GROUND_CLEARANCE: i32 = 10;

    /// Bolt flying from `from` toward `to` at `speed` px per tick.
    ///
    /// Returns `None` when the two points coincide.
    pub fn aimed(
        from: (i32, i32),
        to: (i32, i32),
        speed: f32,
        damage: i32,
        land_frames: u16,
    ) -> Option<Self> {
        let dx = (to.0 - from.0) as f32;
        let dy = (to.1 - from.1) as f32;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= 0.0 {
            return None;
        }
        Some(Self::with_velocity(
            from,
            (dx / distance * speed, dy / distance * speed),
            damage,
            land_frames,
        ))
    }

    pub fn with_velocity(
        from: (i32, i32),
        velocity: (f32, f32),
        damage: i32,
        land_frames: u16,
    ) -> Self {
        Self {
            x: from.0 as f32,
            y: from.1 as f32,
            vx: velocity.0,
            vy: velocity.1,
            damage,
            phase: ProjectilePhase::Flying,
            land_frame: 0,
            land_frames,
            land_counter: 0,
            struck: false,
        }
    }

    pub fn phase(&self) -> ProjectilePhase {
        self.phase
    }

    pub fn frame(&self) -> u16 {
        self.land_frame
    }

    pub fn has_struck(&self) -> bool {
        self.struck
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        let half = (Self::SIZE / 2) as f32;
        Rect::new(
            (self.x - half) as i32,
            (self.y - half) as i32,
            Self::SIZE,
            Self::SIZE,
        )
    }

    pub fn tick<T: HitTarget + ?Sized>(
        &mut self,
        target: Option<&mut T>,
        arena: &Arena,
    ) -> Option<DamageOutcome> {
        match self.phase {
            ProjectilePhase::Dead => None,
            ProjectilePhase::Landing => {
                self.play_landing();
                None
            }
            ProjectilePhase::Flying => {
                self.x += self.vx;
                self.y += self.vy;

                if let Some(target) = target {
                    if self.bounds().intersects(&target.hurtbox()) {
                        self.struck = true;
                        self.start_landing();
                        return Some(target.take_hit(self.damage));
                    }
                }

                if self.out_of_bounds(arena) {
                    self.phase = ProjectilePhase::Dead;
                    return None;
                }

                if self.y >= (arena.ground() - Self::GROUND_CLEARANCE) as f32 {
                    self.start_landing();
                    self.play_landing();
                }
                None
            }
        }
    }

    fn out_of_bounds(&self, arena: &Arena) -> bool {
        let margin = Self::BOUNDS_MARGIN as f32;
        self.x < -margin
            || self.x > arena.width() as f32 + margin
            || self.y < -margin
            || self.y > arena.ground() as f32 + margin
    }

    fn start_landing(&mut self) {
        self.phase = ProjectilePhase::Landing;
        self.vx = 0.0;
        self.vy = 0.0;
        self.land_frame = 0;
        self.land_counter = 0;
    }

    fn play_landing(&mut self) {
        self.land_counter += 1;
        if self.land_counter >= Self::LAND_TICKS_PER_FRAME {
            self.land_counter = 0;
            self.land_frame += 1;
        }
        if self.land_frame >= self.land_frames {
            self.phase = ProjectilePhase::Dead;
        }
    }
}

/// Drop of lava falling straight down onto the arena.
///
/// `(x, y)` is the top-left of a 20x20 box. On touching the target or the
/// ground it bursts into a 60x60 blast centered on the drop, hurting the
/// target once if the blast overlaps it, then plays its burst frames.
#[derive(Clone, Debug, PartialEq)]
pub struct LavaDrop {
    x: f32,
    y: f32,
    fall_speed: f32,
    damage: i32,
    phase: ProjectilePhase,
    blast: Option<Rect>,
    burst_frame: u16,
    burst_frames: u16,
    frame_ms: u32,
    accumulated_ms: u32,
    struck: bool,
}

impl LavaDrop {
    pub const SIZE: i32 = 20;
    pub const BLAST_SIZE: i32 = 60;

    pub fn new(
        x: i32,
        y: i32,
        fall_speed: f32,
        damage: i32,
        burst_frames: u16,
        frame_ms: u32,
    ) -> Self {
        Self {
            x: x as f32,
            y: y as f32,
            fall_speed,
            damage,
            phase: ProjectilePhase::Flying,
            blast: None,
            burst_frame: 0,
            burst_frames,
            frame_ms,
            accumulated_ms: 0,
            struck: false,
        }
    }

    pub fn phase(&self) -> ProjectilePhase {
        self.phase
    }

    pub fn frame(&self) -> u16 {
        self.burst_frame
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    pub fn has_struck(&self) -> bool {
        self.struck
    }

    pub fn blast(&self) -> Option<Rect> {
        self.blast
    }

    /// Falling box while airborne, blast area once it has burst.
    pub fn bounds(&self) -> Rect {
        self.blast.unwrap_or_else(|| self.drop_rect())
    }

    fn drop_rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y as i32, Self::SIZE, Self::SIZE)
    }

    pub fn tick<T: HitTarget + ?Sized>(
        &mut self,
        target: Option<&mut T>,
        arena: &Arena,
        dt_ms: u32,
    ) -> Option<DamageOutcome> {
        match self.phase {
            ProjectilePhase::Dead => None,
            ProjectilePhase::Landing => {
                self.play_burst(dt_ms);
                None
            }
            ProjectilePhase::Flying => {
                self.y += self.fall_speed;
                let rect = self.drop_rect();
                let touching = target
                    .as_ref()
                    .is_some_and(|target| rect.intersects(&target.hurtbox()));
                let grounded = self.y + Self::SIZE as f32 >= arena.ground() as f32;
                if touching || grounded {
                    return self.burst(target);
                }
                None
            }
        }
    }

    fn burst<T: HitTarget + ?Sized>(&mut self, target: Option<&mut T>) -> Option<DamageOutcome> {
        let half = (Self::SIZE / 2) as f32;
        let blast = Rect::centered_on(
            (self.x + half) as i32,
            (self.y + half) as i32,
            Self::BLAST_SIZE,
            Self::BLAST_SIZE,
        );
        self.blast = Some(blast);
        self.phase = ProjectilePhase::Landing;
        self.burst_frame = 0;
        self.accumulated_ms = 0;

        let target = target?;
        if self.struck || !blast.intersects(&target.hurtbox()) {
            return None;
        }
        self.struck = true;
        Some(target.take_hit(self.damage))
    }

    fn play_burst(&mut self, dt_ms: u32) {
        if self.burst_frames == 0 {
            self.phase = ProjectilePhase::Dead;
            return;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(dt_ms);
        if self.accumulated_ms >= self.frame_ms {
            self.accumulated_ms = 0;
            self.burst_frame += 1;
            if self.burst_frame >= self.burst_frames {
                self.phase = ProjectilePhase::Dead;
            }
        }
    }
}

/// Projectile owned by a fighter.
#[derive(Clone, Debug, PartialEq)]
pub enum Projectile {
    Bolt(Bolt),
    LavaDrop(LavaDrop),
}

impl Projectile {
    pub fn kind(&self) -> ProjectileKind {
        match self {
            Self::Bolt(_) => ProjectileKind::Bolt,
            Self::LavaDrop(_) => ProjectileKind::LavaDrop,
        }
    }

    pub fn phase(&self) -> ProjectilePhase {
        match self {
            Self::Bolt(bolt) => bolt.phase(),
            Self::LavaDrop(drop) => drop.phase(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.phase() == ProjectilePhase::Dead
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Self::Bolt(bolt) => bolt.bounds(),
            Self::LavaDrop(drop) => drop.bounds(),
        }
    }

    pub fn frame(&self) -> u16 {
        match self {
            Self::Bolt(bolt) => bolt.frame(),
            Self::LavaDrop(drop) => drop.frame(),
        }
    }

    pub fn tick<T: HitTarget + ?Sized>(
        &mut self,
        target: Option<&mut T>,
        arena: &Arena,
        dt_ms: u32,
    ) -> Option<DamageOutcome> {
        match self {
            Self::Bolt(bolt) => bolt.tick(target, arena),
            Self::LavaDrop(drop) => drop.tick(target, arena, dt_ms),
        }
    }
}

impl From<Bolt> for Projectile {
    fn from(bolt: Bolt) -> Self {
        Self::Bolt(bolt)
    }
}

impl From<LavaDrop> for Projectile {
    fn from(drop: LavaDrop) -> Self {
        Self::LavaDrop(drop)
    }
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before the whole page fades in.
pub const PAGE_FADE_IN_DELAY_MS: u32 = 500;

pub const HERO_REVEAL_DELAY_MS: u32 = 100;
pub const FLOATING_HEART_COUNT: usize = 20;
pub const FLOATING_HEART_DELAY_SECS: (f64, f64) = (0.0, 5.0);
pub const FLOATING_HEART_DURATION_SECS: (f64, f64) = (5.0, 15.0);

pub const STORY_THRESHOLD: f64 = 0.2;
pub const STORY_STAGGER_MS: f64 = 300.0;

pub const GALLERY_THRESHOLD: f64 = 0.1;
pub const GALLERY_STAGGER_MS: u32 = 100;

pub const PROPOSAL_THRESHOLD: f64 = 0.3;
pub const QUESTION_DELAY_MS: f64 = 1000.0;
pub const CONTROLS_DELAY_MS: f64 = 2000.0;

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_LIFETIME_MS: f64 = 3000.0;
pub const PARTICLE_RISE_SECS: (f64, f64) = (2.0, 4.0);

/// Gap kept between the evasive control and the right/bottom viewport edges.
pub const EVASION_MARGIN: f64 = 20.0;

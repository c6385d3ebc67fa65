//! Fire-and-forget collaborators notified when a session completes.

/// Celebratory visual effect (confetti or similar).
pub trait Celebration {
    fn trigger(&mut self);
}

/// Completion sound. Only triggered while sound is enabled.
pub trait AudioCue {
    fn trigger(&mut self);
}

/// Collaborator that does nothing, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffect;

impl Celebration for NoEffect {
    fn trigger(&mut self) {}
}

impl AudioCue for NoEffect {
    fn trigger(&mut self) {}
}

pub struct Effects {
    pub celebration: Box<dyn Celebration>,
    pub audio: Box<dyn AudioCue>,
}

impl Effects {
    pub fn new(celebration: impl Celebration + 'static, audio: impl AudioCue + 'static) -> Self {
        Self {
            celebration: Box::new(celebration),
            audio: Box::new(audio),
        }
    }

    pub fn none() -> Self {
        Self::new(NoEffect, NoEffect)
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::none()
    }
}

//! Sound cues for game events
//!
//! The simulation never plays audio itself. It reports `GameEvent`s; the
//! `AudioManager` turns those into one-shot cues and hands them to whatever
//! backend the frontend provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Experience rolled over into a new level
    LevelUp,
    /// Player took contact damage
    PlayerHit,
    /// Player was sent back to spawn
    Respawn,
    /// hp reached zero
    GameOver,
}

impl SoundEffect {
    /// Cue for an event, if it has one. Volleys and kills are silent.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::LevelUp { .. } => Some(SoundEffect::LevelUp),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
            GameEvent::PlayerRespawned => Some(SoundEffect::Respawn),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            GameEvent::ProjectilesFired { .. }
            | GameEvent::ObstacleDestroyed { .. }
            | GameEvent::Restarted => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend for headless runs: logs each cue
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play the cue for every event of the last tick. Returns how many played.
    pub fn handle_events(&mut self, events: &[GameEvent]) -> usize {
        let mut played = 0;
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            if self.effective_volume() > 0.0 {
                played += 1;
            }
            self.play(effect);
        }
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records cues so tests can inspect them
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    #[test]
    fn test_level_up_plays_cue() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        let events = [
            GameEvent::ProjectilesFired { count: 8 },
            GameEvent::ObstacleDestroyed { index: 3 },
            GameEvent::LevelUp { level: 2 },
        ];
        assert_eq!(audio.handle_events(&events), 1);
        let played = recorder.0.borrow();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, SoundEffect::LevelUp);
        assert!((played[0].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.set_muted(true);
        assert_eq!(audio.handle_events(&[GameEvent::GameOver]), 0);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::PlayerHit);
        assert!((recorder.0.borrow()[0].1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_silent_events() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Restarted), None);
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PlayerRespawned),
            Some(SoundEffect::Respawn)
        );
    }
}

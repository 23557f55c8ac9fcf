//! Audio feedback boundary
//!
//! The simulation only emits `GameEvent`s. This module maps them to sound
//! cues and hands those to whatever backend the host provides. Playback is
//! fire-and-forget; nothing here waits for a sound to finish.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Actor jumped
    Jump,
    /// A column half was cleared
    Score,
    /// Actor hit a column (or fell out)
    Collision,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Score { .. } => Some(SoundEffect::Score),
            GameEvent::Collision(_) | GameEvent::FellOut => Some(SoundEffect::Collision),
            GameEvent::GameOver { .. } => None,
        }
    }

    /// Conventional asset file name for backends that play samples
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Score => "score.wav",
            SoundEffect::Collision => "collision.wav",
        }
    }
}

/// Something that can play a cue at a given volume
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Headless backend: logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {} (vol {:.2})", effect.asset(), volume);
    }
}

/// Records cues (useful for tests and replays)
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.push(effect);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
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
        self.sink.play(effect, vol);
    }

    /// Play the cue for every event that has one
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Collision, ColumnHalf};

    fn events() -> Vec<GameEvent> {
        vec![
            GameEvent::Jump,
            GameEvent::Score {
                obstacle: 0,
                half: ColumnHalf::Top,
                score: 0.5,
            },
            GameEvent::Collision(Collision {
                obstacle: 1,
                half: ColumnHalf::Bottom,
                distance: 20.0,
            }),
            GameEvent::GameOver { score: 0 },
        ]
    }

    #[test]
    fn test_events_map_to_cues() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        audio.handle_events(&events());
        assert_eq!(
            audio.sink(),
            &vec![SoundEffect::Jump, SoundEffect::Score, SoundEffect::Collision]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        audio.set_muted(true);
        audio.handle_events(&events());
        assert!(audio.sink().is_empty());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::Jump);
        assert!(audio.sink().is_empty());
    }
}

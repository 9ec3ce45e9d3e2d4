//! Audio system using Web Audio API
//!
//! Procedurally generated tones - no external files needed. Native builds
//! keep the same API and only log what would have played.

use crate::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player stepped
    Move,
    /// Player touched a hazard
    Hit,
    /// Goal reached
    Win,
    /// Out of energy
    Lose,
}

impl SoundEffect {
    /// The effect for a simulation event
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Moved => SoundEffect::Move,
            GameEvent::HazardHit => SoundEffect::Hit,
            GameEvent::Won => SoundEffect::Win,
            GameEvent::Lost => SoundEffect::Lose,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build from settings
    pub fn with_settings(settings: &crate::Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
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

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect. Returns false when nothing was emitted.
    pub fn play(&self, effect: SoundEffect) -> bool {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return false;
        }
        self.emit(effect, vol)
    }

    /// Play the sound for every event, in order
    pub fn play_events(&self, events: &[GameEvent]) {
        for &event in events {
            self.play(SoundEffect::for_event(event));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(&self, effect: SoundEffect, vol: f32) -> bool {
        log::trace!("Sound {:?} at volume {:.2}", effect, vol);
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(&self, effect: SoundEffect, vol: f32) -> bool {
        let Some(ctx) = &self.ctx else { return false };

        // Browsers start the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Move => self.play_move(ctx, vol),
            SoundEffect::Hit => self.play_hit(ctx, vol),
            SoundEffect::Win => self.play_win(ctx, vol),
            SoundEffect::Lose => self.play_lose(ctx, vol),
        }
        true
    }
}

// === Sound generators ===

#[cfg(target_arch = "wasm32")]
impl AudioManager {
    /// Oscillator routed through its own gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short blip starting at `start` seconds from now
    fn blip(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
        vol: f32,
        start: f64,
        len: f64,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + start;

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + len)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + len + 0.02).ok();
    }

    /// Step - quiet square tick
    fn play_move(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, 440.0, OscillatorType::Square, vol * 0.15, 0.0, 0.05);
    }

    /// Hazard hit - low sawtooth buzz sliding down
    fn play_hit(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(60.0, t + 0.2)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Win - rising major arpeggio
    fn play_win(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.25, 659.25, 783.99, 1046.5].into_iter().enumerate() {
            self.blip(ctx, freq, OscillatorType::Sine, vol * 0.35, i as f64 * 0.1, 0.25);
        }
    }

    /// Lose - falling minor triad
    fn play_lose(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [392.0, 311.13, 261.63].into_iter().enumerate() {
            self.blip(ctx, freq, OscillatorType::Triangle, vol * 0.4, i as f64 * 0.18, 0.3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_event_mapping() {
        assert_eq!(SoundEffect::for_event(GameEvent::Moved), SoundEffect::Move);
        assert_eq!(SoundEffect::for_event(GameEvent::HazardHit), SoundEffect::Hit);
        assert_eq!(SoundEffect::for_event(GameEvent::Won), SoundEffect::Win);
        assert_eq!(SoundEffect::for_event(GameEvent::Lost), SoundEffect::Lose);
    }

    #[test]
    fn test_muted_skips_emission() {
        let mut audio = AudioManager::new();
        assert!(audio.play(SoundEffect::Move));
        assert!(audio.toggle_muted());
        assert!(!audio.play(SoundEffect::Move));
        assert!(!audio.toggle_muted());
        assert!(audio.play(SoundEffect::Win));
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(-1.0);
        assert!(!audio.play(SoundEffect::Hit));
    }

    #[test]
    fn test_with_settings() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let audio = AudioManager::with_settings(&settings);
        assert!(audio.is_muted());
        assert!(!audio.play(SoundEffect::Lose));
    }
}

//! Audio system using Web Audio API
//!
//! Procedurally generated cues - no external files needed. The game has two
//! audio states only: a sustained ambient pad while the session is live,
//! and a one-shot descending figure the moment the run ends.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    muted: bool,
    /// Oscillators of the running ambient pad; empty while silent
    ambient: Vec<(OscillatorNode, GainNode)>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            muted: false,
            ambient: Vec::new(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Create an oscillator routed through its own gain node
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

    /// Start the ambient pad; a no-op while one is already running
    pub fn start_ambient(&mut self) {
        if !self.ambient.is_empty() {
            return;
        }
        let vol = self.effective_volume();
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        // Low stacked fifths, quiet enough to sit under the action
        let voices = [
            (55.0, 0.12, OscillatorType::Sine),
            (82.5, 0.07, OscillatorType::Triangle),
            (110.0, 0.04, OscillatorType::Sine),
        ];
        let mut started = Vec::with_capacity(voices.len());
        for (freq, level, osc_type) in voices {
            if let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) {
                gain.gain().set_value(vol * level);
                if osc.start().is_ok() {
                    started.push((osc, gain));
                }
            }
        }
        self.ambient = started;
    }

    /// Fade out and stop the ambient pad
    pub fn stop_ambient(&mut self) {
        let Some(ctx) = &self.ctx else {
            self.ambient.clear();
            return;
        };
        let t = ctx.current_time();
        for (osc, gain) in self.ambient.drain(..) {
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.stop_with_when(t + 0.25).ok();
        }
    }

    /// The session just ended: kill the pad and play the descending cue
    ///
    /// The frontend calls this exactly once, on the terminal phase edge.
    pub fn enter_game_over(&mut self) {
        self.stop_ambient();

        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        for (i, freq) in [392.0, 330.0, 262.0, 196.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}

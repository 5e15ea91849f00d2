//! Theme toggle and audio cross-fade.
//!
//! Peripheral to the board engine: flips the visual theme and ramps the
//! night-audio channel linearly between silence and a fixed ceiling. The
//! platform audio output sits behind [`AudioSink`] so the ramp logic is
//! testable without a device; a platform that rejects playback before any
//! user interaction (autoplay policy) is tolerated — the rejection is
//! logged and the visual theme switch completes regardless.

use crate::constants::{AUDIO_FADE_STEP, AUDIO_FADE_TICK, AUDIO_VOLUME_CEILING};
use crate::scheduler::{Scheduler, TaskAction, TaskId};
use std::time::Duration;
use thiserror::Error;

/// Visual mode of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Direction of an in-flight volume ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Starting playback was rejected by the platform (autoplay policy).
#[derive(Debug, Error)]
#[error("audio playback rejected: no prior user interaction")]
pub struct PlaybackRejected;

/// Platform audio output for the night-mode channel.
pub trait AudioSink {
    /// Begin playback. May be rejected by autoplay policy.
    fn play(&mut self) -> Result<(), PlaybackRejected>;
    /// Stop playback, keeping the position.
    fn pause(&mut self);
    /// Seek back to the start of the track.
    fn rewind(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}

/// Flips the theme and drives the audio ramp through the scheduler.
///
/// At most one ramp runs at a time: toggling mid-fade cancels the previous
/// ramp task before arming the new one.
pub struct ThemeAudioController {
    theme: Theme,
    sink: Box<dyn AudioSink>,
    fade_task: Option<TaskId>,
}

impl ThemeAudioController {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            theme: Theme::Light,
            sink,
            fade_task: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn volume(&self) -> f32 {
        self.sink.volume()
    }

    pub fn is_fading(&self) -> bool {
        self.fade_task.is_some()
    }

    /// Flip the theme and start the matching volume ramp.
    pub fn toggle(&mut self, scheduler: &mut Scheduler, now: Duration) -> Theme {
        if let Some(task) = self.fade_task.take() {
            scheduler.cancel(task);
        }

        self.theme = self.theme.toggled();
        let direction = match self.theme {
            Theme::Dark => {
                self.sink.set_volume(0.0);
                if let Err(err) = self.sink.play() {
                    // Non-fatal: the visual switch still completes.
                    tracing::warn!(%err, "night audio did not start");
                }
                FadeDirection::In
            }
            Theme::Light => FadeDirection::Out,
        };

        self.fade_task = Some(scheduler.schedule_repeating(
            now + AUDIO_FADE_TICK,
            AUDIO_FADE_TICK,
            TaskAction::AudioFadeStep(direction),
        ));
        tracing::info!(theme = ?self.theme, "theme toggled");
        self.theme
    }

    /// Apply one ramp step; disarms the ramp task at either boundary.
    ///
    /// Steps delivered after the ramp has finished (a coarse tick can batch
    /// several intervals at once) are ignored.
    pub fn fade_step(&mut self, direction: FadeDirection, scheduler: &mut Scheduler) {
        if self.fade_task.is_none() {
            return;
        }
        match direction {
            FadeDirection::In => {
                let volume = (self.sink.volume() + AUDIO_FADE_STEP).min(AUDIO_VOLUME_CEILING);
                self.sink.set_volume(volume);
                if volume >= AUDIO_VOLUME_CEILING {
                    self.finish_fade(scheduler);
                }
            }
            FadeDirection::Out => {
                let volume = self.sink.volume();
                if volume > AUDIO_FADE_STEP {
                    self.sink.set_volume(volume - AUDIO_FADE_STEP);
                } else {
                    self.sink.set_volume(0.0);
                    self.sink.pause();
                    self.sink.rewind();
                    self.finish_fade(scheduler);
                }
            }
        }
    }

    fn finish_fade(&mut self, scheduler: &mut Scheduler) {
        if let Some(task) = self.fade_task.take() {
            scheduler.cancel(task);
        }
    }
}

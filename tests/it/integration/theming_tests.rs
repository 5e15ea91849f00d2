//! Theming and Audio Fade Integration Tests

use crate::helpers::{ms, TestAppBuilder};
use moodboard::constants::AUDIO_VOLUME_CEILING;
use moodboard::theme::Theme;

#[test]
fn test_toggle_flips_theme_immediately() {
    let (mut app, _audio) = TestAppBuilder::new().build();
    assert_eq!(app.theme.theme(), Theme::Light);

    assert_eq!(app.toggle_theme(), Theme::Dark);
    assert_eq!(app.theme.theme(), Theme::Dark);
    assert_eq!(app.toggle_theme(), Theme::Light);
    assert_eq!(app.theme.theme(), Theme::Light);
}

#[test]
fn test_dark_mode_starts_audio_from_silence() {
    let (mut app, audio) = TestAppBuilder::new().build();
    app.toggle_theme();

    let probe = audio.lock().unwrap();
    assert_eq!(probe.play_calls, 1);
    assert!(probe.playing);
    assert_eq!(probe.volume, 0.0);
}

#[test]
fn test_fade_in_ramps_to_ceiling_and_stops() {
    let (mut app, audio) = TestAppBuilder::new().build();
    app.toggle_theme();
    assert!(app.theme.is_fading());

    // Partway through the ramp the volume sits between the bounds.
    app.tick(ms(600));
    let mid = app.theme.volume();
    assert!(mid > 0.0 && mid < AUDIO_VOLUME_CEILING);
    assert!((mid - 0.15).abs() < 1e-3);

    // Well past the full ramp: clamped at the ceiling, task disarmed.
    app.tick(ms(3000));
    assert!((app.theme.volume() - AUDIO_VOLUME_CEILING).abs() < 1e-6);
    assert!(!app.theme.is_fading());
    assert_eq!(app.scheduler.pending(), 0);
    assert!(audio.lock().unwrap().playing);
}

#[test]
fn test_fade_out_silences_pauses_and_rewinds() {
    let (mut app, audio) = TestAppBuilder::new().build();
    app.toggle_theme();
    app.tick(ms(3000));
    assert!((app.theme.volume() - AUDIO_VOLUME_CEILING).abs() < 1e-6);

    app.toggle_theme();
    app.tick(ms(6000));

    let probe = audio.lock().unwrap();
    assert_eq!(probe.volume, 0.0);
    assert!(!probe.playing);
    assert_eq!(probe.pause_calls, 1);
    assert_eq!(probe.rewind_calls, 1);
    assert!(!app.theme.is_fading());
    assert_eq!(app.scheduler.pending(), 0);
}

#[test]
fn test_toggle_mid_fade_replaces_the_ramp() {
    let (mut app, audio) = TestAppBuilder::new().build();
    app.toggle_theme();
    app.tick(ms(600));
    assert!(app.theme.is_fading());

    // Flip back while the fade-in is still running: exactly one ramp task
    // remains, and it now runs the volume back down.
    app.toggle_theme();
    assert_eq!(app.scheduler.pending(), 1);

    app.tick(ms(6000));
    assert_eq!(app.theme.volume(), 0.0);
    assert!(!audio.lock().unwrap().playing);
    assert!(!app.theme.is_fading());
}

#[test]
fn test_rejected_playback_still_switches_theme() {
    let (mut app, audio) = TestAppBuilder::new().with_rejected_playback().build();

    assert_eq!(app.toggle_theme(), Theme::Dark);
    assert_eq!(app.theme.theme(), Theme::Dark);
    {
        let probe = audio.lock().unwrap();
        assert_eq!(probe.play_calls, 1);
        assert!(!probe.playing);
    }

    // The ramp still runs; only audible playback is missing.
    app.tick(ms(3000));
    assert!((app.theme.volume() - AUDIO_VOLUME_CEILING).abs() < 1e-6);
}

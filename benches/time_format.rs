// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the overlay's per-tick work.
//!
//! The position poll runs every 10 ms, so these measure:
//! - Time label formatting (elapsed and remaining)
//! - A full controller tick through the scheduler

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::domain::video::MediaDuration;
use iced_reel::ui::player::{ControlSettings, PlayerControls};
use iced_reel::video_player::{elapsed_label, format_elapsed, format_remaining, PlaybackClock};
use std::hint::black_box;
use std::time::Duration;

/// Clock that moves forward a fixed amount per sample.
struct SteadyClock {
    position: f64,
}

impl PlaybackClock for SteadyClock {
    fn current_position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> MediaDuration {
        MediaDuration::from_secs(596.0)
    }

    fn seek(&mut self, to_secs: f64) {
        self.position = to_secs;
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn is_playing(&self) -> bool {
        true
    }
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_format");

    group.bench_function("format_elapsed", |b| {
        b.iter(|| format_elapsed(black_box(129_600)));
    });

    group.bench_function("elapsed_label", |b| {
        b.iter(|| elapsed_label(black_box(3_725.42)));
    });

    group.bench_function("format_remaining", |b| {
        b.iter(|| format_remaining(black_box(125.7)));
    });

    group.finish();
}

fn bench_controller_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("player_controls");

    group.bench_function("poll_tick", |b| {
        let mut controls = PlayerControls::with_settings(ControlSettings::default());
        controls.attach(SteadyClock { position: 0.0 });
        let mut now = Duration::ZERO;

        b.iter(|| {
            now += Duration::from_millis(10);
            controls.advance(black_box(now));
            black_box(controls.state().slider_value);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_controller_tick);
criterion_main!(benches);

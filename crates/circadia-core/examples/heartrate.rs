//! Render a synthetic day of heart-rate readings.
//!
//! Run with `RUST_LOG=circadia_core=debug` to see skipped-sample events.

use circadia_core::{DayChart, Sample, ValueDomain};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // One reading every five minutes: a resting night, a morning climb,
    // and an afternoon workout spike.
    let samples: Vec<Sample> = (0..288)
        .map(|i| {
            let minute = i * 5;
            let phase = f64::from(minute) / 1440.0 * std::f64::consts::TAU;
            let workout = if (1020..1080).contains(&minute) { 38.0 } else { 0.0 };
            let bpm = 68.0 - 12.0 * phase.cos() + 6.0 * (phase * 2.0).sin() + workout;
            Sample::new(
                format!("2024-01-15T{:02}:{:02}:00Z", minute / 60, minute % 60),
                bpm.round(),
            )
        })
        .collect();

    let domain = ValueDomain::from_raw_samples(&samples);
    let mut chart = DayChart::from_samples(samples).with_unit("bpm");
    if let Some(domain) = domain {
        chart = chart.with_domain(domain);
    }

    println!("{}", chart.render());
}

//! Render a synthetic day of per-minute MET activity values.

use circadia_core::DayChart;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Sedentary baseline with a commute, a lunchtime walk, and an evening run.
    let values: Vec<f64> = (0..1440)
        .map(|minute| match minute {
            0..=419 => 0.9,
            480..=515 => 3.5,
            740..=770 => 4.2,
            1110..=1150 => 9.8,
            _ => 1.3,
        })
        .collect();

    println!("{}", DayChart::from_minutely(values).render());
}

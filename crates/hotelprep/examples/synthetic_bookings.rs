//! Runs the preparation pipeline on synthetic bookings.
//!
//! Lead times follow an exponential distribution and daily rates a
//! log-normal one, so the scaled partitions show a realistic skew.
//!
//! Run with: `cargo run --example synthetic_bookings`

use hotelprep::{
    features::fixtures::synthetic_bookings,
    math::ScaleMethod,
    pipeline::{Pipeline, PipelineConfig, RunMode, Smote},
    primitives::columns as c,
};
use polars::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Exp, LogNormal};

const N_BOOKINGS: usize = 5_000;
const SEED: u64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut raw = synthetic_bookings(N_BOOKINGS, SEED);

    let mut rng = StdRng::seed_from_u64(SEED);
    let lead = Exp::<f64>::new(1.0 / 100.0)?;
    let rate = LogNormal::<f64>::new(4.5, 0.4)?;
    let lead_time: Vec<i64> = (0..N_BOOKINGS).map(|_| lead.sample(&mut rng).round() as i64).collect();
    let adr: Vec<f64> =
        (0..N_BOOKINGS).map(|_| (rate.sample(&mut rng) * 100.0).round() / 100.0).collect();
    raw.with_column(Column::new(c::LEAD_TIME.into(), lead_time))?;
    raw.with_column(Column::new(c::ADR.into(), adr))?;

    println!("Synthetic bookings: {} rows x {} columns\n", raw.height(), raw.width());

    for mode in [RunMode::FitOnTrain, RunMode::Reference] {
        let config =
            PipelineConfig { mode, scale: ScaleMethod::Robust, ..PipelineConfig::default() };
        let prepared = Pipeline::new(config).run(raw.clone())?;

        println!("Mode: {mode}");
        println!("{:<12} {:>8} {:>8}", "Partition", "Rows", "Columns");
        println!("{}", "-".repeat(30));
        for (name, df) in [
            ("train", &prepared.train),
            ("validation", &prepared.validation),
            ("holdout", &prepared.holdout),
        ] {
            println!("{:<12} {:>8} {:>8}", name, df.height(), df.width());
        }

        let agents = &prepared.fitted.agent_activity;
        println!("Agent counts fitted on {} bookings ({} agents)", agents.total(), agents.len());

        let balanced = prepared.oversample_train(&Smote::default())?;
        println!("Train after SMOTE: {} rows\n", balanced.height());

        if mode == RunMode::FitOnTrain {
            println!("{}\n", prepared.train.head(Some(5)));
            let json = prepared.fitted.to_json()?;
            println!("Fitted state: {} bytes of JSON\n", json.len());
        }
    }

    Ok(())
}

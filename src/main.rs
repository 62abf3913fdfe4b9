use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use costfloor::datasets;
use costfloor::{
    select_with, sum_selected, telemetry, DemoConfig, Flag, MockObserver, Observer,
    ObserverVariant, SelectOptions, Stats, TracingObserver,
};

/// One demo run, as printed with `--json`.
#[derive(Serialize)]
struct RunReport<'a> {
    dataset: &'a str,
    flags: &'a [Flag],
    total: f64,
    stats: Option<Stats>,
}

/// Forwards to the tracing observer and keeps a copy for the JSON report.
struct DemoObserver {
    log: TracingObserver,
    record: MockObserver,
}

impl Observer for DemoObserver {
    fn name(&self) -> &'static str {
        "demo-observer"
    }

    fn observe(&self, stats: &Stats) {
        self.log.observe(stats);
        self.record.observe(stats);
    }
}

fn main() -> Result<()> {
    telemetry::init();

    let config = DemoConfig::parse();
    info!("Configuration: dataset={:?}, json={}", config.dataset, config.json);

    let runs: Vec<(&str, Vec<f64>)> = match &config.costs {
        Some(costs) => vec![("cli", costs.clone())],
        None => datasets::samples(config.dataset)
            .into_iter()
            .map(|(name, costs)| (name, costs.to_vec()))
            .collect(),
    };

    let record = MockObserver::new();
    let options = SelectOptions::new().with_observer(ObserverVariant::custom(DemoObserver {
        log: TracingObserver,
        record: record.clone(),
    }));

    for (name, costs) in &runs {
        record.clear();
        let flags = select_with(costs, &options)
            .with_context(|| format!("selection failed for dataset `{}`", name))?;
        let total = sum_selected(costs, &flags)
            .with_context(|| format!("total failed for dataset `{}`", name))?;

        if config.json {
            let report = RunReport {
                dataset: name,
                flags: &flags,
                total,
                stats: record.last(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}: {:?}", name, flags);
            println!("{}", total);
            println!("===================");
        }
    }

    Ok(())
}

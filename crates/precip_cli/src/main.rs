use anyhow::{Context, Result};
use clap::Parser;
use precip_core::{run_forecast, ForecastConfig, ModelKind};

/// Precipitation forecast with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "precip")]
#[command(about = "Fixed-step precipitation forecast", long_about = None)]
struct Args {
    /// Initial precipitation level
    #[arg(short, long, default_value_t = 10.0)]
    initial: f64,

    /// Number of time steps, including the initial sample
    #[arg(short, long, default_value_t = 50)]
    steps: usize,

    /// Time increment per step
    #[arg(short, long, default_value_t = 1.0)]
    dt: f64,

    /// Temperature
    #[arg(short, long, default_value_t = 20.0)]
    temperature: f64,

    /// Humidity
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,

    /// Rate model (model1, model2, baseline)
    #[arg(short, long, default_value = "model1")]
    model: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let model: ModelKind = args.model.parse().context("invalid --model")?;

    let config = ForecastConfig {
        initial: args.initial,
        steps: args.steps,
        dt: args.dt,
        temperature: args.temperature,
        humidity: args.humidity,
        model,
    };
    let series = run_forecast(&config).context("forecast rejected")?;

    println!("Initial Precipitation: {}", config.initial);
    println!("Number of Time Steps: {}", config.steps);
    println!("Time Increment (dt): {}", config.dt);
    println!("Temperature: {}", config.temperature);
    println!("Humidity: {}", config.humidity);
    println!("Selected Model: {}", config.model);
    if let Some(last) = series.final_value() {
        println!("Final Predicted Precipitation: {last:.2}");
    }

    println!();
    println!("{:>10} {:>15}", "Time", "Precipitation");
    for (time, value) in series.iter() {
        println!("{time:>10.2} {value:>15.2}");
    }

    Ok(())
}

use std::{fs, process};
use clap::Parser;
use sampler_sim::SamplerSimulator;
use sampler_sim::serialization::SamplerDescription;
use weighted_sampler::MtUniform;

#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long)]
    config_file: String,

    #[arg(short, long, default_value_t = 100)]
    num_draws: u32,

    #[arg(short, long)]
    seed: Option<u64>,
}


fn main() {
    let args = Args::parse();

    println!("Config file: {}", args.config_file);
    println!("num draws: {}", args.num_draws);
    match args.seed {
        Some(seed) => println!("seed: {}", seed),
        None => println!("seed: none"),
    }

    let config_file = fs::File::open(&args.config_file).unwrap_or_else(|err| {
        eprintln!("Problem opening config file: {}", err);
        process::exit(1);
    });
    let sampler_desc: SamplerDescription = serde_json::from_reader(config_file).unwrap_or_else(|err| {
        eprintln!("Problem parsing config: {}", err);
        process::exit(2);
    });
    let sampler = sampler_desc.to_sampler().unwrap_or_else(|err| {
        eprintln!("Problem creating sampler: {} (code {})", err, err.code());
        process::exit(3);
    });

    let mut sim = SamplerSimulator::new(sampler);
    match args.seed {
        Some(seed) => sim.simulate_n_draws(args.num_draws as usize, &mut MtUniform::new(seed)),
        None => sim.simulate_n_draws(args.num_draws as usize, &mut rand::rng()),
    }

    sim.describe();
}

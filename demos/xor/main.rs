use std::env;

use log::info;

#[cfg(feature = "log_log4rs")]
use log::LevelFilter;
#[cfg(feature = "log_log4rs")]
use log4rs::append::console::ConsoleAppender;
#[cfg(feature = "log_log4rs")]
use log4rs::append::file::FileAppender;
#[cfg(feature = "log_log4rs")]
use log4rs::config::{Appender, Config, Root};
#[cfg(feature = "log_log4rs")]
use log4rs::encode::pattern::PatternEncoder;

#[cfg(all(feature = "log_env_logger", not(feature = "log_log4rs")))]
use env_logger::Env;

use nevermind_mlp::prelude::*;

const SEED: u64 = 6;
const EPOCHS: usize = 1000;

#[cfg(feature = "log_log4rs")]
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::default()))
        .build("log.txt")?;

    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::default()))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(
            Root::builder()
                .appender("console")
                .appender("logfile")
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(all(feature = "log_env_logger", not(feature = "log_log4rs")))]
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    Ok(())
}

#[cfg(not(any(feature = "log_env_logger", feature = "log_log4rs")))]
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

/// Usage : xor [topology.yaml|topology.json]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger()?;
    info!("nevermind-mlp XOR demo starting...");

    let topology = match env::args().nth(1) {
        Some(path) => Topology::from_file(path)?,
        None => Topology::new(2, vec![2], 1, 0.1)?,
    };

    let dataset = dataset_from_pairs(vec![
        (1.0, vec![0.0, 0.0]),
        (0.0, vec![0.0, 1.0]),
        (0.0, vec![1.0, 0.0]),
        (1.0, vec![1.0, 1.0]),
    ]);

    let mut net = NeuralNetwork::with_seed(topology, SEED);
    info!("{}", net);

    let err = net.learn(&dataset, EPOCHS)?;
    info!("Mean error per epoch : {:.6}", err);

    info!("Now testing net !!!");

    for entry in &dataset {
        let out = net.feed_forward(&entry.input)?.output();
        info!(
            "{:?} => {:.4} (expected {})",
            entry.input, out, entry.expected
        );
    }

    Ok(())
}

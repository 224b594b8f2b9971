use anyhow::Result;
use ipv4calc::cli;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::io;
use std::process;

// Stdout carries only prompts and the report.
fn init_logging() -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {}", e);
    }

    let res = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli::run(stdin.lock(), &mut out)
    };
    if let Err(e) = res {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

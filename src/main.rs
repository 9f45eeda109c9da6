#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::io::BufWriter;

use anyhow::{Context, Result};

mod config;
mod digit_pattern;
mod error;
mod sprite;
mod sprite_table;

use sprite_table::SpriteTable;

fn main() -> Result<()> {
    let logger = flexi_logger::Logger::try_with_str("warn")?
        .format(log_format)
        .start()?;

    let result = run(&logger);

    logger.shutdown();

    result
}

/// The only option is `-c`/`--config <path>`, which sets where to find the config file
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<String>> {
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                config_path = Some(args.next().context("No config specified")?);
            }
            _ => anyhow::bail!("Unhandled argument {:?}", arg),
        }
    }

    Ok(config_path)
}

fn run(logger: &flexi_logger::LoggerHandle) -> Result<()> {
    let config = parse_args(std::env::args().skip(1))?
        .map(config::Config::from_file)
        .unwrap_or_default();

    logger.set_new_spec(
        flexi_logger::LogSpecification::parse(&config.log_level)
            .with_context(|| format!("Bad log level {:?}", config.log_level))?,
    );

    let table = SpriteTable::new(digit_pattern::DIGIT_GLYPHS, digit_pattern::DIGIT_NAMES)
        .context("Digit tables are inconsistent")?;

    log::debug!("{:?}", table);
    log::info!("Writing {} sprites", table.sprite_count());

    let stdout = std::io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    table
        .write_to(&mut stdout)
        .context("Failed to write sprites")?;

    Ok(())
}

/// Log lines look like `digit-sprites: WARN message`, and are written to stderr
fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use crossterm::style::{Attribute, Color, Stylize};
    use log::Level;

    let color = match record.level() {
        Level::Trace => Color::DarkGrey,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    };

    let mut level = record.level().as_str().with(color);

    if record.level() <= Level::Warn {
        level = level.attribute(Attribute::Bold);
    }

    write!(w, "{}: {} {}", env!("CARGO_PKG_NAME"), level, record.args())
}

//! tilenav: watch Dijkstra and A* explore a random tile map one step at a
//! time.

use std::io;

use clap::Parser;
use log::info;

use tilenav_demo::config::DemoConfig;
use tilenav_demo::logger;
use tilenav_demo::model::{Demo, Effect};
use tilenav_demo::term::Terminal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::parse();
    if let Some(path) = &config.log_file {
        logger::init(path)?;
    }
    info!("starting with {config:?}");

    let mut demo = Demo::new(&config);
    run(&mut demo)?;
    info!(
        "quit with {:?} search after {} steps",
        demo.finder().status(),
        demo.finder().steps()
    );
    log::logger().flush();
    Ok(())
}

fn run(demo: &mut Demo) -> io::Result<()> {
    let mut term = Terminal::init()?;
    term.flush(demo.draw())?;
    loop {
        for msg in term.poll()? {
            if demo.update(msg) == Some(Effect::Quit) {
                return Ok(());
            }
        }
        term.flush(demo.draw())?;
    }
}

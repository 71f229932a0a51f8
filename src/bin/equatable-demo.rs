use std::io;

use cuboid_eq::{demo, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let stdout = io::stdout();
    demo::run_equatable_demo(&mut stdout.lock())?;

    Ok(())
}

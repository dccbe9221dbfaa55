use std::io::{self, BufRead, Write};

use anyhow::Context;

mod command;
mod options;
mod session;
mod view;

use command::Command;
use options::{Options, USAGE};
use session::Session;

/// Runs a fixed number of generations from a random start.
fn run_batch(mut session: Session, generations: u64) -> anyhow::Result<()> {
    session.randomize();
    log::info!(
        "running {generations} generations on a {}x{} grid",
        session.engine().cols(),
        session.engine().rows()
    );
    session.step(generations);
    view::write_frame(&mut io::stdout().lock(), &session).context("write grid")
}

/// Reads one command per line; every line is one driver iteration:
/// apply the command, let a tick pass, draw if anything changed.
/// Stops on `q` or at the end of input.
fn drive(session: &mut Session, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("read command")?;
        let force_print = match Command::parse(&line) {
            Ok(command) => command.apply(session, out)?,
            Err(err) => {
                log::warn!("{err:#}");
                false
            }
        };
        if session.quit_requested() {
            return Ok(());
        }
        session.tick();
        if session.take_dirty() || force_print {
            view::write_frame(out, session).context("write grid")?;
        }
    }
    session.quit();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = options.config()?;
    let mut session =
        Session::new(&config, options.cell_size, options.seed).context("create session")?;
    log::info!("grid {}x{}, cell size {}px", config.cols, config.rows, options.cell_size);

    match options.generations {
        Some(generations) => run_batch(session, generations),
        None => drive(&mut session, io::stdin().lock(), &mut io::stdout().lock()),
    }
}

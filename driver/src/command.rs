use std::io::Write;

use anyhow::{bail, Context};

use crate::session::{PointerButton, Session};

pub const HELP: &str = "\
s          start/stop (pause) the game
r          randomize the grid
c          clear the grid
q          quit
n [k]      advance k generations now (default 1), even while paused
p          print the grid
d x y      press the left button at pixel (x, y): draw
e x y      press the right button at pixel (x, y): erase
m x y      move the pointer to pixel (x, y)
u          release the button
h          show this help
(empty)    let one tick pass";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Randomize,
    Clear,
    Quit,
    Step(u64),
    Print,
    Press { x: i64, y: i64, button: PointerButton },
    Move { x: i64, y: i64 },
    Release,
    Help,
    Idle,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Idle);
        };
        let command = match head {
            "s" => Command::TogglePause,
            "r" => Command::Randomize,
            "c" => Command::Clear,
            "q" => Command::Quit,
            "p" => Command::Print,
            "u" => Command::Release,
            "h" | "?" => Command::Help,
            "n" => match words.next() {
                Some(count) => Command::Step(
                    count
                        .parse()
                        .with_context(|| format!("bad generation count {count:?}"))?,
                ),
                None => Command::Step(1),
            },
            "d" | "e" | "m" => {
                let x = coordinate(words.next(), "x")?;
                let y = coordinate(words.next(), "y")?;
                match head {
                    "d" => Command::Press {
                        x,
                        y,
                        button: PointerButton::Left,
                    },
                    "e" => Command::Press {
                        x,
                        y,
                        button: PointerButton::Right,
                    },
                    _ => Command::Move { x, y },
                }
            }
            other => bail!("unknown command {other:?}, try h"),
        };
        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after {head:?}");
        }
        Ok(command)
    }

    /// Applies the command to the session. Returns `true` when the caller
    /// should print the grid regardless of changes.
    pub fn apply(self, session: &mut Session, out: &mut impl Write) -> anyhow::Result<bool> {
        match self {
            Command::TogglePause => session.toggle_pause(),
            Command::Randomize => session.randomize(),
            Command::Clear => session.clear(),
            Command::Quit => session.quit(),
            Command::Step(count) => session.step(count),
            Command::Press { x, y, button } => session.press(x, y, button)?,
            Command::Move { x, y } => session.drag(x, y)?,
            Command::Release => session.release(),
            Command::Print => return Ok(true),
            Command::Help => writeln!(out, "{HELP}").context("write help")?,
            Command::Idle => {}
        }
        Ok(false)
    }
}

fn coordinate(word: Option<&str>, axis: &str) -> anyhow::Result<i64> {
    let word = word.with_context(|| format!("missing {axis} coordinate"))?;
    word.parse()
        .with_context(|| format!("bad {axis} coordinate {word:?}"))
}

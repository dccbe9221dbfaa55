use anyhow::{bail, Context};
use life_engine::config::{DEFAULT_CELL_SIZE, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use life_engine::Config;

pub const USAGE: &str = "usage: life-driver [--width PX] [--height PX] [--cell-size PX] \
                         [--seed N] [--generations N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub seed: Option<u64>,
    /// Run this many generations from a random start and print the result
    /// instead of reading commands.
    pub generations: Option<u64>,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
            generations: None,
            help: false,
        }
    }
}

impl Options {
    /// Parses the arguments that follow the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| -> anyhow::Result<String> {
                args.next().with_context(|| format!("{flag} requires a value"))
            };
            match arg.as_str() {
                "--width" => options.width = parse_number(&value("--width")?, "--width")?,
                "--height" => options.height = parse_number(&value("--height")?, "--height")?,
                "--cell-size" => {
                    options.cell_size = parse_number(&value("--cell-size")?, "--cell-size")?
                }
                "--seed" => options.seed = Some(parse_number(&value("--seed")?, "--seed")?),
                "--generations" => {
                    let generations = parse_number(&value("--generations")?, "--generations")?;
                    options.generations = Some(generations)
                }
                "-h" | "--help" => options.help = true,
                other => bail!("unknown argument: {other}\n{USAGE}"),
            }
        }
        Ok(options)
    }

    pub fn config(&self) -> anyhow::Result<Config> {
        Config::from_screen(self.width, self.height, self.cell_size).with_context(|| {
            format!(
                "a {}x{} window with {}px cells holds no grid",
                self.width, self.height, self.cell_size
            )
        })
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, flag: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse()
        .with_context(|| format!("{flag} requires a non-negative integer, got {text:?}"))
}

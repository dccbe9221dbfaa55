use life_engine::{Config, ResetMode, SimulationEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Draw,
    Erase,
}

/// Everything the driver loop tracks around the engine: run/pause, the
/// pointer stroke in progress and a generation counter.
pub struct Session {
    engine: SimulationEngine,
    cell_size: usize,
    rng: StdRng,
    paused: bool,
    quit_requested: bool,
    generation: u64,
    stroke: Option<Stroke>,
    dirty: bool,
}

impl Session {
    pub fn new(config: &Config, cell_size: usize, seed: Option<u64>) -> life_engine::Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Session {
            engine: SimulationEngine::with_config(config)?,
            cell_size,
            rng,
            paused: false,
            quit_requested: false,
            generation: 0,
            stroke: None,
            dirty: true,
        })
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns whether the grid changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            log::info!("Game paused.");
        } else {
            log::info!("Game unpaused.");
        }
    }

    pub fn randomize(&mut self) {
        log::info!("Randomizing grid.");
        self.engine.reset_with(ResetMode::Random, &mut self.rng);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        log::info!("Clearing grid.");
        self.engine.reset(ResetMode::AllDead);
        self.dirty = true;
    }

    pub fn quit(&mut self) {
        log::info!("Exiting.");
        self.quit_requested = true;
    }

    /// Starts a stroke: the left button draws, the right one erases.
    pub fn press(
        &mut self,
        pixel_x: i64,
        pixel_y: i64,
        button: PointerButton,
    ) -> life_engine::Result<()> {
        self.stroke = Some(match button {
            PointerButton::Left => Stroke::Draw,
            PointerButton::Right => Stroke::Erase,
        });
        self.paint(pixel_x, pixel_y)
    }

    pub fn drag(&mut self, pixel_x: i64, pixel_y: i64) -> life_engine::Result<()> {
        self.paint(pixel_x, pixel_y)
    }

    pub fn release(&mut self) {
        self.stroke = None;
    }

    fn paint(&mut self, pixel_x: i64, pixel_y: i64) -> life_engine::Result<()> {
        let Some(stroke) = self.stroke else {
            return Ok(());
        };
        if !self.paused {
            log::debug!("ignoring edit at ({pixel_x}, {pixel_y}) while running");
            return Ok(());
        }
        let erase = stroke == Stroke::Erase;
        if self.engine.edit(pixel_x, pixel_y, self.cell_size, erase)? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Advances `count` generations regardless of the pause state.
    pub fn step(&mut self, count: u64) {
        for _ in 0..count {
            self.engine.advance();
            self.generation += 1;
        }
        if count > 0 {
            self.dirty = true;
        }
    }

    /// One driver iteration: advances a generation unless paused or quitting.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.quit_requested {
            return false;
        }
        self.step(1);
        true
    }
}

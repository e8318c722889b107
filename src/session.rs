use std::io;
use std::thread;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::config::Config;
use crate::cursor::Cursor;
use crate::events::EditCommand;
use crate::events::PauseCommand;
use crate::events::RunCommand;
use crate::grid::Grid;
use crate::input;
use crate::memorial;
use crate::render;
use crate::render::Renderer;
use crate::snapshot;
use crate::step;
use crate::terminal::Terminal;

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Building the starting pattern
    Editing,

    /// Stepping on a timer
    Running,

    /// Simulation halted, waiting for a key
    Paused,

    /// Everything died
    Ended,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user asked to quit
    Quit,

    /// No live cells were left after `generations` steps
    Extinct { generations: u64 },
}

/// One run of the simulator: the grid and everything that goes with it.
pub struct Session {
    /// The current generation
    grid: Grid,

    /// Second buffer the next generation is computed into
    back: Grid,

    cursor: Cursor,

    /// Number of the generation computed by the next step. Starts at 1 when the simulation does.
    generation: u64,

    mode: Mode,

    /// Seeded once, when the session is created
    rng: StdRng,

    config: Config,

    renderer: Renderer,
}

impl Session {
    pub fn new(grid: Grid, config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        debug!(seed, "Seeding random source");

        Self {
            back: grid.clone(),
            cursor: Cursor::new(&grid),
            renderer: Renderer::new(&grid),
            generation: 1,
            mode: Mode::Editing,
            rng: StdRng::seed_from_u64(seed),
            config,
            grid,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drive the session until the user quits or the population dies out.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<Exit> {
        self.show_editor(term)?;

        loop {
            let exit = match self.mode {
                Mode::Editing => match input::edit_command(term.read_key()?) {
                    Some(command) => self.edit(term, command)?,
                    None => None,
                },
                Mode::Running => self.tick(term)?,
                Mode::Paused => match input::pause_command(term.read_key()?) {
                    Some(command) => self.paused(term, command)?,
                    None => None,
                },
                Mode::Ended => Some(self.extinct()),
            };

            if let Some(exit) = exit {
                return Ok(exit);
            }
        }
    }

    /// Apply one editor command
    pub fn edit<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
        command: EditCommand,
    ) -> io::Result<Option<Exit>> {
        match command {
            EditCommand::Move(direction) => {
                self.cursor.shift(direction);
            }
            EditCommand::Toggle => {
                let (x, y) = self.cursor.position();
                self.grid.toggle(x, y);
                self.renderer.draw(term, &self.grid)?;
            }
            EditCommand::Randomize => {
                self.grid.randomize(self.config.density, &mut self.rng);
                self.renderer.draw(term, &self.grid)?;
            }
            EditCommand::Memorial => {
                memorial::paint(&mut self.grid);
                self.renderer.draw(term, &self.grid)?;
                self.renderer.caption(term, &self.grid)?;
            }
            EditCommand::Start => {
                self.start(term)?;
                return Ok(None);
            }
            EditCommand::Exit => return Ok(Some(Exit::Quit)),
        }

        self.renderer.place_cursor(term, &self.cursor)?;

        Ok(None)
    }

    /// One beat of the simulation: wait, handle at most one key, then step.
    pub fn tick<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<Option<Exit>> {
        if !step::live_check(&self.grid) {
            self.mode = Mode::Ended;
            return Ok(Some(self.extinct()));
        }

        thread::sleep(self.config.tick);

        if let Some(key_event) = term.poll_key()? {
            match input::run_command(key_event) {
                Some(RunCommand::Exit) => return Ok(Some(Exit::Quit)),
                Some(RunCommand::Pause) => {
                    self.pause(term)?;
                    return Ok(None);
                }
                None => {}
            }
        }

        self.advance();

        self.renderer.draw(term, &self.grid)?;
        self.renderer.generation(term, self.generation - 1)?;

        Ok(None)
    }

    /// Apply one command while paused
    pub fn paused<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
        command: PauseCommand,
    ) -> io::Result<Option<Exit>> {
        match command {
            PauseCommand::Dump => {
                let path = &self.config.dump_path;

                match snapshot::dump(&self.grid, path) {
                    Ok(()) => {
                        let text = format!("Dumped generation to {}", path.display());
                        self.renderer.status(term, &text)?;
                    }
                    Err(err) => {
                        error!("{err}");
                        self.renderer.status(term, &err.to_string())?;
                    }
                }
            }
            PauseCommand::Resume => {
                debug!(generation = self.generation, "Resuming simulation");

                self.mode = Mode::Running;
                self.renderer.generation(term, self.generation - 1)?;
            }
            PauseCommand::Exit => return Ok(Some(Exit::Quit)),
        }

        Ok(None)
    }

    /// Replace the grid with its next generation
    fn advance(&mut self) {
        step::step_into(&self.grid, &mut self.back);
        std::mem::swap(&mut self.grid, &mut self.back);

        self.generation += 1;
    }

    fn show_editor<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<()> {
        term.clear()?;
        self.renderer.draw(term, &self.grid)?;
        self.renderer.status(term, render::EDIT_HELP)?;
        self.renderer.place_cursor(term, &self.cursor)
    }

    fn start<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<()> {
        info!(population = self.grid.population(), "Starting simulation");

        self.mode = Mode::Running;
        self.generation = 1;

        term.clear()?;
        self.renderer.draw(term, &self.grid)?;
        self.renderer.generation(term, 0)
    }

    fn pause<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<()> {
        debug!(generation = self.generation, "Pausing simulation");

        self.mode = Mode::Paused;
        self.renderer.status(term, render::PAUSE_HELP)
    }

    fn extinct(&self) -> Exit {
        let generations = self.generation - 1;
        info!(generations, "Population died out");

        Exit::Extinct { generations }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

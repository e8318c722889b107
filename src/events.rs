use crate::cursor::Direction;

/// Commands understood while the user is building the starting pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Move(Direction),

    /// Flip the cell under the cursor
    Toggle,

    /// Fill the grid with random cells
    Randomize,

    /// Paint the memorial figure
    Memorial,

    /// Start the simulation
    Start,

    Exit,
}

/// Commands polled between generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCommand {
    Pause,
    Exit,
}

/// Commands understood while the simulation is paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCommand {
    /// Write the grid to the snapshot file
    Dump,
    Resume,
    Exit,
}

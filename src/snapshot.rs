use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::grid::Grid;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Unable to create dump file {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Unable to write dump file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Write `grid` as text: one line per row, `*` for live cells and a space for dead ones. Every
/// line, including the last, ends in a newline.
pub fn write_snapshot<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width() + 1);

    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|c| c.glyph()));
        line.push('\n');

        out.write_all(line.as_bytes())?;
    }

    Ok(())
}

/// Dump `grid` to the file at `path`, replacing whatever was there.
pub fn dump(grid: &Grid, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path).map_err(|source| SnapshotError::Create {
        path: path.to_owned(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    write_snapshot(grid, &mut out)
        .and_then(|_| out.flush())
        .map_err(|source| SnapshotError::Write {
            path: path.to_owned(),
            source,
        })?;

    info!(path = %path.display(), population = grid.population(), "Wrote snapshot");

    Ok(())
}

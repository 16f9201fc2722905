//! Reading graphs and writing annotated output

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use pathmark_core::dot;
use pathmark_core::error::{PathmarkError, Result};
use pathmark_core::graph::Graph;
use pathmark_core::trace_time;

const STDIN_MARKER: &str = "-";

/// Load a DOT graph from a file, or from stdin when `input` is `-`
pub fn read_graph(input: &Path) -> Result<Graph> {
    let start = Instant::now();
    let text = if input.as_os_str() == STDIN_MARKER {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)
            .map_err(|e| PathmarkError::io_operation("read", input.display(), e))?
    };

    let graph = dot::parse(&text)?;
    trace_time!(start, "read_graph", vertices = graph.vertex_count());
    Ok(graph)
}

/// Serialize the graph and write it to `output`, or stdout when `None`.
///
/// Files are written to a sibling `.tmp` file and renamed into place, so a
/// failed run never leaves a truncated graph at `output`.
pub fn write_graph(graph: &Graph, output: Option<&Path>) -> Result<()> {
    let text = dot::to_string(graph)?;
    match output {
        Some(path) => write_atomically(path, &text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("graph"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomically(path: &Path, text: &str) -> Result<()> {
    let temp_file = temp_path(path);
    let written = File::create(&temp_file).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        drop(writer);
        fs::rename(&temp_file, path)
    });

    written.map_err(|e| {
        let _ = fs::remove_file(&temp_file);
        PathmarkError::io_operation("write", path.display(), e)
    })
}

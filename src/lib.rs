//! Interpreter for a small plotting language: `ORIGIN IS`, `SCALE IS`, `ROT IS`,
//! assignments, and `FOR ... DRAW (x, y)` loops whose points are rendered to a PNG.

pub mod constants;
pub mod interpreter;
pub mod picture;
pub mod render;

pub use interpreter::{execute, parse, run_script, Environment, PointSink, ScriptError};
pub use render::{PlotConfig, Plotter};

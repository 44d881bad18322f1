//! Domain types for the conversion engine.

mod equation;
mod state;

pub use equation::EquationBuffer;
pub use state::State;

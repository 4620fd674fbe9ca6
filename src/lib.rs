// SecureMessage: heuristic message risk scoring.
//
// This is the library root. The scorer lives in `scoring`; everything else
// is the surface around it (batch runs, config, terminal output).

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;

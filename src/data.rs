//! JSON documents read and written by the command line tool

mod case;
mod report;

pub use case::Case;
pub use report::Report;

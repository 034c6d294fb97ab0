//! jj output parser
//!
//! Parses the output from jj commands into structured data.

mod log;


/// Parser for jj command output
pub struct Parser;

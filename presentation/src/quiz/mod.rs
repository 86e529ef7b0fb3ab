//! Interactive quiz front end

pub mod runner;

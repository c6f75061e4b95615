//! Parrot binary support: command-line parsing and mode runners.

pub mod cli;
pub mod run;

extern crate clap;
extern crate fstree;

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod sample;
pub mod session;
pub mod utils;

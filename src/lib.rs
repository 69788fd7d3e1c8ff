pub(crate) mod common;

pub mod spec;

pub mod compiler;

pub mod cli;

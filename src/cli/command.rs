use crate::compiler;
use anyhow::Context;
use log::info;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

/// Appended to the input name (extension and all) when no output is given.
pub const DEFAULT_BINARY_SUFFIX: &str = ".bin";

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

#[derive(StructOpt, Debug)]
#[structopt(name = "binc")]
pub struct CommandCompile {
    #[structopt(name = "in.bs", parse(from_os_str))]
    in_src: PathBuf,

    #[structopt(name = "out.bin", parse(from_os_str))]
    out_bin: Option<PathBuf>,
}

pub fn compile_path(path: &Path) -> Result<Vec<u8>, anyhow::Error> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("could not read source file '{}'", path.display()))?;

    Ok(compiler::compile(&source)?)
}

pub fn default_out_name(in_src: &Path) -> PathBuf {
    let mut name = in_src.as_os_str().to_owned();
    name.push(DEFAULT_BINARY_SUFFIX);
    PathBuf::from(name)
}

pub fn compile(cmd: CommandCompile) -> Result<(), anyhow::Error> {
    // The output file is only touched once the whole compile has succeeded.
    let bin = compile_path(&cmd.in_src)?;

    let out_bin = match cmd.out_bin {
        Some(out_bin) => out_bin,
        None => default_out_name(&cmd.in_src),
    };

    info!("writing {} bytes to '{}'", bin.len(), out_bin.display());
    std::fs::write(&out_bin, bin)
        .with_context(|| format!("could not write binary '{}'", out_bin.display()))?;

    println!("{}", out_bin.display());

    Ok(())
}

pub mod phases;

pub use phases::types::Error;

/// Compiles directive/literal source text into its flat binary image: a single
/// scan pass produces the literals in input order, then each one is packed and
/// the results concatenated with nothing in between.
pub fn compile(source: &str) -> Result<Vec<u8>, Error> {
    let values = phases::scan(source)?;
    let bin = phases::encode_all(values)?;

    Ok(bin)
}

//! Shell completion and man page generation

use crate::Result;
use clap_complete::{generate, Generator};

/// Generate shell completions
pub fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut std::io::stdout());
}

/// Generate man page
pub fn generate_man_page(cmd: clap::Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    print!("{}", String::from_utf8(buffer)?);
    Ok(())
}

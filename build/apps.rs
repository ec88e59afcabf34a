// This file exists solely to let the build script include cli.rs.
// The real module pulls in the whole scanner, which cannot be
// transitively imported here.

use std::error::Error;

pub fn all_entries() -> Result<Vec<(String, String)>, Box<dyn Error>> {
    Ok(vec![])
}

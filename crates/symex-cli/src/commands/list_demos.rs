use crate::demos::DEMO_NAMES;
use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    for name in DEMO_NAMES {
        println!("{name}");
    }
    Ok(())
}

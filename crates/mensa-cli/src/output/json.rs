use mensa_core::error::MensaError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), MensaError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

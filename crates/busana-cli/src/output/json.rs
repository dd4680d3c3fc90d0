use busana_core::error::BusanaError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), BusanaError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

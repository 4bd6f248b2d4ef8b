mod tables;

use opforge::error::OpResult;
use serde::Serialize;

pub use self::tables::{
    breakdown as print_breakdown, casual as print_casual, divisions as print_divisions,
    metrics as print_metrics, roster as print_roster,
};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> OpResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

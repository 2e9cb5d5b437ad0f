pub use pagesift_core::format::OutputFormat;

/// Print a serializable value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> pagesift_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

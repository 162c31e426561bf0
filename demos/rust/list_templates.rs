/// Prints the theme catalog as JSON, the shape a template picker
/// endpoint would serve.
///
/// Run with:
///   cargo run --example list_templates -p faktur-demos
use faktur_core::available_templates;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(available_templates())?;
    println!("{}", json);
    Ok(())
}

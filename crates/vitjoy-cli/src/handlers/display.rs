use anyhow::Result;
use vitjoy_runtime::DisplayStore;
use vitjoy_types::{DisplayOptions, DisplayPatch};

use crate::args::OutputFormat;

pub fn show(store: &DisplayStore, format: OutputFormat) -> Result<()> {
    print_options(&store.options(), format)
}

pub fn set(store: &mut DisplayStore, patch: &DisplayPatch, format: OutputFormat) -> Result<()> {
    if patch.is_empty() {
        eprintln!("Warning: no fields given; nothing to update");
    }
    let options = store.update(patch);
    print_options(&options, format)
}

pub fn reset(store: &mut DisplayStore, format: OutputFormat) -> Result<()> {
    let options = store.reset();
    print_options(&options, format)
}

fn print_options(options: &DisplayOptions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(options)?);
        }
        OutputFormat::Plain => {
            // Reuse the wire spellings so plain output matches what is stored.
            let value = serde_json::to_value(options)?;
            if let Some(object) = value.as_object() {
                for (key, val) in object {
                    let shown = match val {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    println!("{:<16} {}", key, shown);
                }
            }
        }
    }
    Ok(())
}

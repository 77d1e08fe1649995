use fg2gen::controls;
use fg2gen::emit::{render, AccessorKind};
use fg2gen::{CodegenError, GenConfig};
use std::env;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fg2gen::init_logging();

    let mut config = GenConfig::load_or_default();
    let mut json = false;

    let args: Vec<String> = env::args().collect();
    for arg in &args[1..] {
        match arg.as_str() {
            "--impls" => config.output.emit_implementations = true,
            "--json" => json = true,
            _ => {
                eprintln!("Usage: controlgen [--impls] [--json]");
                std::process::exit(1);
            }
        }
    }

    config.validate().map_err(CodegenError::ConfigError)?;

    let entries = controls::all();

    if json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    log::info!("Generating accessors for {} controls", entries.len());

    let (first, second) = if config.output.emit_implementations {
        (AccessorKind::GetterImpl, AccessorKind::SetterImpl)
    } else {
        (AccessorKind::GetterProto, AccessorKind::SetterProto)
    };
    let separator = format!("//{}", "-".repeat(config.output.separator_width as usize));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in &entries {
        writeln!(out, "{}", render(first, entry))?;
        writeln!(out, "{}", render(second, entry))?;
        writeln!(out, "{}\n", separator)?;
    }

    Ok(())
}

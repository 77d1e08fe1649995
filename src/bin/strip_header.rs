use fg2gen::strip::strip_header;
use std::env;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fg2gen::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: strip-header <header_path>");
        std::process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    strip_header(&args[1], &mut out)?;

    Ok(())
}

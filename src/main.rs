// main.rs
//
// Reads an SVG document, resolves two selected circles, and prints the
// document back out with the requested tangent lines appended.

use std::{env, fs, process::ExitCode};

use bitangent::io::svg::{circles_from_svg, write_tangents};
use bitangent::{TangentMode, tangent_segments};

const USAGE: &str = "usage: bitangent [--position inner|outer] FILE [ID ID]";

fn main() -> ExitCode {
    match run() {
        Ok(document) => {
            println!("{document}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("bitangent: {error}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<String, Box<dyn std::error::Error>> {
    let mut mode = TangentMode::default();
    let mut free: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--position" => {
                let value = args.next().ok_or("missing value for --position")?;
                mode = TangentMode::from_flag(&value);
            },
            _ => free.push(arg),
        }
    }

    let path = free.first().ok_or(USAGE)?;
    let content = fs::read_to_string(path)?;

    let (c1, c2) = circles_from_svg(&content, &free[1..])?;
    let segments = tangent_segments(&c1, &c2, mode)?;
    Ok(write_tangents(&content, &segments)?)
}

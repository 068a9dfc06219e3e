use clap::{Parser, ValueEnum};
use qr_encode::render::{raster, svg};
use qr_encode::{BitMatrix, encode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Encode text into a QR symbol")]
struct Cli {
    /// Text to encode (truncated to 78 characters)
    text: String,

    /// Output file; prints ASCII art to stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Pixels per module
    #[arg(long, default_value_t = 8)]
    module_size: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Png,
    Ascii,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let matrix = encode(&cli.text);

    let format = cli.format.unwrap_or_else(|| infer_format(&cli.output));
    match format {
        Format::Ascii => {
            print_ascii(&matrix);
            ExitCode::SUCCESS
        }
        Format::Svg => {
            let doc = svg::to_svg(&matrix, cli.module_size as usize);
            match cli.output {
                Some(path) => write_file(&path, doc.as_bytes()),
                None => {
                    println!("{doc}");
                    ExitCode::SUCCESS
                }
            }
        }
        Format::Png => {
            let Some(path) = cli.output else {
                eprintln!("PNG output requires --output");
                return ExitCode::FAILURE;
            };
            let img = raster::to_image(&matrix, cli.module_size);
            match img.save(&path) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Failed to write {}: {}", path.display(), err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn infer_format(output: &Option<PathBuf>) -> Format {
    match output {
        None => Format::Ascii,
        Some(path) => match path.extension().and_then(|e| e.to_str()) {
            Some("png") => Format::Png,
            _ => Format::Svg,
        },
    }
}

fn write_file(path: &PathBuf, bytes: &[u8]) -> ExitCode {
    match std::fs::write(path, bytes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to write {}: {}", path.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn print_ascii(matrix: &BitMatrix) {
    // Two characters per module keeps the aspect ratio roughly square
    for y in 0..matrix.size() {
        let mut line = String::with_capacity(matrix.size() * 2);
        for x in 0..matrix.size() {
            line.push_str(if matrix.get(x, y) { "##" } else { "  " });
        }
        println!("{line}");
    }
}

use std::path::PathBuf;
use std::process;

use clap::Parser;

use mrzscan::models::MrzFields;
use mrzscan::utils::MrzScanError;
use mrzscan::{MrzParserConfig, MrzScanner};

/// Extract identity fields from the machine-readable zone of a photographed
/// travel or identity document.
#[derive(Parser)]
#[command(name = "mrzscan", version, about)]
struct Args {
    /// Document image to scan (or raw OCR text with --from-text)
    input: PathBuf,

    /// Treat the input file as raw OCR text instead of an image
    #[arg(long)]
    from_text: bool,

    /// Print the parsed fields as JSON
    #[arg(long)]
    json: bool,

    /// Read the name from the identified name line instead of the third MRZ line
    #[arg(long)]
    use_name_line: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let scanner = MrzScanner::with_config(MrzParserConfig {
        name_from_name_line: args.use_name_line,
    });

    let result = if args.from_text {
        std::fs::read_to_string(&args.input)
            .map_err(|e| MrzScanError::IoError(e.to_string()))
            .and_then(|text| scanner.parse_text(&text))
    } else {
        scanner.scan(&args.input)
    };

    match result {
        Ok(fields) => {
            if args.json {
                match serde_json::to_string_pretty(&fields) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&format!("Failed to encode result: {}", e)),
                }
            } else {
                print_report(&fields);
            }
        }
        Err(e) => fail(&e.to_string()),
    }
}

fn print_report(fields: &MrzFields) {
    println!("\nMRZ SCAN RESULT");
    println!("---------------");
    println!("  Last Name:     {}", field_or_dash(&fields.lastname));
    println!("  First Name:    {}", field_or_dash(&fields.firstname));
    println!("  Date of Birth: {}", field_or_dash(&fields.date_of_birth));
    println!("  Gender:        {}", field_or_dash(&fields.gender));
    println!("  Expiry Date:   {}", field_or_dash(&fields.expiry_date));
    println!("  Personal No.:  {}", field_or_dash(&fields.cin));

    if fields.is_empty() {
        println!("\nNo fields could be decoded from this document.");
    }
}

fn field_or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

//! # OpenAPI Specification Generator
//!
//! Writes the OpenAPI document of the cats API to a file without starting the
//! server.
//!
//! ## Usage
//!
//! ```bash
//! # Writes ./openapi.json unless a path is given
//! cargo generate_openapi
//! cargo generate_openapi docs/openapi.json
//! ```
use std::env;
use std::fs;
use std::path::Path;

use cats_api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let output_path = args.get(1).map(|s| s.as_str()).unwrap_or("openapi.json");

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("Generating OpenAPI specification to {}", output_path);

    let json = ApiDoc::openapi().to_pretty_json()?;
    fs::write(output_path, json)?;

    println!("OpenAPI specification successfully generated!");

    Ok(())
}

use serde_json::json;

use crate::config;
use crate::output;

pub fn run(endpoint: &str, json_output: bool) -> i32 {
    match config::init_config(endpoint) {
        Ok(path) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "path": path.to_string_lossy(),
                        "endpoint": endpoint
                    })))
                    .unwrap()
                );
            } else {
                println!("Configured taskdash at {}", path.display());
                println!("Endpoint: {endpoint}");
            }
            0
        }
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

use std::path::Path;

use stager::stage;

/// Everything a release folder ships besides the binary itself. Paths are
/// relative to the workspace root; entries that do not exist are skipped.
const MANIFEST: &[&str] = &[
    "config.toml",
    "README.md",
    "LICENSE",
    "assets/icon.png",
    "saves/.keep",
];

const OUT_DIR: &str = "dist";

fn main() {
    match stage(MANIFEST, Path::new("."), Path::new(OUT_DIR)) {
        Ok(report) => {
            println!(
                "Staged {} file(s) to {}/ ({} missing, skipped).",
                report.copied, OUT_DIR, report.skipped
            );
        }
        Err(e) => {
            eprintln!("[stager][error] {:#}", e);
            std::process::exit(1);
        }
    }
}

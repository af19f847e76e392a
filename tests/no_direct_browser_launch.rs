// tests/no_direct_browser_launch.rs
// Fails if runtime code launches the OS browser anywhere but the navigation module.
// Everything else must go through DetailNavigatorHandle so clicks stay testable.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/predictions/navigation.rs") || p.contains("\\predictions\\navigation.rs")
}

#[test]
fn browser_launch_confined_to_navigation_module() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);
    assert!(!files.is_empty(), "no sources found under {}", src_dir.display());

    let bad_patterns = [
        "open::that(",
        "open::that_detached(",
        "open::with(",
        "open::that_in_background(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        if is_whitelisted(&file) { continue; }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for pat in &bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Direct browser launches found outside the navigation module:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!("  {} contains pattern '{}': route through DetailNavigatorHandle instead\n", file, pat));
        }
        panic!("{}", msg);
    }
}

#[test]
fn navigation_module_does_launch_browser() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/predictions/navigation.rs");
    let content = fs::read_to_string(&path).expect("navigation module present");
    assert!(content.contains("open::that("));
}

//! CLI tool for colormapping - resolves node names against a color asset directory
//!
//! Usage:
//!   colormapping_cli <assets-dir> default:stone wool:dark_green
//!   colormapping_cli <assets-dir> unifiedbricks:brickblock_multicolor_dark:12
//!   colormapping_cli <assets-dir> --json                 # Dump the color table
//!   colormapping_cli <assets-dir> --options opts.json default:stone
//!
//! A trailing `:<number>` on a name is taken as `param2`. Set `RUST_LOG=debug`
//! for load and memoization logs.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use colormapping::{ColorMapping, DirSource, ResolverOptions};

const USAGE: &str = "Usage: colormapping_cli <assets-dir> [--json] [--options file.json] [name[:param2]]...";

/// Split `name:param2`. Node names contain one `:` themselves, so only a
/// numeric last segment after a second `:` counts.
fn split_param2(arg: &str) -> (&str, i32) {
    if let Some((name, tail)) = arg.rsplit_once(':') {
        if name.contains(':') {
            if let Ok(param2) = tail.parse() {
                return (name, param2);
            }
        }
    }
    (arg, 0)
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        fail(USAGE);
    }

    let assets_dir = &args[1];
    let mut dump_json = false;
    let mut options = ResolverOptions::default();
    let mut names = Vec::new();

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--json" => dump_json = true,
            "--options" => {
                let path = rest.next().unwrap_or_else(|| fail(USAGE));
                let json = fs::read_to_string(path)
                    .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
                options = ResolverOptions::from_json(&json)
                    .unwrap_or_else(|e| fail(&format!("Error parsing {path}: {e}")));
            }
            _ => names.push(arg.as_str()),
        }
    }

    // Bad bundled data means no usable resolver
    let source = DirSource::new(assets_dir);
    let mapping = match ColorMapping::from_assets(&source) {
        Ok(m) => m.with_options(options),
        Err(e) => fail(&format!("Error loading palette from {assets_dir}: {e}")),
    };

    if let Err(e) = mapping.load_defaults(&source) {
        fail(&format!("Error loading color tables: {e}"));
    }

    let mut out = io::stdout().lock();
    for arg in names {
        let (name, param2) = split_param2(arg);
        match mapping.resolve(name, param2) {
            Some(c) => writeln!(out, "{name} {}", c.to_hex()).unwrap(),
            None => writeln!(out, "{name} -").unwrap(),
        }
    }

    if dump_json {
        let snapshot: std::collections::BTreeMap<_, _> = mapping.snapshot().into_iter().collect();
        let json = match serde_json::to_string_pretty(&snapshot) {
            Ok(j) => j,
            Err(e) => fail(&format!("Error serializing JSON: {e}")),
        };
        out.write_all(json.as_bytes()).unwrap();
        writeln!(out).unwrap();
    }
}

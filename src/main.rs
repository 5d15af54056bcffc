use std::env;
use std::path::PathBuf;
use std::process;

use fretboard::catalog::{seed, ShapeDocument, ShapeEditor, ShapeLibrary, ShapeStore};
use fretboard::config::{Config, DEFAULT_CONFIG_FILE};
use fretboard::guitar::{BaseString, ChordShape, STRING_COUNT};
use fretboard::theory::tables::{ELEVENTH, NINTH, THIRTEENTH};
use fretboard::{
    compute_chord, compute_scale, harmonic_field_text, render_chord_variation,
    render_chromatic_line, scale_positions_text, FretboardError,
};

const USAGE: &str = "Usage: fretboard [--config <file>] <command>

Commands:
  scale [root] [pattern]              Notes and intervals of a scale
  chord <root> <type> [ext...]        Chord with extensions (9, 11, 13 or semitones)
  field [root] [major|minor] [--diagrams]
                                      Harmonic field, optionally with scale lines
                                      and every diagram of each degree
  diagram <root> <type> [variation]   Chord diagram, variation wraps (-1 = last)
  positions [root] [pattern]          The five CAGED scale positions
  catalog list                        Stored chord types
  catalog show <type>                 Shape document as JSON
  catalog seed                        Write the built-in shapes to catalog-dir
  catalog add <type> <base> <frets>   Append a shape (6 frets, -1 = muted)
  catalog remove <type> <n>           Remove shape number n";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if pos + 1 >= args.len() {
            usage();
        }
        config_path = PathBuf::from(args.remove(pos + 1));
        args.remove(pos);
    }

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading config '{}': {}", config_path.display(), e);
            process::exit(1);
        }
    };

    let filter = config.log_filter.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .init();

    if args.is_empty() {
        usage();
    }

    match run(&config, &args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(config: &Config, args: &[String]) -> Result<String, FretboardError> {
    let rest = &args[1..];
    match args[0].as_str() {
        "scale" => {
            let (root, pattern) = root_and_pattern(config, rest);
            let scale = compute_scale(&root, &pattern);
            let mut out = format!("{} {}\n", scale.root, scale.pattern);
            out.push_str(&format!("Notes: {}\n", scale.notes.join(" ")));
            let names: Vec<&str> = scale.intervals.iter().map(|i| i.short_name).collect();
            out.push_str(&format!("Intervals: {}\n", names.join(" ")));
            out.push_str(&render_chromatic_line(&scale.root, &scale.intervals));
            Ok(out)
        }
        "chord" => {
            let (Some(root), Some(chord_type)) = (rest.first(), rest.get(1)) else {
                usage();
            };
            let extensions = rest[2..]
                .iter()
                .map(|e| parse_extension(e))
                .collect::<Option<Vec<u8>>>()
                .unwrap_or_else(|| usage());
            let chord = compute_chord(root, chord_type, &extensions)?;
            let mut out = format!("{}\n{}\n", chord.symbol, chord.detailed_name);
            out.push_str(&format!("Notes: {}\n", chord.notes.join(" ")));
            out.push_str(&render_chromatic_line(&chord.root, &chord.intervals));
            Ok(out)
        }
        "field" => {
            let diagrams = rest.iter().any(|a| a == "--diagrams");
            let rest: Vec<&String> = rest.iter().filter(|a| *a != "--diagrams").collect();
            let root = rest.first().map(|r| r.to_string()).unwrap_or_else(|| config.default_root.clone());
            let mode = rest.get(1).map(|m| m.as_str()).unwrap_or("major");
            let mut library = config.shape_library();
            harmonic_field_text(&mut library, &root, mode, diagrams)
        }
        "diagram" => {
            let (Some(root), Some(chord_type)) = (rest.first(), rest.get(1)) else {
                usage();
            };
            let index = match rest.get(2) {
                Some(v) => v.parse::<i64>().unwrap_or_else(|_| usage()),
                None => 0,
            };
            let mut library = config.shape_library();
            match library.variation(root, chord_type, index) {
                Some(variation) => Ok(render_chord_variation(&variation)),
                None => Ok(String::new()),
            }
        }
        "positions" => {
            let (root, pattern) = root_and_pattern(config, rest);
            Ok(scale_positions_text(&root, &pattern))
        }
        "catalog" => run_catalog(config, rest),
        _ => usage(),
    }
}

fn run_catalog(config: &Config, args: &[String]) -> Result<String, FretboardError> {
    let Some(command) = args.first() else {
        usage();
    };
    let mut library = config.shape_library();

    match command.as_str() {
        "list" => {
            let mut out = String::new();
            for entry in library.entries()? {
                out.push_str(&format!(
                    "{:<12}{} ({} shapes)\n",
                    entry.id,
                    entry.document.name,
                    entry.document.shapes.len()
                ));
            }
            Ok(out)
        }
        "show" => {
            let Some(chord_type) = args.get(1) else {
                usage();
            };
            let document = match library.document(chord_type) {
                Some(document) => document,
                None => {
                    let editor = ShapeEditor::open(&mut library, chord_type);
                    ShapeDocument::new(editor.name(), editor.shapes().to_vec())
                }
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
        }
        "seed" => {
            require_catalog_dir(config)?;
            let written = seed(library.store_mut())?;
            Ok(format!("Seeded {} chord types\n", written))
        }
        "add" => {
            require_catalog_dir(config)?;
            let (Some(chord_type), Some(shape)) = (args.get(1), args.get(2..).and_then(parse_shape)) else {
                usage();
            };
            edit(&mut library, chord_type, |editor| {
                let index = editor.add_shape();
                editor.replace(index, shape)
            })
        }
        "remove" => {
            require_catalog_dir(config)?;
            let number = args.get(2).and_then(|n| n.parse::<usize>().ok()).filter(|&n| n > 0);
            let (Some(chord_type), Some(number)) = (args.get(1), number) else {
                usage();
            };
            edit(&mut library, chord_type, |editor| editor.remove(number - 1).map(|_| ()))
        }
        _ => usage(),
    }
}

fn edit<S: ShapeStore>(
    library: &mut ShapeLibrary<S>,
    chord_type: &str,
    change: impl FnOnce(&mut ShapeEditor) -> Result<(), FretboardError>,
) -> Result<String, FretboardError> {
    let mut editor = ShapeEditor::open(library, chord_type);
    change(&mut editor)?;
    editor.commit(library)?;
    Ok(format!("{} now has {} shapes\n", chord_type, editor.shapes().len()))
}

fn require_catalog_dir(config: &Config) -> Result<(), FretboardError> {
    if config.catalog_dir.is_none() {
        return Err(FretboardError::Config("catalog-dir is not set".to_string()));
    }
    Ok(())
}

fn root_and_pattern(config: &Config, args: &[String]) -> (String, String) {
    let root = args.first().cloned().unwrap_or_else(|| config.default_root.clone());
    let pattern = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        config.default_scale.clone()
    };
    (root, pattern)
}

/// `9`, `11` and `13` name the tiers; any other number is taken as semitones.
fn parse_extension(token: &str) -> Option<u8> {
    match token {
        "9" => Some(NINTH),
        "11" => Some(ELEVENTH),
        "13" => Some(THIRTEENTH),
        other => other.parse().ok(),
    }
}

fn parse_shape(args: &[String]) -> Option<ChordShape> {
    if args.len() != STRING_COUNT + 1 {
        return None;
    }
    let base = BaseString::try_from(args[0].parse::<u8>().ok()?).ok()?;
    let mut frets = [0i8; STRING_COUNT];
    for (slot, value) in frets.iter_mut().zip(&args[1..]) {
        *slot = value.parse().ok()?;
    }
    Some(ChordShape::new(base, frets))
}

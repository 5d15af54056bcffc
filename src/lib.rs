pub mod api;
pub mod catalog;
pub mod chromatic;
pub mod config;
pub mod error;
pub mod guitar;
pub mod render;
pub mod theory;

pub use api::*;
pub use error::*;
pub use render::{
    render_chord_diagram, render_chord_variation, render_chromatic_line, render_scale_line,
    render_scale_position,
};

/// Render every CAGED position of a scale as one block of tablature.
/// Returns an empty string when the root is unknown.
pub fn scale_positions_text(root: &str, pattern: &str) -> String {
    compute_scale_positions_for_pattern(root, pattern)
        .iter()
        .map(render_scale_position)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The harmonic field of `root` in `mode`, one line per degree.
///
/// With `diagrams` set, each degree is followed by its parent scale line and
/// every diagram `library` holds for the degree's chord type.
///
/// # Errors
/// [`FretboardError::UnknownScaleMode`] when `mode` is not `major` or `minor`.
pub fn harmonic_field_text<S: catalog::ShapeStore>(
    library: &mut catalog::ShapeLibrary<S>,
    root: &str,
    mode: &str,
    diagrams: bool,
) -> Result<String, FretboardError> {
    let field = compute_harmonic_field(root, mode)?;
    let mut out = String::new();
    for (i, degree) in field.iter().enumerate() {
        if diagrams && i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<5}{:<10}{}\n",
            degree.degree,
            degree.chord.symbol,
            degree.chord.notes.join(" ")
        ));
        if !diagrams {
            continue;
        }
        if let Some(mode) = theory::HarmonicMode::from_key(mode) {
            out.push_str(&render_scale_line(root, mode, &degree.chord));
        }
        let chord_type = theory::chord_type_from_symbol(&degree.chord.symbol);
        for diagram in library.diagrams(&degree.chord.root, chord_type.key()) {
            out.push_str(&render_chord_diagram(&diagram));
        }
    }
    Ok(out)
}

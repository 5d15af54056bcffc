use super::*;
use crate::chromatic::Note;
use crate::theory::{generate_scale, tables::SCALE_PATTERNS};

fn all_shapes() -> Vec<&'static ChordShape> {
    builtin_entries()
        .into_iter()
        .flat_map(|entry| entry.shapes.iter())
        .collect()
}

#[test]
fn test_diagram_keeps_open_and_muted_strings() {
    for shape in all_shapes() {
        for root in Note::ALL {
            let diagram = chord_diagram(root.symbol(), shape);
            for string in 0..STRING_COUNT {
                let absolute = diagram.absolute_frets[string];
                let display = diagram.display_frets[string];
                assert_eq!(absolute.is_muted(), shape.frets[string].is_muted());
                match absolute {
                    Fret::Fretted(_) => assert!(matches!(display, Fret::Fretted(n) if n >= 1)),
                    other => assert_eq!(display, other),
                }
                if diagram.start_fret == 1 {
                    assert_eq!(display, absolute);
                }
            }
        }
    }
}

#[test]
fn test_diagram_at_reference_root_is_identity() {
    for shape in all_shapes() {
        let diagram = chord_diagram(shape.reference_root().symbol(), shape);
        assert_eq!(diagram.shift, 0);
        assert_eq!(diagram.absolute_frets, shape.frets, "{:?}", shape.name);
    }
}

#[test]
fn test_diagram_base_string_sounds_root() {
    for shape in all_shapes() {
        let base = shape.base_string.string_index();
        for root in Note::ALL {
            let diagram = chord_diagram(root.symbol(), shape);
            let fret = diagram.absolute_frets[base].number().unwrap();
            assert_eq!(note_at_fret(base, fret), Some(root), "{:?} at {}", shape.name, root);
        }
    }
}

#[test]
fn test_diagram_window_examples() {
    let major = builtin_shapes_or_major("major");

    // A form at C: frets 3-5 still fit under the nut view
    let a_form_c = chord_diagram("C", &major[1]);
    assert_eq!(a_form_c.shift, 3);
    assert_eq!(a_form_c.start_fret, 1);
    assert_eq!(
        a_form_c.absolute_frets.map(i8::from),
        [-1, 3, 5, 5, 5, 3]
    );

    // E form at A reaches fret 7, so the window starts at the barre
    let e_form_a = chord_diagram("A", &major[3]);
    assert_eq!(e_form_a.start_fret, 5);
    assert_eq!(e_form_a.absolute_frets.map(i8::from), [5, 7, 7, 6, 5, 5]);
    assert_eq!(e_form_a.display_frets.map(i8::from), [1, 3, 3, 2, 1, 1]);
    assert_eq!(e_form_a.fingers, major[3].fingers);
}

#[test]
fn test_diagram_unknown_root_is_untransposed() {
    let c_form = &builtin_shapes_or_major("major")[0];
    let diagram = chord_diagram("H", c_form);
    assert_eq!(diagram.shift, 0);
    assert_eq!(diagram.absolute_frets, c_form.frets);
    assert_eq!(diagram.root, "H");
}

#[test]
fn test_unknown_chord_type_draws_major_shapes() {
    let shapes = builtin_shapes_or_major("sus2");
    let variation = chord_variation("D", shapes, 0).unwrap();
    assert_eq!(variation.total, 5);
    assert_eq!(variation.diagram.label.as_deref(), Some("Formato de C (CAGED)"));
}

#[test]
fn test_variation_wraps_both_ways() {
    assert_eq!(variation_index(-1, 5), Some(4));
    assert_eq!(variation_index(-6, 5), Some(4));
    assert_eq!(variation_index(5, 5), Some(0));
    assert_eq!(variation_index(7, 5), Some(2));
    assert_eq!(variation_index(0, 0), None);

    let shapes = builtin_shapes("dom7").unwrap();
    let last = chord_variation("G", shapes, -1).unwrap();
    assert_eq!(last.index, shapes.len() - 1);
    assert_eq!(last.diagram, chord_diagram("G", &shapes[shapes.len() - 1]));
    assert!(chord_variation("G", &[], 0).is_none());
}

#[test]
fn test_box_start_fret() {
    use Fret::*;
    assert_eq!(box_start_fret(&[Muted, Fretted(3), Fretted(2), Open, Fretted(1), Open]), 1);
    assert_eq!(box_start_fret(&[Muted, Fretted(6), Fretted(8), Fretted(8), Fretted(8), Fretted(6)]), 6);
    // wider than the window: keep the highest note in view
    assert_eq!(box_start_fret(&[Muted, Fretted(3), Fretted(9), Muted, Muted, Muted]), 5);
    assert_eq!(box_start_fret(&[Muted; 6]), 1);
}

#[test]
fn test_c_major_positions() {
    let scale = generate_scale("C", "Maior Natural");
    let positions = scale_positions("C", &scale.notes);

    let names: Vec<&str> = positions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Position 1 (C)",
            "Position 2 (A)",
            "Position 3 (G)",
            "Position 4 (E)",
            "Position 5 (D)",
        ]
    );
    let starts: Vec<u8> = positions.iter().map(|p| p.start_fret).collect();
    assert_eq!(starts, vec![1, 3, 5, 8, 10]);

    let open = &positions[0];
    assert_eq!(open.first_fret(), 0);
    assert_eq!(open.frets[0], vec![0, 1, 3]);
    assert_eq!(open.frets[1], vec![0, 2, 3]);
    assert_eq!(open.frets[3], vec![0, 2, 4]);
    assert_eq!(open.frets[5], vec![0, 1, 3]);
    assert_eq!(
        open.root_frets,
        vec![FretCoord { string: 1, fret: 3 }, FretCoord { string: 4, fret: 1 }]
    );
}

#[test]
fn test_positions_cover_window_exactly() {
    for pattern in SCALE_PATTERNS.iter() {
        for root in Note::ALL {
            let scale = generate_scale(root.symbol(), pattern.name);
            let members: Vec<Note> = scale.notes.iter().filter_map(|n| Note::from_symbol(n)).collect();
            let positions = scale_positions(root.symbol(), &scale.notes);
            assert_eq!(positions.len(), 5);

            for position in &positions {
                let first = position.first_fret();
                for string in 0..STRING_COUNT {
                    let expected: Vec<u8> = (first..first + WINDOW_SPAN)
                        .filter(|&f| members.contains(&note_at_fret(string, f).unwrap()))
                        .collect();
                    assert_eq!(position.frets[string], expected, "{} {} {}", root, pattern.name, position.name);
                }
                for coord in &position.root_frets {
                    assert_eq!(note_at_fret(coord.string, coord.fret), Some(root));
                    assert!(position.frets[coord.string].contains(&coord.fret));
                }
                let tonic_count = position
                    .frets
                    .iter()
                    .enumerate()
                    .flat_map(|(s, frets)| frets.iter().map(move |&f| (s, f)))
                    .filter(|&(s, f)| note_at_fret(s, f) == Some(root))
                    .count();
                assert_eq!(position.root_frets.len(), tonic_count);
            }
        }
    }
}

#[test]
fn test_positions_shift_with_root() {
    let scale = generate_scale("E", "Pentatônica Menor");
    let positions = scale_positions("E", &scale.notes);
    let starts: Vec<u8> = positions.iter().map(|p| p.start_fret).collect();
    // C form at E sits on fret 4, D form at E on fret 2
    assert_eq!(starts[0], 4);
    assert_eq!(positions[0].first_fret(), 4);
    assert_eq!(starts[4], 2);
}

#[test]
fn test_positions_degenerate_input() {
    assert!(scale_positions("H", &["C", "D"]).is_empty());
    assert!(scale_positions::<&str>("C", &[]).is_empty());
    assert!(scale_positions("C", &["X", "Y"]).is_empty());
}

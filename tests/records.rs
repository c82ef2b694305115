// tests/records.rs
//
// Record line properties, checked through the public API only.
use poe_uniques::record::{
    assemble_fragment, assemble_item, normalize_fragment, variant, FragmentKind, RecordLine,
};

fn piece(raw: &str) -> String {
    assemble_fragment(raw, true).map(|l| l.to_string()).unwrap_or_default()
}

#[test]
fn text_without_digits_is_title_cased() {
    for raw in ["cannot be frozen", "Your hits can't be evaded", "HALF OF YOUR ARMOUR"] {
        let out = piece(raw);
        assert!(out.starts_with('|'), "{out}");
        assert!(!out.contains(':'), "{out}");
    }
    assert_eq!(piece("your hits can't be evaded"), "|Your Hits Can't Be Evaded");
}

#[test]
fn range_percentage_and_compound_prefixes() {
    assert_eq!(piece("150-200 Armour"), "|150-200:Armour");
    assert_eq!(piece("+25% increased Damage"), "|25:Increased Damage");
    assert_eq!(piece("(10-20) to (30-40) Cold Damage"), "|10,20,30,40:Cold Damage");
}

#[test]
fn implicit_marker_sits_in_front_of_the_numbers() {
    let out = piece("@+10% to Fire Resistance");
    let after_pipe = out.strip_prefix('|').unwrap();
    assert!(after_pipe.starts_with("@10:"), "{out}");
    assert!(!out[2..].contains('@'));
}

#[test]
fn implicit_flag_is_a_field() {
    let normalized = normalize_fragment("+(8\u{2013}12)% to Cold Resistance", FragmentKind::Implicit);
    match assemble_fragment(&normalized, true) {
        Some(RecordLine::Modifier { implicit, prefix, text }) => {
            assert!(implicit);
            assert_eq!(prefix.as_deref(), Some("8-12:"));
            assert_eq!(text, "To Cold Resistance");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unicode_dashes_only_ascii_in_output() {
    let frags = [
        normalize_fragment("Rath\u{00F6}", FragmentKind::Name),
        normalize_fragment("\u{2212}(10\u{2013}20)% reduced M\u{00F6}vement Speed", FragmentKind::Explicit),
    ];
    let line = assemble_item(&frags);
    assert!(!line.contains('\u{2212}') && !line.contains('\u{2013}'), "{line}");
    assert!(line.starts_with("Ratho|"), "{line}");
    // modifier text keeps its umlaut
    assert!(line.contains('\u{00F6}'), "{line}");
}

#[test]
fn variant_markers_any_case() {
    assert_eq!(piece("Current VARIANT"), "| -Current- ");
    assert_eq!(piece("  Old variant of the belt"), "| -Old- ");
    assert_eq!(variant::build_variant("Legacy Variant"), "| -Legacy- ");
}

#[test]
fn versioned_variant_headers_stay_whole() {
    assert_eq!(piece("Pre 2.6.0 variant"), "| -Pre 2.6.0- ");
    let frags = ["Doryani's Invitation", "Pre 2.6.0 variant", "Current variant"];
    assert_eq!(assemble_item(&frags), "Doryani's Invitation| -Pre 2.6.0- | -Current- ");
}

#[test]
fn dotted_numbers_are_one_token() {
    assert_eq!(piece("Adds 1.5.2 Damage"), "|1.5.2:Adds Damage");
    assert_eq!(piece(".5% chance to Freeze"), "|.5:Chance To Freeze");
}

// "( To )" is patched after the fact, not parsed: a signed compound range
// falls through to the bare number and the second range is lost.
#[test]
fn to_cleanup_is_lossy() {
    assert_eq!(piece("(+10-20 to 30-40) Cold Damage"), "|10:Cold Damage");
}

#[test]
fn names_pass_through_untouched() {
    let frags = ["Atziri's Disfavour", "", "+(1-2) to Level of Socketed Gems"];
    assert_eq!(assemble_item(&frags), "Atziri's Disfavour|1-2:To Level Of Socketed Gems");
}

#[test]
fn assembling_is_pure() {
    let raw = "@+(20 to 30)% increased Elemental Damage";
    assert_eq!(assemble_fragment(raw, true), assemble_fragment(raw, true));
    let frags = ["Name", raw, "Current variant", "no numbers here"];
    assert_eq!(assemble_item(&frags), assemble_item(&frags));
}

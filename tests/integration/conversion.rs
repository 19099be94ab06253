//! End-to-end conversion tests through the library API

use octconf::{convert, convert_with, Options};

#[test]
fn test_nested_config() {
    let out = convert("def CONFIG := ((0o1, 0o2), (0o3, 0o4))").unwrap();
    assert_eq!(out, "CONFIG = [[1, 2], [3, 4]]");
}

#[test]
fn test_octal_decoding() {
    assert_eq!(convert("def A := 0o17").unwrap(), "A = 15");
    assert_eq!(convert("def A := 0O17").unwrap(), "A = 15");
    assert_eq!(convert("def ZERO := 0o0").unwrap(), "ZERO = 0");
}

#[test]
fn test_forward_reference() {
    let out = convert("def A := ![B]\ndef B := 0o5").unwrap();
    assert_eq!(out, "A = 5\nB = 5");
}

#[test]
fn test_trailing_comma_and_empty_array() {
    assert_eq!(convert("def A := (0o1,)").unwrap(), convert("def A := (0o1)").unwrap());
    assert_eq!(convert("def A := ()").unwrap(), "A = []");
}

#[test]
fn test_realistic_document() {
    let source = r#"
def PAGE_SIZE := 0o10000
def MODES     := (0o644, 0o755, 0o600,)
def LAYOUT    := (![PAGE_SIZE], ![MODES], ())
def _EMPTY    := ()
"#;
    let expected = "PAGE_SIZE = 4096\n\
                    MODES = [420, 493, 384]\n\
                    LAYOUT = [4096, [420, 493, 384], []]\n\
                    _EMPTY = []";
    assert_eq!(convert(source).unwrap(), expected);
}

#[test]
fn test_whitespace_and_layout_are_free_form() {
    let compact = convert("def A:=(0o1,0o2)def B:=![A]").unwrap();
    let spread = convert("def\tA\n:=\n(\n  0o1 ,\n  0o2\n)\n\ndef B := ! [ A ]\n").unwrap();
    assert_eq!(compact, "A = [1, 2]\nB = [1, 2]");
    assert_eq!(compact, spread);
}

#[test]
fn test_duplicate_definition_last_one_wins() {
    let out = convert("def A := 0o1\ndef B := 0o2\ndef A := 0o3").unwrap();
    assert_eq!(out, "B = 2\nA = 3");
}

#[test]
fn test_custom_depth() {
    let source = "def A := (((0o1)))";
    assert!(convert_with(source, &Options { max_depth: 3 }).is_ok());
    assert!(convert_with(source, &Options { max_depth: 2 }).is_err());
}

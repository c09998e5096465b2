// Exhaustive checks over all 256 byte values and every valid configuration.

use expctl::escape::{escape_byte, escape_bytes, is_escaped, ByteClass, Config, EscapeMode};

/// Every valid configuration (3 modes × LF flag × TAB flag).
fn all_configs() -> Vec<Config> {
    let mut v = Vec::new();
    for mode in [EscapeMode::Literal, EscapeMode::Octal, EscapeMode::Hex] {
        for nl in [false, true] {
            for tab in [false, true] {
                v.push(Config::with_mode(mode).newline_as_control(nl).tab_as_control(tab));
            }
        }
    }
    v
}

#[test]
fn totality() {
    for config in all_configs() {
        for b in 0..=255u8 {
            assert!(!escape_byte(b, &config).is_empty(), "{config:?} byte {b:#04x}");
        }
    }
}

#[test]
fn printable_passthrough() {
    for config in all_configs() {
        for b in 0x20..=0x7eu8 {
            if b == b'\\' || b == b'^' {
                continue;
            }
            assert_eq!(escape_byte(b, &config).as_bytes(), &[b]);
        }
    }
}

#[test]
fn output_contains_no_stray_control_bytes() {
    let all: Vec<u8> = (0..=255u8).collect();
    for config in all_configs() {
        let out = escape_bytes(&all, &config);
        for &b in &out {
            if ByteClass::of(b) != ByteClass::Control {
                continue;
            }
            let allowed = (b == b'\n' && !config.is_newline_control())
                || (b == b'\t' && !config.is_tab_control());
            assert!(allowed, "{config:?} leaked control byte {b:#04x}");
        }
    }
}

#[test]
fn escaped_output_is_printable_ascii() {
    for config in all_configs() {
        for b in 0..=255u8 {
            if !is_escaped(b, &config) {
                continue;
            }
            let frag = escape_byte(b, &config);
            assert!(frag.len() >= 2, "{config:?} byte {b:#04x}");
            assert!(frag.iter().all(|&c| ByteClass::of(c) == ByteClass::Printable));
        }
    }
}

#[test]
fn mode_consistency() {
    for nl in [false, true] {
        for tab in [false, true] {
            let literal = Config::default().newline_as_control(nl).tab_as_control(tab);
            let octal = Config::with_mode(EscapeMode::Octal).newline_as_control(nl).tab_as_control(tab);
            let hex = Config::with_mode(EscapeMode::Hex).newline_as_control(nl).tab_as_control(tab);
            for b in 0..=255u8 {
                let escaped = is_escaped(b, &literal);
                assert_eq!(escaped, is_escaped(b, &octal));
                assert_eq!(escaped, is_escaped(b, &hex));
                if escaped {
                    assert_eq!(escape_byte(b, &octal).as_bytes(), format!("\\o{:03o}", b).as_bytes());
                    assert_eq!(escape_byte(b, &hex).as_bytes(), format!("\\x{:02x}", b).as_bytes());
                } else {
                    // Unescaped bytes render identically in every mode.
                    assert_eq!(escape_byte(b, &literal), escape_byte(b, &octal));
                    assert_eq!(escape_byte(b, &literal), escape_byte(b, &hex));
                }
            }
        }
    }
}

#[test]
fn non_ascii_literal_matches_printf_octal() {
    let c = Config::default();
    for b in 0x80..=0xffu8 {
        assert_eq!(escape_byte(b, &c).as_bytes(), format!("\\{:03o}", b).as_bytes());
    }
}

#[test]
fn caret_range_matches_plus_64() {
    let c = Config::default();
    for b in (0x01..=0x06u8).chain(0x0e..=0x1f) {
        let want = [b'^', b + 64];
        assert_eq!(escape_byte(b, &c).as_bytes(), &want);
    }
}

#[test]
fn concatenation_is_per_byte() {
    let input = b"\x1b[31mred\x1b[0m\r\n\xe2\x82\xac";
    let config = Config::default();
    let expected: Vec<u8> = input
        .iter()
        .flat_map(|&b| escape_byte(b, &config).to_vec())
        .collect();
    assert_eq!(escape_bytes(input, &config), expected);
    assert_eq!(escape_bytes(input, &config), b"^[[31mred^[[0m\\r\n\\342\\202\\254");
}

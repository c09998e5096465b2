#![no_main]
use std::io::Write;

use expctl::escape::{escape_bytes, is_escaped, ByteClass, Config, EscapeMode};
use expctl::io::EscapeWriter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the configuration, the rest is the payload.
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let mode = match selector % 3 {
        0 => EscapeMode::Literal,
        1 => EscapeMode::Octal,
        _ => EscapeMode::Hex,
    };
    let config = Config::with_mode(mode)
        .newline_as_control(selector & 0x10 != 0)
        .tab_as_control(selector & 0x20 != 0);

    let out = escape_bytes(payload, &config);

    // Every input byte produces at least one output byte.
    assert!(out.len() >= payload.len());

    // No control byte survives except LF/TAB when passed through.
    for &b in &out {
        if ByteClass::of(b) == ByteClass::Control {
            assert!(!is_escaped(b, &config), "leaked {b:#04x}");
        }
    }

    // Splitting the input at any point must not change the output.
    let split = (selector as usize) % (payload.len() + 1);
    let mut w = EscapeWriter::new(Vec::new(), &config);
    w.write_all(&payload[..split]).unwrap();
    w.write_all(&payload[split..]).unwrap();
    assert_eq!(w.into_inner(), out);
});

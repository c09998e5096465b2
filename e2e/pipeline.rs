// e2e/pipeline.rs — larger streams and pipeline behaviour.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use expctl::escape::{escape_bytes, Config, EscapeMode};

fn expctl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_expctl"))
}

#[test]
fn multi_block_stream_matches_library() {
    // ~1 MiB crossing many 64 KiB read blocks
    let data: Vec<u8> = (0..(1usize << 20)).map(|i| (i.wrapping_mul(131) >> 3) as u8).collect();
    let expected = escape_bytes(&data, &Config::with_mode(EscapeMode::Octal).newline_as_control(true));

    let mut child = Command::new(expctl_bin())
        .args(["-o", "-n"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn expctl");

    // Feed stdin from another thread so a full stdout pipe cannot deadlock us.
    let mut stdin = child.stdin.take().expect("stdin");
    let writer = thread::spawn(move || {
        stdin.write_all(&data).expect("write stdin");
    });

    let out = child.wait_with_output().expect("wait expctl");
    writer.join().expect("writer thread");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout.len(), expected.len());
    assert!(out.stdout == expected);
}

#[cfg(unix)]
#[test]
fn closed_reader_ends_filter_without_diagnostic() {
    use std::os::unix::process::ExitStatusExt;

    let mut child = Command::new(expctl_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn expctl");

    let mut stdout = child.stdout.take().expect("stdout");
    let mut first = [0u8; 16];
    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(&[0u8; 4096]).expect("write first block");
    stdin.flush().expect("flush");
    drop(stdin);
    stdout.read_exact(&mut first).expect("read first bytes");
    assert_eq!(&first[..4], b"^@^@");
    drop(stdout);

    let out = child.wait_with_output().expect("wait expctl");
    // Either it finished before noticing, or it died of SIGPIPE; never a message.
    assert!(out.status.success() || out.status.signal() == Some(libc::SIGPIPE));
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
}

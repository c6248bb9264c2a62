#![no_main]
use std::{cell::RefCell, io::BufReader};

use arbitrary::Arbitrary;
use jsonscan::{IoSource, OwnedToken, ScanError, Scanner, ScannerOptions, SliceSource, Source};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Value;

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly writes a fresh header and a run of whitespace-padded serialized
/// values, so that inputs get deep into the grammar; otherwise defers to
/// libFuzzer's byte-level mutations.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size {
            prefix += append_whitespace(&mut data[prefix..], max_size - prefix);
            prefix += append_value(&mut data[prefix..], size, max_size - prefix);
            prefix += append_whitespace(&mut data[prefix..], max_size - prefix);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends 1..=8 JSON whitespace bytes, never more than `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let n = rng.random_range(1..=limit.min(8));
        for slot in &mut buf[..n] {
            *slot = WS_TABLE[rng.random_range(0..WS_TABLE.len())][0];
        }
        n
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let node = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(node) = Node::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break node;
        }
    };

    let mut text = Vec::new();
    node.write(&mut text);
    let len = text.len().min(limit);
    data[..len].copy_from_slice(&text[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A JSON document written straight to text, so that escapes (including
/// lone surrogates) and number shapes reach the scanner unnormalized.
#[derive(Debug, Arbitrary)]
enum Node {
    Null,
    Bool(bool),
    Number {
        int: i64,
        frac: Option<u32>,
        exp: Option<i16>,
    },
    Text(Vec<Piece>),
    Array(Vec<Node>),
    Object(Vec<(Vec<Piece>, Node)>),
}

#[derive(Debug, Arbitrary)]
enum Piece {
    Char(char),
    Escape(u8),
    Unit(u16),
}

impl Node {
    fn write(&self, out: &mut Vec<u8>) {
        match self {
            Node::Null => out.extend_from_slice(b"null"),
            Node::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
            Node::Number { int, frac, exp } => {
                out.extend_from_slice(int.to_string().as_bytes());
                if let Some(frac) = frac {
                    out.extend_from_slice(format!(".{frac}").as_bytes());
                }
                if let Some(exp) = exp {
                    out.extend_from_slice(format!("e{exp:+}").as_bytes());
                }
            }
            Node::Text(pieces) => write_string(pieces, out),
            Node::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b',');
                    }
                    item.write(out);
                }
                out.push(b']');
            }
            Node::Object(members) => {
                out.push(b'{');
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        out.push(b',');
                    }
                    write_string(key, out);
                    out.push(b':');
                    value.write(out);
                }
                out.push(b'}');
            }
        }
    }
}

fn write_string(pieces: &[Piece], out: &mut Vec<u8>) {
    out.push(b'"');
    for piece in pieces {
        match *piece {
            Piece::Char(c) if c == '"' || c == '\\' || c.is_control() => {
                out.extend_from_slice(format!("\\u{:04x}", u32::from(c)).as_bytes());
            }
            Piece::Char(c) => out.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
            Piece::Escape(e) => out.extend_from_slice(&[b'\\', b"\"\\/bfnrt"[usize::from(e % 8)]]),
            Piece::Unit(u) => out.extend_from_slice(format!("\\u{u:04X}").as_bytes()),
        }
    }
    out.push(b'"');
}

/// Scans to the end, checking that every token before the end consumes input
/// and that errors are sticky.
fn scan_all<S: Source>(scanner: &mut Scanner, mut src: S, len: usize) -> Result<Vec<OwnedToken>, ScanError> {
    let mut tokens = Vec::new();
    for _ in 0..=len {
        let before = scanner.position();
        match scanner.scan(&mut src) {
            Ok(token) => {
                let token = token.to_owned_token();
                let end = token == OwnedToken::EndOfInput;
                assert!(end || scanner.position() > before, "token consumed no input");
                tokens.push(token);
                if end {
                    assert_eq!(scanner.depth(), 0);
                    return Ok(tokens);
                }
            }
            Err(err) => {
                assert_eq!(scanner.scan(&mut src).unwrap_err(), err, "error is not sticky");
                return Err(err);
            }
        }
    }
    panic!("scanner produced more tokens than input bytes");
}

fn scanner(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let seed = u32::from_le_bytes(data[1..5].try_into().unwrap());
    let data = &data[HEADER..];

    let limited = flags & 1 != 0;
    let options = if limited {
        ScannerOptions {
            lexeme_capacity: 0,
            stack_capacity: 0,
            max_lexeme_len: Some(seed as usize % 256 + 1),
            max_depth: Some(seed as usize % 32 + 1),
        }
    } else {
        ScannerOptions::default()
    };
    let mut scanner = Scanner::with_options(options).unwrap();

    let in_memory = scan_all(&mut scanner, SliceSource::new(data), data.len());

    if !limited && serde_json::from_slice::<Value>(data).is_ok() {
        assert!(in_memory.is_ok(), "serde_json accepts but scanner rejects: {in_memory:?}");
    }

    if flags & 2 != 0 {
        scanner.reset();
        let reader = BufReader::with_capacity(seed as usize % 64 + 1, data);
        let streamed = scan_all(&mut scanner, IoSource::new(reader), data.len());
        assert_eq!(streamed, in_memory);
    }
}

fuzz_target!(|data: &[u8]| scanner(data));

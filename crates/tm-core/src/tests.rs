use crate::*;
use rand::Rng;

// ========== GrowableBuffer: growth ==========

#[test]
fn test_buf_empty() {
    let buf = GrowableBuffer::new();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_slice(), b"");
}

#[test]
fn test_buf_append_readback() {
    for n in [0usize, 1, 2, 3, 4, 8, 9] {
        let mut buf = GrowableBuffer::new();
        for i in 0..n {
            buf.push(i as u8);
        }
        assert_eq!(buf.len(), n);
        for i in 0..n {
            assert_eq!(buf.get(i).unwrap(), i as u8);
        }
    }
}

#[test]
fn test_buf_capacity_doubles() {
    let mut buf = GrowableBuffer::new();
    let mut seen = vec![buf.capacity()];
    for i in 0..9u8 {
        buf.push(i);
        if *seen.last().unwrap() != buf.capacity() {
            seen.push(buf.capacity());
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 4, 8, 16]);
}

#[test]
fn test_buf_random_appends() {
    let mut rng = rand::thread_rng();
    let values: Vec<u8> = (0..rng.gen_range(0..500)).map(|_| rng.gen()).collect();
    let mut buf = GrowableBuffer::new();
    for &v in &values {
        buf.push(v);
    }
    assert_eq!(buf.as_slice(), values.as_slice());
    assert!(buf.len() <= buf.capacity());
}

#[test]
fn test_buf_extend_keeps_doubling() {
    let mut buf = GrowableBuffer::from("abc");
    assert_eq!(buf.capacity(), 4);
    buf.extend_from_slice(b"defghij");
    assert_eq!(buf.as_slice(), b"abcdefghij");
    assert_eq!(buf.capacity(), 16);
}

// ========== GrowableBuffer: access ==========

#[test]
fn test_buf_get_out_of_range() {
    let buf = GrowableBuffer::from("ab");
    assert!(matches!(
        buf.get(2),
        Err(TmError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_buf_get_beyond_len_within_capacity() {
    let mut buf = GrowableBuffer::from("abc");
    buf.truncate(1);
    assert_eq!(buf.capacity(), 4);
    assert!(buf.get(1).is_err());
}

#[test]
fn test_buf_set() {
    let mut buf = GrowableBuffer::from("abc");
    buf.set(1, b'X').unwrap();
    assert_eq!(buf.as_slice(), b"aXc");
    assert!(matches!(buf.set(3, b'Y'), Err(TmError::IndexOutOfRange { .. })));
}

// ========== GrowableBuffer: insert / remove ==========

#[test]
fn test_buf_insert_middle_in_place() {
    let mut buf = GrowableBuffer::from("abd");
    assert_eq!(buf.capacity(), 4);
    buf.insert(2, b'c').unwrap();
    assert_eq!(buf.as_slice(), b"abcd");
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_buf_insert_with_growth() {
    let mut buf = GrowableBuffer::from("abde");
    assert_eq!(buf.capacity(), 4);
    buf.insert(2, b'c').unwrap();
    assert_eq!(buf.as_slice(), b"abcde");
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_buf_insert_into_empty() {
    let mut buf = GrowableBuffer::new();
    buf.insert(0, b'x').unwrap();
    assert_eq!(buf.as_slice(), b"x");
    assert_eq!(buf.capacity(), 1);
}

#[test]
fn test_buf_insert_invalid_position() {
    let mut buf = GrowableBuffer::from("ab");
    assert!(matches!(
        buf.insert(3, b'x'),
        Err(TmError::InvalidPosition { position: 3, len: 2 })
    ));
    assert_eq!(buf.as_slice(), b"ab");
}

#[test]
fn test_buf_insert_then_remove_restores() {
    let original = GrowableBuffer::from("hello");
    for p in 0..=original.len() {
        let mut buf = original.clone();
        buf.insert(p, b'#').unwrap();
        assert_eq!(buf.remove(p).unwrap(), b'#');
        assert_eq!(buf, original);
    }
}

#[test]
fn test_buf_random_insert_remove() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(0..40);
        let original: GrowableBuffer = (0..len).map(|_| rng.gen::<u8>()).collect();
        let p = rng.gen_range(0..=len);
        let mut buf = original.clone();
        buf.insert(p, rng.gen()).unwrap();
        buf.remove(p).unwrap();
        assert_eq!(buf, original);
    }
}

#[test]
fn test_buf_insert_at_cursor() {
    let mut buf = GrowableBuffer::from("helloworld");
    let at = buf.begin() + 5;
    buf.insert_at(at, b' ').unwrap();
    assert_eq!(buf.to_string(), "hello world");
    assert_eq!(buf.end().index(), 11);
}

#[test]
fn test_buf_remove_out_of_range() {
    let mut buf = GrowableBuffer::new();
    assert!(matches!(buf.remove(0), Err(TmError::IndexOutOfRange { .. })));
}

// ========== GrowableBuffer: truncate / clear / copy ==========

#[test]
fn test_buf_truncate_never_grows() {
    let mut buf = GrowableBuffer::from("abc");
    buf.truncate(10);
    assert_eq!(buf.len(), 3);
    buf.truncate(1);
    assert_eq!(buf.as_slice(), b"a");
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_buf_clear_keeps_capacity() {
    let mut buf = GrowableBuffer::from("abcde");
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 8);
    buf.push(b'z');
    assert_eq!(buf.as_slice(), b"z");
}

#[test]
fn test_buf_clone_is_deep() {
    let original = GrowableBuffer::from("abc");
    let mut copy = original.clone();
    copy.set(0, b'X').unwrap();
    assert_eq!(original.as_slice(), b"abc");
    assert_eq!(copy.as_slice(), b"Xbc");
    assert_eq!(copy.capacity(), original.capacity());
}

#[test]
fn test_buf_clone_from_replaces_storage() {
    let source = GrowableBuffer::from("a");
    let mut target = GrowableBuffer::from("longer text here");
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 1);
}

#[test]
fn test_buf_content_stops_at_nul() {
    let buf = GrowableBuffer::from(&b"abc\0def"[..]);
    assert_eq!(buf.content(), b"abc");
    assert_eq!(buf.len(), 7);
    assert_eq!(GrowableBuffer::from("xyz").content(), b"xyz");
}

#[test]
fn test_buf_iter_and_display() {
    let buf = GrowableBuffer::from("hey");
    let collected: Vec<u8> = buf.iter().copied().collect();
    assert_eq!(collected, b"hey");
    let mut count = 0;
    for _ in &buf {
        count += 1;
    }
    assert_eq!(count, 3);
    assert_eq!(format!("{buf}"), "hey");
}

// ========== LineTable ==========

#[test]
fn test_lines_split_skips_empty() {
    let table = LineTable::build(b"\na\n\nb\n", &LineLimits::default()).unwrap();
    assert_eq!(table.lines(), &[&b"a"[..], &b"b"[..]]);
}

#[test]
fn test_lines_empty_input() {
    let table = LineTable::build(b"", &LineLimits::default()).unwrap();
    assert!(table.is_empty());
    assert!(table.join().is_empty());
}

#[test]
fn test_lines_join_no_trailing_newline() {
    let table = LineTable::build(b"x\ny\n", &LineLimits::default()).unwrap();
    assert_eq!(table.join().as_slice(), b"x\ny");
}

#[test]
fn test_lines_overflow_strict() {
    let err = LineTable::build(b"a\nb\nc", &LineLimits::new(2, 10)).unwrap_err();
    assert!(matches!(err, TmError::LineTableOverflow { max_lines: 2 }));
}

#[test]
fn test_lines_exactly_at_limit() {
    let table = LineTable::build(b"a\nb", &LineLimits::new(2, 1)).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_lines_too_long_strict() {
    let err = LineTable::build(b"ok\ntoolong", &LineLimits::new(10, 3)).unwrap_err();
    assert!(matches!(
        err,
        TmError::LineTooLong { line: 1, len: 7, max_len: 3 }
    ));
}

#[test]
fn test_lines_truncate_policy() {
    let limits = LineLimits::new(2, 3).with_policy(OverflowPolicy::Truncate);
    let table = LineTable::build(b"abcdef\nxy\nzzz", &limits).unwrap();
    assert_eq!(table.lines(), &[&b"abc"[..], &b"xy"[..]]);
    assert_eq!(table.truncated_lines(), 1);
    assert_eq!(table.dropped_lines(), 1);
}

#[test]
fn test_lines_sort() {
    let mut table = LineTable::build(b"b\na\nc", &LineLimits::default()).unwrap();
    table.sort();
    assert_eq!(table.join().as_slice(), b"a\nb\nc");
}

#[test]
fn test_lines_filtered_bound_counts_kept_only() {
    let text = b"x\na\nx\nb\nx\nx";
    let table = LineTable::build_filtered(text, &LineLimits::new(2, 10), |l| l != b"x").unwrap();
    assert_eq!(table.lines(), &[&b"a"[..], &b"b"[..]]);
    assert!(LineTable::build(text, &LineLimits::new(2, 10)).is_err());
}

#[test]
fn test_lines_filtered_overflow_strict() {
    let err = LineTable::build_filtered(b"a\nb\nc", &LineLimits::new(2, 10), |_| true).unwrap_err();
    assert!(matches!(err, TmError::LineTableOverflow { max_lines: 2 }));
}

#[test]
fn test_lines_filtered_long_rejected_line_still_checked() {
    let err = LineTable::build_filtered(b"ok\ntoolong", &LineLimits::new(10, 3), |l| l == b"ok")
        .unwrap_err();
    assert!(matches!(err, TmError::LineTooLong { len: 7, .. }));
}

// ========== Config ==========

#[test]
fn test_config_default_matches_stock_run() {
    let config = TextMillConfig::default();
    assert_eq!(config.sources.len(), 3);
    assert_eq!(config.outputs.len(), 2);
    assert_eq!(
        config.transforms,
        vec![
            TransformConfig::RemoveSubstring { needle: "warlock".into() },
            TransformConfig::RemoveNewline,
        ]
    );
    assert_eq!(config.limits, LineLimits::default());
}

#[test]
fn test_config_json_roundtrip_default() {
    let config = TextMillConfig::default();
    let json = config.to_json_pretty().unwrap();
    assert_eq!(TextMillConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_config_parse_minimal() {
    let json = r#"{
        "sources": [{"kind": "inline", "text": "hi"}],
        "transforms": [
            {"kind": "wrap_at_column", "max_chars": 20},
            {"kind": "replace_substring", "old": "hope"},
            {"kind": "count_symbols"}
        ],
        "outputs": [{"kind": "rotating_file", "base": "out", "max_bytes": 10}]
    }"#;
    let config = TextMillConfig::from_json_str(json).unwrap();
    assert_eq!(config.limits.max_lines, 1000);
    assert_eq!(
        config.transforms[1],
        TransformConfig::ReplaceSubstring { old: Some("hope".into()), new: None }
    );
    assert_eq!(
        config.outputs[0],
        OutputConfig::RotatingFile {
            base: "out".into(),
            extension: "txt".into(),
            max_bytes: 10,
        }
    );
}

#[test]
fn test_config_limits_policy() {
    let json = r#"{"sources": [], "transforms": [], "outputs": [],
                   "limits": {"max_lines": 5, "policy": "truncate"}}"#;
    let config = TextMillConfig::from_json_str(json).unwrap();
    assert_eq!(config.limits.max_lines, 5);
    assert_eq!(config.limits.max_line_len, 1000);
    assert_eq!(config.limits.policy, OverflowPolicy::Truncate);
}

#[test]
fn test_config_rejects_zero_rotation() {
    let json = r#"{"sources": [], "transforms": [],
                   "outputs": [{"kind": "rotating_file", "base": "o", "max_bytes": 0}]}"#;
    assert!(matches!(
        TextMillConfig::from_json_str(json),
        Err(TmError::InvalidConfig(_))
    ));
}

#[test]
fn test_config_unknown_transform() {
    let json = r#"{"sources": [], "transforms": [{"kind": "shout"}], "outputs": []}"#;
    assert!(matches!(
        TextMillConfig::from_json_str(json),
        Err(TmError::Serialization(_))
    ));
}

#[test]
fn test_config_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, TextMillConfig::default().to_json_pretty().unwrap()).unwrap();
    assert_eq!(TextMillConfig::load(&path).unwrap(), TextMillConfig::default());
    assert!(matches!(
        TextMillConfig::load(dir.path().join("missing.json")),
        Err(TmError::Io(_))
    ));
}

//! Concrete boundary scenarios, each checked against both the vector-backed
//! `validate` and the scalar-only `validate_scalar`, which must agree.

fn assert_accepts(data: &[u8]) {
    assert!(rangeutf8::validate(data).is_ok(), "validate rejected valid input");
    assert!(rangeutf8::validate_scalar(data).is_ok(), "validate_scalar rejected valid input");
}

fn assert_rejects_at(data: &[u8], expected: usize) {
    let vector_err = rangeutf8::validate(data).expect_err("validate accepted malformed input");
    let scalar_err = rangeutf8::validate_scalar(data).expect_err("validate_scalar accepted malformed input");
    assert_eq!(vector_err.valid_up_to(), expected);
    assert_eq!(scalar_err.valid_up_to(), expected);
}

#[test]
fn empty_input_accepts() {
    assert_accepts(b"");
}

#[test]
fn repeated_printable_ascii_accepts() {
    let printable: String = (0x20u8..0x7F).map(|b| b as char).collect();
    let data = printable.repeat(20);
    assert_eq!(data.len(), 1900);
    assert_accepts(data.as_bytes());
}

#[test]
fn multilingual_polyglot_accepts() {
    let data = "we on a world tour نحن في جولة حول العالم nous sommes en tournée mondiale мы в мировом турне a wa lori irin-ajo agbaye 私たちは世界ツアー中です είμαστε σε παγκόσμια περιοδεία በአለም ጉብኝት ላይ ነን jesteśmy w trasie dookoła świata 우리는 세계 여행을 하고 있어요 យើងកំពុងធ្វើដំណើរជុំវិញពិភពលោក ನಾವು ವಿಶ್ವ ಪ್ರವಾಸದಲ್ಲಿದ್ದೇವೆ. մենք համաշխարհային շրջագայության մեջ ենք míele xexeame katã ƒe tsaɖiɖi aɖe dzi เรากำลังทัวร์รอบโลก हम विश्व भ्रमण पर हैं pachantinpi puriypin kashanchis אנחנו בסיבוב הופעות עולמי kaulâh bâdâ è tur dhunnya qegħdin fuq tour tad-dinja ང་ཚོ་འཛམ་གླིང་སྐོར་བསྐྱོད་བྱེད་བཞིན་ཡོད།";
    assert_accepts(data.as_bytes());
}

#[test]
fn ascii_then_bare_continuation_byte_rejects_at_leader() {
    // 30 ASCII bytes + 0x80 0x01, total 32 bytes (one full vector block).
    let mut data = b"abcdefghijklmnopqrstuvwxyzabcd".to_vec();
    data.extend_from_slice(&[0x80, 0x01]);
    assert_rejects_at(&data, 30);
}

#[test]
fn encoded_surrogate_rejects_at_leader() {
    // 32 ASCII bytes then 0xED 0xA0 0x80 (U+D800).
    let mut data = vec![b'a'; 32];
    data.extend_from_slice(&[0xED, 0xA0, 0x80]);
    assert_rejects_at(&data, 32);
}

#[test]
fn overlong_nul_rejects_at_offset_zero() {
    assert_rejects_at(&[0xC0, 0x80], 0);
}

#[test]
fn truncated_four_byte_sequence_at_end_rejects_at_leader() {
    // 31 ASCII bytes then a truncated 4-byte lead (0xF0 0x90 0x8D, missing
    // the fourth byte).
    let mut data = vec![b'a'; 31];
    data.extend_from_slice(&[0xF0, 0x90, 0x8D]);
    assert_rejects_at(&data, 31);
}

#[test]
fn codepoint_beyond_max_rejects_at_leader() {
    // 64 valid bytes then 0xF4 0x90 0x80 0x80 (beyond U+10FFFF).
    let mut data = vec![b'a'; 64];
    data.extend_from_slice(&[0xF4, 0x90, 0x80, 0x80]);
    assert_rejects_at(&data, 64);
}

#[test]
fn overlong_second_byte_reports_leader_not_violating_byte() {
    // 0xE0 0x80: the second byte violates the range-4 constraint, but the
    // reported offset is the leading byte's, not the second byte's.
    assert_rejects_at(&[0xE0, 0x80], 0);
}

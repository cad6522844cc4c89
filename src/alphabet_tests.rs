use super::*;

#[test]
fn zero_encodes_to_first_symbol() {
    assert_eq!(encode(0), "2");
}

#[test]
fn roundtrip() {
    for value in [0, 1, 27, 28, 999, 1 << 30, (1_u64 << 43) - 1] {
        let encoded = encode(value);
        assert_eq!(decode(&encoded), Some(value));
    }
}

#[test]
fn rejects_characters_outside_alphabet() {
    assert_eq!(decode("e"), None);
    assert_eq!(decode("u"), None);
    assert_eq!(decode("a"), None);
    assert_eq!(decode("l"), None);
}

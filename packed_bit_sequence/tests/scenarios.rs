use num_bigint::BigUint;
use packed_bit_sequence::{BitSequenceError, BitSource, PackedBitSequence};

fn bits(s: &str) -> PackedBitSequence {
    PackedBitSequence::from_binary_str(s).unwrap()
}

#[test]
fn binary_text_to_integer_and_back() {
    assert_eq!(bits("1101").to_integer(), BigUint::from(13u32));
    assert_eq!(
        PackedBitSequence::from_integer(13u32, Some(8))
            .unwrap()
            .to_binary_string(),
        "00001101"
    );
}

#[test]
fn reverse_in_place() {
    let mut seq = bits("1010");
    seq.reverse();
    assert_eq!(seq.to_binary_string(), "0101");
}

#[test]
fn all_ones_of_length_ten_exports_two_bytes() {
    let seq = PackedBitSequence::from_source(BitSource::Filled { len: 10, fill: 1 }).unwrap();
    let bytes = seq.to_bytes();
    assert_eq!(bytes.len(), 2);
    assert_eq!(bytes[0], 0xFF);
    assert_eq!(bytes[1], 0xC0);
    assert_eq!(seq.to_hex(), "ffc0");
}

#[test]
fn insert_then_pop_front() {
    let mut seq = bits("011");
    seq.insert(0, 1).unwrap();
    assert_eq!(seq.to_binary_string(), "1011");
    assert_eq!(seq.pop(Some(0)).unwrap(), 1);
    assert_eq!(seq.to_binary_string(), "011");
}

#[test]
fn count_does_not_overlap() {
    assert_eq!(bits("1111").count("11").unwrap(), 2);
    assert_eq!(bits("10101").count("101").unwrap(), 1);
}

#[test]
fn hex_export_ignores_logical_length() {
    // Byte export carries no length: three bits come back as eight.
    let seq = bits("101");
    let restored = PackedBitSequence::from_hex(&seq.to_hex()).unwrap();
    assert_eq!(restored.to_binary_string(), "10100000");

    let mut padded = seq.clone();
    padded.pad_to_byte_boundary();
    assert_eq!(restored, padded);
}

#[test]
fn equality_is_structural() {
    let mut a = bits("1011");
    let b = bits("10110");
    assert_ne!(a, b);
    a.push(0).unwrap();
    assert_eq!(a, b);

    let mut c = bits("10111");
    c.set(4, 0).unwrap();
    assert_eq!(c, b);
}

#[test]
fn editing_session() {
    let mut seq = PackedBitSequence::zeros(4);
    seq.set(1, 1).unwrap();
    seq.extend("1100").unwrap();
    seq.extend(&[false, true][..]).unwrap();
    assert_eq!(seq.to_binary_string(), "0100110001");

    seq.remove_value(0).unwrap();
    assert_eq!(seq.to_binary_string(), "100110001");

    seq.rotate(-1);
    assert_eq!(seq.to_binary_string(), "001100011");

    seq.sort();
    assert_eq!(seq.to_binary_string(), "000001111");
    assert!(seq.starts_with("0000").unwrap());
    assert!(seq.ends_with("1111").unwrap());
    assert_eq!(seq.find_first(1).unwrap(), 5);

    seq.resize(4, 0).unwrap();
    assert!(!seq.any());
    assert_eq!(seq.contains(1), Ok(false));
    assert_eq!(seq.find_first(1), Err(BitSequenceError::ValueNotFound(1)));

    seq.clear();
    assert_eq!(seq.pop(None), Err(BitSequenceError::Empty));
}

#[test]
fn operators_compose() {
    let a = bits("1100");
    let b = bits("1010");
    let mixed = &(&a ^ &b) + &(&a * 2);
    assert_eq!(mixed.to_binary_string(), "011011001100");
    assert_eq!((&mixed >> 4).to_binary_string(), "000001101100");
    assert!(mixed.slice(None, Some(4), None).unwrap().is_palindromic());
}

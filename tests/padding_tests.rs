// tests/padding_tests.rs
use passfile_vault::crypto::padding::{pkcs7_pad, pkcs7_unpad};
use passfile_vault::error::CoreError;

#[test]
fn test_pad_basic() {
    assert_eq!(pkcs7_pad(b"test", 8).unwrap(), b"test\x04\x04\x04\x04");
}

#[test]
fn test_pad_aligned_input_gains_full_block() {
    assert_eq!(
        pkcs7_pad(b"12345678", 8).unwrap(),
        b"12345678\x08\x08\x08\x08\x08\x08\x08\x08"
    );

    let sixteen = [0x11u8; 16];
    assert_eq!(pkcs7_pad(&sixteen, 16).unwrap().len(), 32);
}

#[test]
fn test_pad_empty_input() {
    assert_eq!(pkcs7_pad(b"", 4).unwrap(), b"\x04\x04\x04\x04");
}

#[test]
fn test_pad_zero_block_size() {
    assert!(matches!(
        pkcs7_pad(b"test", 0),
        Err(CoreError::InvalidBlockSize(0))
    ));
}

#[test]
fn test_unpad_valid() {
    assert_eq!(pkcs7_unpad(b"test\x04\x04\x04\x04", 8).unwrap(), b"test");
}

#[test]
fn test_unpad_zero_block_size() {
    assert!(matches!(
        pkcs7_unpad(b"test\x04\x04\x04\x04", 0),
        Err(CoreError::InvalidBlockSize(0))
    ));
}

#[test]
fn test_unpad_inconsistent_pad_bytes() {
    assert!(matches!(
        pkcs7_unpad(b"test\x04\x04\x03\x04", 8),
        Err(CoreError::InvalidPadding)
    ));
}

#[test]
fn test_unpad_zero_pad_byte() {
    assert!(matches!(
        pkcs7_unpad(b"1234567\x00", 8),
        Err(CoreError::InvalidPadding)
    ));
}

#[test]
fn test_unpad_pad_byte_longer_than_input() {
    assert!(matches!(
        pkcs7_unpad(b"1234567\x09", 8),
        Err(CoreError::InvalidPadding)
    ));
}

#[test]
fn test_unpad_empty_or_misaligned() {
    assert!(matches!(pkcs7_unpad(b"", 8), Err(CoreError::InvalidPadding)));
    assert!(matches!(
        pkcs7_unpad(b"test\x03\x03\x03", 8),
        Err(CoreError::InvalidPadding)
    ));
}

#[test]
fn test_unpad_strips_whole_padding_block() {
    let data = b"abcdefgh";
    let padded = pkcs7_pad(data, 8).unwrap();
    assert_eq!(pkcs7_unpad(&padded, 8).unwrap(), data);
}

#[test]
fn test_pad_unpad_identity_across_sizes() {
    for block_size in [1, 2, 7, 8, 16, 32, 255] {
        for len in [0, 1, block_size - 1, block_size, block_size + 1, 3 * block_size] {
            let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let padded = pkcs7_pad(&data, block_size).unwrap();
            assert_eq!(padded.len() % block_size, 0);
            assert_eq!(
                pkcs7_unpad(&padded, block_size).unwrap(),
                data.as_slice(),
                "block {block_size} len {len}"
            );
        }
    }
}

//! Tests for the flat address space and image loading.

use emu6502::{AddressSpace, ImageError, ADDRESS_SPACE_SIZE};

#[test]
fn test_new_address_space_is_zeroed() {
    let memory = AddressSpace::new();
    assert_eq!(memory.as_bytes().len(), ADDRESS_SPACE_SIZE);
    assert!(memory.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_read_write_extremes() {
    let mut memory = AddressSpace::new();
    memory.write(0x0000, 0x11);
    memory.write(0xFFFF, 0x22);

    assert_eq!(memory.read(0x0000), 0x11);
    assert_eq!(memory.read(0xFFFF), 0x22);
}

#[test]
fn test_word_access_is_little_endian() {
    let mut memory = AddressSpace::new();
    memory.write_word(0x1000, 0xBEEF);

    assert_eq!(memory.read(0x1000), 0xEF);
    assert_eq!(memory.read(0x1001), 0xBE);
    assert_eq!(memory.read_word(0x1000), 0xBEEF);
}

#[test]
fn test_word_read_wraps_at_top_of_memory() {
    let mut memory = AddressSpace::new();
    memory.write(0xFFFF, 0x34);
    memory.write(0x0000, 0x12);

    assert_eq!(memory.read_word(0xFFFF), 0x1234);
}

#[test]
fn test_load_image_copies_from_address_zero() {
    let mut memory = AddressSpace::new();
    let loaded = memory.load_image(&[0xA9, 0x01, 0x00]).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(memory.read(0x0000), 0xA9);
    assert_eq!(memory.read(0x0001), 0x01);
    assert_eq!(memory.read(0x0003), 0x00);
}

#[test]
fn test_load_full_image() {
    let mut image = vec![0xEA; ADDRESS_SPACE_SIZE];
    image[0xFFFC] = 0x00;
    image[0xFFFD] = 0x04;

    let memory = AddressSpace::from_image(&image).unwrap();
    assert_eq!(memory.read_word(0xFFFC), 0x0400);
    assert_eq!(memory.read(0x1234), 0xEA);
}

#[test]
fn test_empty_image_rejected() {
    let mut memory = AddressSpace::new();
    assert!(matches!(memory.load_image(&[]), Err(ImageError::EmptyImage)));
}

#[test]
fn test_oversized_image_rejected_without_mutation() {
    let mut memory = AddressSpace::new();
    memory.write(0x0000, 0x55);

    let image = vec![0xFF; ADDRESS_SPACE_SIZE + 1];
    match memory.load_image(&image) {
        Err(ImageError::ImageTooLarge { len }) => assert_eq!(len, ADDRESS_SPACE_SIZE + 1),
        other => panic!("expected ImageTooLarge, got {:?}", other),
    }
    assert_eq!(memory.read(0x0000), 0x55);
}

#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("emu6502_image_{}.bin", std::process::id()));
    std::fs::write(&path, [0x4C, 0x00, 0x00]).unwrap();

    let mut memory = AddressSpace::new();
    let loaded = memory.load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(memory.read(0x0000), 0x4C);
}

#[test]
fn test_load_missing_file_reports_path() {
    let path = std::env::temp_dir().join("emu6502_missing_image_does_not_exist.bin");
    let mut memory = AddressSpace::new();

    match memory.load_file(&path) {
        Err(err @ ImageError::Io { .. }) => {
            assert!(err.to_string().contains("emu6502_missing_image_does_not_exist.bin"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

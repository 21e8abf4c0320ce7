use crate::*;
use std::io::Write;

// ========== Config ==========

#[test]
fn test_default_config() {
    let cfg = HuffConfig::default();
    assert_eq!(cfg.codec.max_input_len, config::DEFAULT_MAX_INPUT_LEN);
    assert_eq!(cfg.storage.extension, ".huff");
    assert!(!cfg.storage.verify_roundtrip);
}

#[test]
fn test_config_partial_json() {
    let cfg = HuffConfig::from_json_str(r#"{"codec":{"max_input_len":16}}"#).unwrap();
    assert_eq!(cfg.codec.max_input_len, 16);
    assert_eq!(cfg.storage, StorageConfig::default());
}

#[test]
fn test_config_empty_json() {
    let cfg = HuffConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, HuffConfig::default());
}

#[test]
fn test_config_json_roundtrip() {
    let mut cfg = HuffConfig::default();
    cfg.storage.extension = ".hc".into();
    cfg.storage.verify_roundtrip = true;
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(HuffConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn test_config_bad_json() {
    let err = HuffConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, HuffError::Serialization(_)));
}

#[test]
fn test_config_load_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"storage":{{"extension":".hz"}}}}"#).unwrap();
    let cfg = HuffConfig::load(f.path()).unwrap();
    assert_eq!(cfg.storage.extension, ".hz");
    assert_eq!(cfg.codec, CodecConfig::default());
}

#[test]
fn test_config_load_missing_file() {
    let err = HuffConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, HuffError::Io(_)));
}

// ========== Errors ==========

#[test]
fn test_error_display() {
    let e = HuffError::decode_error(12, "dead end");
    assert_eq!(e.to_string(), "Decode error at bit 12: dead end");
    let e = HuffError::InputTooLarge { len: 10, max: 4 };
    assert_eq!(e.to_string(), "Input too large: 10 bytes exceeds limit of 4");
    assert!(HuffError::mismatch("x").to_string().starts_with("Tree mismatch"));
}

#[test]
fn test_error_from_anyhow() {
    let e: HuffError = anyhow::anyhow!("boom").into();
    assert_eq!(e.to_string(), "boom");
}

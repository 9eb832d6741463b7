use super::*;

#[test]
fn codes_map_to_variants() {
    assert_eq!(DisposalMethod::from_code(0).unwrap(), DisposalMethod::None);
    assert_eq!(
        DisposalMethod::from_code(1).unwrap(),
        DisposalMethod::DoNotDispose
    );
    assert_eq!(
        DisposalMethod::from_code(2).unwrap(),
        DisposalMethod::RestoreBackground
    );
    assert_eq!(
        DisposalMethod::from_code(3).unwrap(),
        DisposalMethod::RestorePrevious
    );
    for code in 0..4u8 {
        assert_eq!(DisposalMethod::from_code(code).unwrap().code(), code);
    }
}

#[test]
fn reserved_codes_are_rejected() {
    for code in [4u8, 7, 255] {
        assert!(matches!(
            DisposalMethod::from_code(code),
            Err(GifError::InvalidAnimation(_))
        ));
    }
}

#[test]
fn decoder_methods_convert() {
    assert_eq!(
        DisposalMethod::from(gif::DisposalMethod::Any),
        DisposalMethod::None
    );
    assert_eq!(
        DisposalMethod::from(gif::DisposalMethod::Keep),
        DisposalMethod::DoNotDispose
    );
    assert_eq!(
        DisposalMethod::from(gif::DisposalMethod::Background),
        DisposalMethod::RestoreBackground
    );
    assert_eq!(
        DisposalMethod::from(gif::DisposalMethod::Previous),
        DisposalMethod::RestorePrevious
    );
}

#[test]
fn only_none_and_keep_accumulate() {
    assert!(DisposalMethod::None.accumulates());
    assert!(DisposalMethod::DoNotDispose.accumulates());
    assert!(!DisposalMethod::RestoreBackground.accumulates());
    assert!(!DisposalMethod::RestorePrevious.accumulates());
}

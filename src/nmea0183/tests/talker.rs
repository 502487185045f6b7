use crate::{
    Error,
    nmea0183::talker::{Talker, split_sentence_id},
};

#[test]
fn test_split_standard() {
    let id = split_sentence_id("GPGGA").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("GP", "GGA"));
    assert_eq!(id.talker_id(), Talker::Gps);

    let id = split_sentence_id("AIVDM").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("AI", "VDM"));
    assert_eq!(id.talker_id(), Talker::MobileAis);
}

#[test]
fn test_split_proprietary() {
    let id = split_sentence_id("PSRF").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("P", "SRF"));
    assert_eq!(id.talker_id(), Talker::Proprietary);

    let id = split_sentence_id("PGRMEX").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("P", "GRM"));

    let id = split_sentence_id("PUBX0001").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("P", "UBX"));

    // five characters are always split as talker + type
    let id = split_sentence_id("PGRMZ").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("PG", "RMZ"));
    assert_eq!(id.talker_id(), Talker::Unknown);
}

#[test]
fn test_split_transducer() {
    let id = split_sentence_id("YXMTW").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("YX", "MTW"));
    assert_eq!(id.talker_id(), Talker::Transducer);
}

#[test]
fn test_split_six_characters() {
    let id = split_sentence_id("GPGGAX").unwrap();
    assert_eq!((id.talker, id.sentence_type), ("GP", "GGA"));
}

#[test]
fn test_split_invalid_length() {
    for id in ["", "G", "GP", "GPG", "GPGG", "GPGGAXY", "ABCDEFGH"] {
        assert_eq!(split_sentence_id(id), Err(Error::InvalidSentence), "{id:?}");
    }
}

#[test]
fn test_talker_table() {
    assert_eq!(Talker::CODES.len(), 36);

    for code in Talker::CODES {
        let talker = Talker::from_code(code);
        assert!(talker.is_known(), "{code}");
        assert_eq!(talker.code(), *code);
    }

    assert_eq!(Talker::from_code("HE"), Talker::NorthSeekingGyro);
    assert_eq!(Talker::from_code("II"), Talker::IntegratedInstrumentation);
    assert_eq!(Talker::from_code("YX"), Talker::Transducer);
    assert_eq!(Talker::from_code("P"), Talker::Proprietary);
}

#[test]
fn test_unknown_talkers() {
    for code in ["", "G", "gp", "Gp", "ZZ", "GPS", "12"] {
        assert_eq!(Talker::from_code(code), Talker::Unknown, "{code:?}");
    }

    assert!(!Talker::Unknown.is_known());
    assert_eq!(Talker::Unknown.code(), "");
}

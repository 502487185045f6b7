use crate::{
    Error,
    nmea0183::checksum::{calculate, extract, format_checksum, validate, verify},
};

const GGA: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

#[test]
fn test_calculate() {
    assert_eq!(calculate(GGA), 0x47);
    assert_eq!(calculate(b"!AIVDM,2,1,3,A,ABCDE,2*55"), 0x55);
    assert_eq!(calculate(b"GPGGA,123456,data"), 0x41);
    assert_eq!(calculate(b"$"), 0x00);
    assert_eq!(calculate(b""), 0x00);
}

#[test]
fn test_extract() {
    assert_eq!(extract(GGA), Ok(0x47));
    assert_eq!(extract(b"$GPHDT,274.07,T*03\r\n"), Ok(0x03));
    assert_eq!(extract(b"$GPHDT,274.07,T*ab"), Ok(0xAB));
    assert_eq!(extract(b"$GPHDT,274.07,T"), Err(Error::InvalidSentence));
    assert_eq!(extract(b"$GPHDT,274.07,T*0"), Err(Error::InvalidSentence));
    assert_eq!(extract(b"$GPHDT,274.07,T*"), Err(Error::InvalidSentence));
    assert_eq!(extract(b"$GPHDT,274.07,T*zz"), Err(Error::InvalidSentence));
    assert_eq!(extract(b"$GPHDT,274.07,T*+1"), Err(Error::InvalidSentence));
}

#[test]
fn test_validate() {
    assert!(validate(GGA));
    assert!(!validate(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*FF"));
    assert_eq!(
        verify(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*FF"),
        Err(Error::ChecksumFailed {
            expected: 0x47,
            found: 0xFF
        })
    );
}

#[test]
fn test_checksum_is_optional() {
    let sentences: [&[u8]; 4] = [
        b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
        b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,\r\n",
        b"$GPXXX,anything at all",
        b"$GPHDT,274.07,T*1",
    ];

    for sentence in sentences {
        assert!(validate(sentence), "{:?}", String::from_utf8_lossy(sentence));
    }
}

#[test]
fn test_checksum_reinserted() {
    let bodies = [
        "GPHDT,274.07,T",
        "IIMTW,17.9,C",
        "AIVDM,1,1,,B,15M67FC000G?ufbE`FepT@3n00Sa,0",
        "WIMWV,214.8,R,0.1,K,A",
        "",
    ];

    for body in bodies {
        let cc = calculate(body.as_bytes());
        let sentence = format!("${body}*{}", format_checksum(cc));

        assert_eq!(extract(sentence.as_bytes()), Ok(cc), "{sentence}");
        assert!(validate(sentence.as_bytes()), "{sentence}");
    }
}

#[test]
fn test_format_checksum() {
    assert_eq!(format_checksum(0x00), "00");
    assert_eq!(format_checksum(0x0A), "0A");
    assert_eq!(format_checksum(0xFF), "FF");
}

use crate::{Error, MAX_FIELDS, nmea0183::tokenizer::tokenize};

#[test]
fn test_tokenize_gga() {
    let mut buffer = *b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
    let tokens = tokenize(&mut buffer).unwrap();

    assert_eq!(tokens.len(), 15);
    assert_eq!(tokens.sentence_id(), "GPGGA");
    assert_eq!(tokens.field(1), "123519");
    assert_eq!(tokens.field(9), "545.4");
    assert_eq!(tokens.field(13), "");
    assert_eq!(tokens.field(14), "");
    assert_eq!(tokens.get(15), None);
    assert_eq!(tokens.field(15), "");
}

#[test]
fn test_tokenize_in_place() {
    let mut buffer = *b"$GPHDT,274.07,T*03";
    {
        let tokens = tokenize(&mut buffer).unwrap();
        let fields: Vec<_> = tokens.iter().collect();
        assert_eq!(fields, ["GPHDT", "274.07", "T"]);
    }

    assert_eq!(&buffer, b"$GPHDT\x00274.07\x00T*03");
}

#[test]
fn test_tokenize_ais() {
    let mut buffer = *b"!AIVDM,2,1,3,A,ABCDE,2*55";
    let tokens = tokenize(&mut buffer).unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens.sentence_id(), "AIVDM");
    assert_eq!(tokens.field(5), "ABCDE");
}

#[test]
fn test_tokenize_without_commas() {
    let mut buffer = *b"$GPGGA";
    let tokens = tokenize(&mut buffer).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.sentence_id(), "GPGGA");

    let mut buffer = *b"$*00";
    let tokens = tokenize(&mut buffer).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.sentence_id(), "");

    let mut buffer = *b"$";
    let tokens = tokenize(&mut buffer).unwrap();
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_tokenize_stops_at_terminators() {
    let mut buffer = *b"$IIMTW,17.9,C\r\n,ignored";
    assert_eq!(tokenize(&mut buffer).unwrap().len(), 3);

    let mut buffer = *b"$IIMTW,17.9,C\n";
    assert_eq!(tokenize(&mut buffer).unwrap().len(), 3);

    let mut buffer = *b"$IIMTW,17.9,C\0,stale,bytes";
    assert_eq!(tokenize(&mut buffer).unwrap().len(), 3);
}

#[test]
fn test_tokenize_invalid() {
    let mut buffer = *b"GPHDT,274.07,T";
    assert_eq!(tokenize(&mut buffer), Err(Error::InvalidSentence));

    let mut buffer: [u8; 0] = [];
    assert_eq!(tokenize(&mut buffer), Err(Error::InvalidSentence));

    let mut buffer = "$GPTXT,01,01,02,caf\u{e9}".as_bytes().to_vec();
    assert_eq!(tokenize(&mut buffer), Err(Error::InvalidSentence));
}

#[test]
fn test_tokenize_field_count() {
    for commas in 0..MAX_FIELDS + 4 {
        let mut sentence = String::from("$GPXDR");
        for _ in 0..commas {
            sentence.push_str(",1");
        }

        let mut buffer = sentence.into_bytes();
        let result = tokenize(&mut buffer);

        if commas < MAX_FIELDS {
            assert_eq!(result.map(|tokens| tokens.len()), Ok(commas + 1));
        } else {
            assert_eq!(result, Err(Error::TooManyFields), "{commas} commas");
        }
    }
}

#[test]
fn test_tokenize_field_count_boundary() {
    let mut sentence = String::from("$GPXDR");
    sentence.push_str(&",".repeat(MAX_FIELDS - 1));
    let mut buffer = sentence.clone().into_bytes();
    assert_eq!(tokenize(&mut buffer).map(|t| t.len()), Ok(MAX_FIELDS));

    sentence.push(',');
    let mut buffer = sentence.into_bytes();
    assert_eq!(tokenize(&mut buffer), Err(Error::TooManyFields));
}

use nmea0183_decoder::{MAX_SENTENCE_LEN, Nmea0183Context, ParserConfig};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut context = Nmea0183Context::new();
    let config = ParserConfig::new().error_callback(|report| match report.message {
        Some(message) => println!("{} error: {} ({})", report.category, report.error, message),
        None => println!("{} error: {}", report.category, report.error),
    });

    if let Err(e) = context.init(config) {
        println!("Initialization failed: {e}");
        return;
    }

    let sentences: [&[u8]; 7] = [
        b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
        b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n",
        b"$HEHDT,274.07,T*19\r\n",
        b"!AIVDM,2,1,3,A,ABCDE,2*55\r\n",
        b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*FF\r\n",
        b"$GPXXX,1,2,3*53\r\n",
        b"$GPGGA,123519,4807.038,N\r\n",
    ];

    let mut scratch = [0u8; MAX_SENTENCE_LEN];
    for sentence in sentences {
        let line = String::from_utf8_lossy(sentence);
        match context.parse(sentence, &mut scratch) {
            Ok(()) => println!("Parsed: {}", line.trim_end()),
            Err(e) => println!("Rejected ({e}): {}", line.trim_end()),
        }
    }

    match context.gnss_data() {
        Ok(gnss) => println!(
            "Position: {:.5}, {:.5} at {:02}:{:02}:{:02}, {:?} satellites, speed {:?} kn",
            gnss.latitude.degrees,
            gnss.longitude.degrees,
            gnss.utc_time.hour,
            gnss.utc_time.minute,
            gnss.utc_time.second,
            gnss.satellites_used,
            gnss.speed_knots,
        ),
        Err(e) => println!("No GNSS data: {e}"),
    }

    match context.heading_data() {
        Ok(heading) => println!("True heading: {:?}", heading.heading_true),
        Err(e) => println!("No heading data: {e}"),
    }

    match context.ais_data() {
        Ok(ais) => println!(
            "AIS fragment {}/{} on channel {:?}: {}",
            ais.vdm.sentence_number,
            ais.vdm.total_sentences,
            ais.vdm.channel,
            ais.vdm.payload
        ),
        Err(e) => println!("No AIS data: {e}"),
    }

    context.cleanup();
}

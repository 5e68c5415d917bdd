use super::*;

#[test]
fn fps_validation_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(24, 0).is_err());
    assert_eq!(Fps::new(24, 1).unwrap(), Fps::default());
}

#[test]
fn fps_parses_integer_and_rational() {
    assert_eq!("24".parse::<Fps>().unwrap(), Fps { num: 24, den: 1 });
    assert_eq!(
        " 30000/1001 ".parse::<Fps>().unwrap(),
        Fps {
            num: 30000,
            den: 1001
        }
    );
    assert!("0".parse::<Fps>().is_err());
    assert!("24/0".parse::<Fps>().is_err());
    assert!("fast".parse::<Fps>().is_err());
    assert!("-5".parse::<Fps>().is_err());
}

#[test]
fn fps_display_round_trips_through_parse() {
    for s in ["24", "30000/1001"] {
        assert_eq!(s.parse::<Fps>().unwrap().to_string(), s);
    }
}

#[test]
fn frames_to_secs_uses_rational_rate() {
    let fps = Fps::new(24, 1).unwrap();
    assert!((fps.frames_to_secs(48) - 2.0).abs() < 1e-12);
    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.frames_to_secs(30000) - 1001.0).abs() < 1e-9);
}

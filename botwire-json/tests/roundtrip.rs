use botwire_json::{
    Decode, DecodeError, Encode, Kind, ObjectWriter, Value, expect_object, parse,
};

// Hand-implemented records in the shape the types crate uses, so the
// trait pair is exercised end to end without depending on it.

#[derive(Debug, PartialEq)]
struct Location {
    longitude: f64,
    latitude: f64,
}

impl Encode for Location {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("longitude", &self.longitude);
        obj.field("latitude", &self.latitude);
        obj.finish();
    }
}

impl Decode for Location {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            longitude: map.required("longitude")?,
            latitude: map.required("latitude")?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct Venue {
    location: Location,
    title: String,
    address: String,
    foursquare_id: Option<String>,
}

impl Encode for Venue {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("location", &self.location);
        obj.field("title", &self.title);
        obj.field("address", &self.address);
        obj.field_opt("foursquare_id", &self.foursquare_id);
        obj.finish();
    }
}

impl Decode for Venue {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            location: map.required("location")?,
            title: map.required("title")?,
            address: map.required("address")?,
            foursquare_id: map.optional("foursquare_id")?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct PollOption {
    text: String,
    voter_count: i64,
}

impl Encode for PollOption {
    fn encode(&self, out: &mut String) {
        let mut obj = ObjectWriter::new(out);
        obj.field("text", &self.text);
        obj.field("voter_count", &self.voter_count);
        obj.finish();
    }
}

impl Decode for PollOption {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = expect_object(value)?;
        Ok(Self {
            text: map.required("text")?,
            voter_count: map.required("voter_count")?,
        })
    }
}

fn venue() -> Venue {
    Venue {
        location: Location {
            longitude: -0.1278,
            latitude: 51.5074,
        },
        title: "Trafalgar Square".to_owned(),
        address: "London WC2N 5DN".to_owned(),
        foursquare_id: None,
    }
}

// ── Scalar round-trips ────────────────────────────────────────────────────────

#[test]
fn roundtrip_i64_extremes() {
    for v in [0i64, -1, i64::MAX, i64::MIN, 1_234_567_890] {
        assert_eq!(i64::from_json(&v.to_json()).unwrap(), v);
    }
}

#[test]
fn roundtrip_bool() {
    assert_eq!(true.to_json(), "true");
    assert_eq!(bool::from_json("true").unwrap(), true);
    assert_eq!(bool::from_json(&false.to_json()).unwrap(), false);
}

#[test]
fn roundtrip_f64() {
    for v in [0.5f64, -0.1278, 51.5074, 1e-4] {
        assert_eq!(f64::from_json(&v.to_json()).unwrap(), v);
    }
}

#[test]
fn roundtrip_unicode_string() {
    let s = "Привет, 世界! 😀".to_owned();
    assert_eq!(String::from_json(&s.to_json()).unwrap(), s);
}

// ── String escaping ───────────────────────────────────────────────────────────

#[test]
fn roundtrip_escaped_string() {
    let s = "quote \" backslash \\ newline \n tab \t cr \r soh \u{1}".to_owned();
    let text = s.to_json();
    // the wire form holds only escapes, no raw control bytes
    assert!(!text.bytes().any(|b| b < 0x20));
    assert_eq!(String::from_json(&text).unwrap(), s);
}

// ── Record round-trips ────────────────────────────────────────────────────────

#[test]
fn roundtrip_nested_record() {
    let v = venue();
    let text = v.to_json();
    assert_eq!(
        text,
        r#"{"location":{"longitude":-0.1278,"latitude":51.5074},"title":"Trafalgar Square","address":"London WC2N 5DN"}"#
    );
    assert_eq!(Venue::from_json(&text).unwrap(), v);
}

#[test]
fn roundtrip_record_vector() {
    let options = vec![
        PollOption {
            text: "yes".to_owned(),
            voter_count: 3,
        },
        PollOption {
            text: "no".to_owned(),
            voter_count: 0,
        },
    ];
    let text = options.to_json();
    assert_eq!(Vec::<PollOption>::from_json(&text).unwrap(), options);
}

#[test]
fn absent_option_is_omitted_not_null() {
    let mut v = venue();
    assert!(!v.to_json().contains("foursquare_id"));

    v.foursquare_id = Some("4sq-1".to_owned());
    let text = v.to_json();
    assert!(text.ends_with(r#","foursquare_id":"4sq-1"}"#));
    assert_eq!(Venue::from_json(&text).unwrap(), v);
}

#[test]
fn unknown_fields_are_ignored() {
    let text = r#"{
        "location": {"longitude": 1.0, "latitude": 2.0, "horizontal_accuracy": 15.0},
        "title": "t",
        "address": "a",
        "google_place_id": "xyz"
    }"#;
    let v = Venue::from_json(text).unwrap();
    assert_eq!(v.title, "t");
    assert_eq!(v.foursquare_id, None);
}

// ── Decode failures ───────────────────────────────────────────────────────────

#[test]
fn missing_nested_field_names_the_path() {
    let err = Venue::from_json(r#"{"location": {"longitude": 1.0}, "title": "t", "address": "a"}"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "location: missing required field `latitude`"
    );
}

#[test]
fn kind_mismatch_names_both_kinds() {
    let err = PollOption::from_json(r#"{"text": "yes", "voter_count": "many"}"#).unwrap_err();
    assert_eq!(
        err,
        DecodeError::in_field(
            "voter_count",
            DecodeError::Mismatch {
                expected: Kind::Int,
                found: Kind::Str,
            }
        )
    );
}

#[test]
fn malformed_document_is_a_syntax_error() {
    let err = Venue::from_json("{invalid json").unwrap_err();
    assert!(matches!(err, DecodeError::Syntax(_)));
}

// ── Value passthrough ─────────────────────────────────────────────────────────

#[test]
fn value_display_matches_encode() {
    let value = parse(r#"{"a": [1, 2.5, "x", null, true], "b": {}}"#).unwrap();
    assert_eq!(value.to_string(), r#"{"a":[1,2.5,"x",null,true],"b":{}}"#);
    // reparsing the compact form yields the same tree
    assert_eq!(parse(&value.to_string()).unwrap(), value);
}

use result_rail::{BoxedError, Panicked, Result};
use std::error::Error;

#[test]
fn panicked_reads_str_and_string_payloads() {
    let from_str = Panicked::from_payload(Box::new("static message"));
    assert_eq!(from_str.message(), "static message");

    let from_string = Panicked::from_payload(Box::new(String::from("owned message")));
    assert_eq!(from_string.message(), "owned message");

    let opaque = Panicked::from_payload(Box::new(17_u32));
    assert_eq!(opaque.message(), "Box<dyn Any>");
}

#[test]
fn panicked_display_and_error() {
    let panicked = Panicked::new("index out of bounds");
    assert_eq!(panicked.to_string(), "transform panicked: index out of bounds");
    assert!(panicked.source().is_none());
}

#[test]
fn caught_panic_formats_through_boxed_error() {
    let r: Result<usize, BoxedError> = Result::success(Vec::<u8>::new()).map_catch_unwind(|v| {
        if v.is_empty() {
            panic!("empty buffer: {}", v.len());
        }
        v.len()
    });

    let error = r.into_error().unwrap();
    assert!(error.is::<Panicked>());
    assert_eq!(error.to_string(), "transform panicked: empty buffer: 0");
}

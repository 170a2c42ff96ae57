use result_rail::traits::WithError;
use result_rail::Result;

#[test]
fn fmap_error_maps_rail_failure() {
    let result = Result::<i32, &str>::failure("oops");
    let mapped: Result<i32, String> = result.fmap_error(|e| format!("ERR:{e}"));

    assert_eq!(mapped.into_error(), Some("ERR:oops".to_string()));
}

#[test]
fn fmap_error_keeps_rail_success() {
    let result = Result::<i32, &str>::success(5);
    let mapped: Result<i32, usize> = result.fmap_error(|e| e.len());

    assert_eq!(mapped.into_value(), Some(5));
}

#[test]
fn fmap_error_maps_std_failure() {
    let result: std::result::Result<i32, u16> = Err(404);
    let mapped = result.fmap_error(|code| format!("HTTP {code}"));

    assert_eq!(mapped, Err("HTTP 404".to_string()));
}

#[test]
fn to_result_converts_rail_result_to_std() {
    assert_eq!(Result::<i32, &str>::success(1).to_result(), Ok(1));
    assert_eq!(Result::<i32, &str>::failure("e").to_result(), Err("e"));
}

#[test]
fn to_result_is_identity_for_std_result() {
    let ok: std::result::Result<i32, &str> = Ok(2);
    assert_eq!(ok.to_result(), Ok(2));
}

#[test]
fn to_rail_converts_std_result() {
    let ok: std::result::Result<i32, &str> = Ok(1);
    let err: std::result::Result<i32, &str> = Err("e");

    assert_eq!(ok.to_rail(), Result::success(1));
    assert_eq!(err.to_rail(), Result::failure("e"));
}

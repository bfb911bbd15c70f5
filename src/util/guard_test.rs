use super::*;

// =============================================================
// evaluate
// =============================================================

#[test]
fn authenticated_navigation_is_allowed() {
    assert_eq!(evaluate(true, "/weather"), GuardDecision::Allow);
}

#[test]
fn unauthenticated_navigation_redirects_with_origin() {
    assert_eq!(
        evaluate(false, "/weather"),
        GuardDecision::Redirect {
            to: "/auth?from=%2Fweather".to_owned()
        }
    );
}

#[test]
fn decision_depends_only_on_authenticated_flag() {
    for path in ["/weather", "/", "/anything/else"] {
        assert_eq!(evaluate(true, path), GuardDecision::Allow);
        assert!(matches!(evaluate(false, path), GuardDecision::Redirect { .. }));
    }
}

// =============================================================
// login_redirect
// =============================================================

#[test]
fn login_redirect_drops_unsafe_origin() {
    assert_eq!(login_redirect("//evil.example"), "/auth");
    assert_eq!(login_redirect("https://evil.example"), "/auth");
    assert_eq!(login_redirect("/auth"), "/auth");
}

// =============================================================
// return_target
// =============================================================

#[test]
fn return_target_defaults_to_home() {
    assert_eq!(return_target(None), HOME_PATH);
}

#[test]
fn return_target_honours_local_path() {
    assert_eq!(return_target(Some("/weather")), "/weather");
}

#[test]
fn return_target_rejects_external_and_login_paths() {
    assert_eq!(return_target(Some("//evil.example/x")), HOME_PATH);
    assert_eq!(return_target(Some("/\\evil.example")), HOME_PATH);
    assert_eq!(return_target(Some("http://evil.example")), HOME_PATH);
    assert_eq!(return_target(Some("/auth")), HOME_PATH);
}

#[test]
fn only_the_login_route_counts_as_login() {
    assert_eq!(login_redirect("/authors"), "/auth?from=%2Fauthors");
    assert_eq!(login_redirect("/auth/reset"), "/auth");
    assert_eq!(login_redirect("/auth?from=%2Fweather"), "/auth");
    assert_eq!(return_target(Some("/authors")), "/authors");
    assert_eq!(return_target(Some("/auth#top")), HOME_PATH);
}

// =============================================================
// requested_location
// =============================================================

#[test]
fn requested_location_keeps_query() {
    assert_eq!(requested_location("/weather", ""), "/weather");
    assert_eq!(requested_location("/weather", "units=imperial"), "/weather?units=imperial");
}

#[test]
fn query_survives_the_login_round_trip() {
    let to = login_redirect(&requested_location("/weather", "units=imperial&x=1"));
    assert_eq!(to, "/auth?from=%2Fweather%3Funits%3Dimperial%26x%3D1");

    let (_, encoded) = to.split_once('?').unwrap();
    let (_, from) = form_urlencoded::parse(encoded.as_bytes()).next().unwrap();
    assert_eq!(return_target(Some(&*from)), "/weather?units=imperial&x=1");
}

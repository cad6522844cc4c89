//! End-to-end coverage of the public codec surface, exercised the way a
//! downstream crate would: through `placekey::*` only, no `pub(crate)`
//! internals.

use approx::assert_abs_diff_eq;
use placekey::error::PlacekeyError;

#[test]
fn seed_coordinates_encode_to_their_known_placekeys() {
    let cases = [
        (0.0, 0.0, "@dvt-smp-tvz"),
        (40.712772, -74.006058, "@627-wbz-tjv"),
        (39.9289, 116.3883, "@6qk-v3d-brk"),
    ];

    for (lat, lng, expected) in cases {
        let pk = placekey::geo_to_placekey(lat, lng).unwrap();
        assert_eq!(pk, expected);
        assert!(placekey::validate_placekey(expected));
    }
}

#[test]
fn geo_to_placekey_to_geo_round_trips_within_cell_tolerance() {
    let points = [
        (51.5074, -0.1278),
        (-33.8688, 151.2093),
        (35.6895, 139.6917),
        (-22.9068, -43.1729),
    ];

    for (lat, lng) in points {
        let pk = placekey::geo_to_placekey(lat, lng).unwrap();
        let (got_lat, got_lng) = placekey::placekey_to_geo(&pk).unwrap();
        // a resolution-10 cell is on the order of meters across, so the
        // centroid can differ from the input by a small fraction of a
        // degree without the round trip being wrong.
        assert_abs_diff_eq!(got_lat, lat, epsilon = 0.001);
        assert_abs_diff_eq!(got_lng, lng, epsilon = 0.001);
    }
}

#[test]
fn poles_and_antimeridian_are_valid_inputs() {
    for (lat, lng) in [(90.0, 0.0), (-90.0, 0.0), (0.0, 180.0), (0.0, -180.0)] {
        let pk = placekey::geo_to_placekey(lat, lng).unwrap();
        assert!(placekey::validate_placekey(&pk));
    }
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    assert!(placekey::geo_to_placekey(90.1, 0.0).is_err());
    assert!(placekey::geo_to_placekey(-90.1, 0.0).is_err());
    assert!(placekey::geo_to_placekey(0.0, 180.1).is_err());
    assert!(placekey::geo_to_placekey(0.0, -180.1).is_err());
}

#[test]
fn a_where_with_a_what_prefix_validates_and_decodes() {
    let pk = "226@5vg-7gq-5mk";
    assert!(placekey::validate_placekey(pk));
    assert!(placekey::placekey_to_geo(pk).is_ok());
}

#[test]
fn malformed_text_is_rejected_not_panicked_on() {
    let bad = [
        "",
        "@",
        "what@where@extra",
        "@xx-xxx-xxx",
        "@dvt-smp-tv!",
        "not a placekey at all",
    ];
    for pk in bad {
        assert!(!placekey::validate_placekey(pk), "{pk:?} should be invalid");
        assert!(matches!(
            placekey::placekey_to_cell(pk),
            Err(PlacekeyError::Parse(_))
        ));
    }
}

#[test]
fn distance_between_a_placekey_and_itself_is_zero() {
    let pk = placekey::geo_to_placekey(48.8566, 2.3522).unwrap();
    assert_eq!(placekey::placekey_distance(&pk, &pk).unwrap(), 0.0);
}

#[test]
fn distance_matches_the_known_new_york_beijing_scenario() {
    let d = placekey::placekey_distance("@627-wbz-tjv", "@6qk-v3d-brk").unwrap();
    // NYC to Beijing is roughly 11,000 km great-circle.
    assert!((10_800_000.0..11_200_000.0).contains(&d), "got {d}");
}

#[test]
fn distance_propagates_errors_from_either_argument() {
    assert!(placekey::placekey_distance("not a placekey", "@dvt-smp-tvz").is_err());
    assert!(placekey::placekey_distance("@dvt-smp-tvz", "not a placekey").is_err());
}

#[test]
fn distance_is_symmetric() {
    let a = placekey::geo_to_placekey(48.8566, 2.3522).unwrap();
    let b = placekey::geo_to_placekey(35.6895, 139.6917).unwrap();
    assert_eq!(
        placekey::placekey_distance(&a, &b).unwrap(),
        placekey::placekey_distance(&b, &a).unwrap()
    );
}

#[test]
fn encoding_is_deterministic() {
    let a = placekey::geo_to_placekey(12.34, 56.78).unwrap();
    let b = placekey::geo_to_placekey(12.34, 56.78).unwrap();
    assert_eq!(a, b);
}

#[test]
fn a_where_that_decodes_to_a_grid_invalid_cell_is_rejected() {
    // Every character is the alphabet's last symbol, which unshortens to a
    // cell whose unused child-digit positions are all `7` -- a pattern h3o
    // rejects outright as an invalid direction, not merely an unassigned
    // cell.
    let pk = "@zzz-zzz-zzz";
    assert!(!placekey::validate_placekey(pk));
    assert!(matches!(
        placekey::placekey_to_cell(pk),
        Err(PlacekeyError::Grid(_))
    ));
}

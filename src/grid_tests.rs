use super::*;

#[test]
fn rejects_out_of_range_latitude() {
    assert!(matches!(
        cell_from_latlng(91.0, 0.0),
        Err(DomainError { axis: Axis::Latitude, .. })
    ));
}

#[test]
fn rejects_out_of_range_longitude() {
    assert!(matches!(
        cell_from_latlng(0.0, 181.0),
        Err(DomainError { axis: Axis::Longitude, .. })
    ));
}

#[test]
fn accepts_poles_and_antimeridian() {
    assert!(cell_from_latlng(90.0, 0.0).is_ok());
    assert!(cell_from_latlng(-90.0, 0.0).is_ok());
    assert!(cell_from_latlng(0.0, 180.0).is_ok());
    assert!(cell_from_latlng(0.0, -180.0).is_ok());
}

#[test]
fn cell_roundtrips_through_the_grid_library() {
    let cell = cell_from_latlng(40.712772, -74.006058).expect("valid coordinate");
    assert!(is_valid(cell));
    let (lat, lng) = latlng_from_cell(cell).expect("cell was just minted as valid");
    assert!((lat - 40.712772).abs() < 0.01);
    assert!((lng - -74.006058).abs() < 0.01);
}

#[test]
fn garbage_cell_id_is_invalid() {
    assert!(!is_valid(0));
    assert!(latlng_from_cell(0).is_err());
}

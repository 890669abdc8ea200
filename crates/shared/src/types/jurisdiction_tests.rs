use super::jurisdiction::Jurisdiction;
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case("NSW", Jurisdiction::Nsw)]
#[case("vic", Jurisdiction::Vic)]
#[case(" QLD ", Jurisdiction::Qld)]
#[case("WA", Jurisdiction::Wa)]
#[case("SA", Jurisdiction::Sa)]
#[case("TAS", Jurisdiction::Tas)]
#[case("ACT", Jurisdiction::Act)]
#[case("NT", Jurisdiction::Nt)]
#[case("Federal", Jurisdiction::Federal)]
fn test_jurisdiction_from_str(#[case] input: &str, #[case] expected: Jurisdiction) {
    assert_eq!(Jurisdiction::from_str(input).unwrap(), expected);
}

#[test]
fn test_unknown_jurisdiction_rejected() {
    assert!(Jurisdiction::from_str("XYZ").is_err());
    assert!(Jurisdiction::from_str("").is_err());
    assert!(Jurisdiction::from_str("New South Wales").is_err());
}

#[test]
fn test_display_round_trips_through_code() {
    for j in Jurisdiction::ALL {
        assert_eq!(Jurisdiction::from_str(&j.to_string()).unwrap(), j);
    }
    assert_eq!(Jurisdiction::Federal.to_string(), "Federal");
}

#[test]
fn test_state_names() {
    assert_eq!(
        Jurisdiction::from_state_name("Australian Capital Territory"),
        Some(Jurisdiction::Act)
    );
    assert_eq!(
        Jurisdiction::from_state_name("Northern Territory"),
        Some(Jurisdiction::Nt)
    );
    assert_eq!(Jurisdiction::from_state_name("Federal"), None);
    assert_eq!(Jurisdiction::from_state_name("Atlantis"), None);
    assert_eq!(Jurisdiction::Federal.state_name(), None);

    let mapped = Jurisdiction::ALL
        .iter()
        .filter(|j| j.state_name().is_some())
        .count();
    assert_eq!(mapped, 8);
}

#[test]
fn test_serde_uses_dataset_codes() {
    let json = serde_json::to_string(&Jurisdiction::Nsw).unwrap();
    assert_eq!(json, "\"NSW\"");

    let parsed: Jurisdiction = serde_json::from_str("\"Federal\"").unwrap();
    assert_eq!(parsed, Jurisdiction::Federal);
}

#[test]
fn test_ordering_follows_display_order() {
    let mut shuffled = vec![Jurisdiction::Federal, Jurisdiction::Act, Jurisdiction::Nsw];
    shuffled.sort();
    assert_eq!(
        shuffled,
        vec![Jurisdiction::Nsw, Jurisdiction::Act, Jurisdiction::Federal]
    );
}

#[test]
fn test_index_matches_all_position() {
    for (position, j) in Jurisdiction::ALL.iter().enumerate() {
        assert_eq!(j.index(), position);
    }
}

use configtool::error::ConfigToolError;
use configtool::widget::{list_to_str, str_to_list, validate_numeric_list, BiDict};

#[test]
fn test_str_to_list_trims_and_drops_empty_segments() {
    assert_eq!(str_to_list(" 123, 456 ,,789 "), vec!["123", "456", "789"]);
}

#[test]
fn test_str_to_list_empty_input() {
    assert_eq!(str_to_list(""), Vec::<String>::new());
    assert_eq!(str_to_list(" , , "), Vec::<String>::new());
}

#[test]
fn test_list_to_str_joins_without_spaces() {
    let items = vec!["123".to_string(), "456".to_string(), "789".to_string()];
    assert_eq!(list_to_str(&items), "123,456,789");
}

#[test]
fn test_normalized_list_round_trips() {
    let items = vec!["10001".to_string(), "20002".to_string()];
    assert_eq!(str_to_list(&list_to_str(&items)), items);
}

#[test]
fn test_validate_numeric_list_accepts_digits_and_noise() {
    assert!(validate_numeric_list("123, 456 ,,789 ").is_ok());
    assert!(validate_numeric_list("").is_ok());
}

#[test]
fn test_validate_numeric_list_rejects_non_digits() {
    let err = validate_numeric_list("123, abc, 789").unwrap_err();
    assert!(matches!(err, ConfigToolError::InvalidListItem(item) if item == "abc"));
}

fn sample_bidict() -> BiDict {
    BiDict::new(
        &[("by_hand", "Manual"), ("qr_login", "QR"), ("auto_login", "Auto")],
        "QR",
    )
}

#[test]
fn test_bidict_round_trips_every_token() {
    let bidict = sample_bidict();
    for token in ["by_hand", "qr_login", "auto_login"] {
        assert_eq!(bidict.to_token(bidict.to_display(token)).unwrap(), token);
    }
}

#[test]
fn test_bidict_unknown_token_falls_back() {
    let bidict = sample_bidict();
    assert_eq!(bidict.to_display("token_from_the_future"), "QR");
}

#[test]
fn test_bidict_unknown_label_errors() {
    let bidict = sample_bidict();
    let err = bidict.to_token("Not A Label").unwrap_err();
    assert!(matches!(err, ConfigToolError::UnmappedLabel(label) if label == "Not A Label"));
}

#[test]
fn test_bidict_labels_keep_mapping_order() {
    assert_eq!(sample_bidict().labels(), vec!["Manual", "QR", "Auto"]);
}

#[test]
#[should_panic(expected = "duplicate label")]
fn test_bidict_rejects_duplicate_labels() {
    BiDict::new(&[("a", "Same"), ("b", "Same")], "Same");
}

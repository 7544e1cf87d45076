use configtool::binder::{reconcile_by_position, AccountBinding, CommonBinding};
use configtool::config::{AccountConfig, CommonConfig, ExchangeItemConfig};
use configtool::widget::SpinBox;

#[test]
fn test_reconcile_preserves_unbound_fields() {
    // check_update_on_end and enable_multiprocessing exist in the document
    // schema but have no form control.
    let mut base = CommonConfig::default();
    base.check_update_on_end = true;
    base.enable_multiprocessing = true;

    let binding = CommonBinding::project(&CommonConfig::default());
    let merged = binding.reconcile(&base);

    assert!(merged.check_update_on_end);
    assert!(merged.enable_multiprocessing);
}

#[test]
fn test_reconcile_preserves_hand_added_keys() {
    let mut base = CommonConfig::default();
    base.extra.insert(
        "my_experimental_flag".to_string(),
        toml::Value::Boolean(true),
    );

    let binding = CommonBinding::project(&CommonConfig::default());
    let merged = binding.reconcile(&base);

    assert_eq!(
        merged.extra.get("my_experimental_flag"),
        Some(&toml::Value::Boolean(true))
    );
}

#[test]
fn test_reconcile_writes_edited_fields_into_base_copy() {
    let base = CommonConfig::default();

    let mut binding = CommonBinding::project(&base);
    binding.force_use_portable_chrome.checked = true;
    binding.http_timeout.set_value(30);
    binding.log_level.set_current("debug");

    let merged = binding.reconcile(&base);

    assert!(merged.force_use_portable_chrome);
    assert_eq!(merged.http_timeout, 30);
    assert_eq!(merged.log_level, "debug");
}

#[test]
fn test_reconcile_drops_runtime_signing_token() {
    let mut base = AccountConfig::default();
    base.djc_sign = Some("signed-at-runtime".to_string());

    let binding = AccountBinding::project(&base);
    let merged = binding.reconcile(&base);

    assert_eq!(merged.djc_sign, None);
}

#[test]
fn test_login_mode_round_trips_through_display_label() {
    let mut base = AccountConfig::default();
    base.login_mode = "auto_login".to_string();

    let binding = AccountBinding::project(&base);
    assert_eq!(binding.login_mode.current(), "Password auto login");
    assert!(binding.uses_password_login());

    let merged = binding.reconcile(&base);
    assert_eq!(merged.login_mode, "auto_login");
}

#[test]
fn test_unknown_login_mode_falls_back_to_qr() {
    let mut base = AccountConfig::default();
    base.login_mode = "token_from_a_newer_release".to_string();

    let binding = AccountBinding::project(&base);
    assert_eq!(binding.login_mode.current(), "QR code / avatar login");

    // The fallback label is a real choice, so saving normalizes the token.
    let merged = binding.reconcile(&base);
    assert_eq!(merged.login_mode, "qr_login");
}

#[test]
fn test_invalid_list_input_keeps_persisted_value() {
    let mut base = CommonConfig::default();
    base.auto_send_card_target_qqs = vec!["111".to_string()];

    let mut binding = CommonBinding::project(&base);
    binding.auto_send_card_target_qqs.text = "111, not-a-qq".to_string();

    let merged = binding.reconcile(&base);
    assert_eq!(merged.auto_send_card_target_qqs, vec!["111"]);
}

#[test]
fn test_valid_list_input_is_normalized_on_save() {
    let base = CommonConfig::default();

    let mut binding = CommonBinding::project(&base);
    binding.auto_send_card_target_qqs.text = " 123, 456 ,,789 ".to_string();

    let merged = binding.reconcile(&base);
    assert_eq!(merged.auto_send_card_target_qqs, vec!["123", "456", "789"]);
}

#[test]
fn test_spinbox_clamps_out_of_range_input() {
    let mut spin = SpinBox::new(5, 0, 10);
    spin.set_value(9999);
    assert_eq!(spin.value(), 10);
    spin.set_value(-3);
    assert_eq!(spin.value(), 0);
}

#[test]
fn test_positional_reconcile_matches_by_index() {
    let base = vec![
        ExchangeItemConfig::new("1", "first"),
        ExchangeItemConfig::new("2", "second"),
    ];
    let bindings: Vec<_> = base
        .iter()
        .map(configtool::binder::account::ExchangeItemBinding::project)
        .collect();

    let merged = reconcile_by_position(&bindings, &base, |b, c| b.reconcile(c));
    assert_eq!(merged, base);
}

#[test]
fn test_positional_reconcile_uses_defaults_past_base_end() {
    let base: Vec<ExchangeItemConfig> = Vec::new();
    let extra_binding = configtool::binder::account::ExchangeItemBinding::project(
        &ExchangeItemConfig::new("9", "added this session"),
    );

    let merged = reconcile_by_position(&[extra_binding], &base, |b, c| b.reconcile(c));

    // The base entry is a schema default; only the bound count comes from
    // the binding, the id/name of the fresh default stay empty.
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, "");
    assert_eq!(merged[0].count, 0);
}

#[test]
fn test_positional_reconcile_drops_base_entries_past_ui_end() {
    let base = vec![
        ExchangeItemConfig::new("1", "kept"),
        ExchangeItemConfig::new("2", "dropped"),
    ];
    let bindings = vec![configtool::binder::account::ExchangeItemBinding::project(
        &base[0],
    )];

    let merged = reconcile_by_position(&bindings, &base, |b, c| b.reconcile(c));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, "1");
}

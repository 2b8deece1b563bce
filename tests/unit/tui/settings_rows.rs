use super::*;

#[test]
fn values_render_for_display() {
    let settings = FormSettings::default();
    assert_eq!(SettingKey::Theme.value(&settings), "light");
    assert_eq!(SettingKey::Width.value(&settings), "600");
    assert_eq!(SettingKey::ShowLabels.value(&settings), "on");
    assert_eq!(SettingKey::DefaultRequired.value(&settings), "off");
    assert_eq!(SettingKey::SubmitAction.value(&settings), "message");
}

#[test]
fn cycling_enums_wraps_around() {
    let mut settings = FormSettings::default();
    let mut seen = Vec::new();
    for _ in 0..3 {
        let patch = SettingKey::Theme.cycled(&settings).unwrap();
        settings.apply(patch);
        seen.push(settings.theme);
    }
    assert_eq!(seen, [Theme::Dark, Theme::Minimal, Theme::Light]);

    let patch = SettingKey::SubmitAction.cycled(&settings).unwrap();
    assert_eq!(patch.submit_action, Some(SubmitAction::Redirect));
}

#[test]
fn cycling_flags_toggles() {
    let settings = FormSettings::default();
    assert_eq!(
        SettingKey::Validation.cycled(&settings).unwrap().validation,
        Some(false)
    );
    assert_eq!(
        SettingKey::DefaultRequired
            .cycled(&settings)
            .unwrap()
            .default_required,
        Some(true)
    );
    assert!(SettingKey::Width.cycled(&settings).is_none());
    assert!(SettingKey::SuccessMessage.cycled(&settings).is_none());
}

#[test]
fn text_input_parsing() {
    assert_eq!(
        SettingKey::Width.patch_from_input(" 720 ").unwrap().width,
        Some(720)
    );
    assert!(SettingKey::Padding.patch_from_input("-4").is_none());
    assert!(SettingKey::BorderRadius.patch_from_input("big").is_none());
    assert_eq!(
        SettingKey::RedirectUrl
            .patch_from_input(" https://example.com ")
            .unwrap()
            .redirect_url
            .as_deref(),
        Some("https://example.com")
    );
    assert_eq!(
        SettingKey::SuccessMessage
            .patch_from_input("Thanks!")
            .unwrap()
            .success_message
            .as_deref(),
        Some("Thanks!")
    );
    assert!(SettingKey::Theme.patch_from_input("dark").is_none());
}

#[test]
fn every_setting_has_a_label() {
    for key in SettingKey::ALL {
        assert!(!key.label().is_empty());
        let settings = FormSettings::default();
        let editable = key.cycled(&settings).is_some() || key.patch_from_input("1").is_some();
        assert!(editable, "{key:?} cannot be edited");
    }
}

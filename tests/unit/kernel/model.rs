use super::*;
use crate::models::DEFAULT_HISTORY_LIMIT;

fn model_with(types: &[FieldType]) -> (FormModel, Vec<FieldId>) {
    let mut model = FormModel::new();
    let ids = types.iter().map(|t| model.add_field(*t, None).id).collect();
    (model, ids)
}

fn order(model: &FormModel) -> Vec<FieldId> {
    model.document().ids().collect()
}

#[test]
fn add_field_appends_or_inserts() {
    let (mut model, ids) = model_with(&[FieldType::Text, FieldType::Email]);
    let inserted = model.add_field(FieldType::Number, Some(1));
    assert_eq!(order(&model), vec![ids[0], inserted.id, ids[1]]);

    let past_end = model.add_field(FieldType::Date, Some(99));
    assert_eq!(model.document().fields.last().map(|f| f.id), Some(past_end.id));
    assert_eq!(model.history().undo_depth(), 4);
}

#[test]
fn add_field_applies_default_required_to_inputs_only() {
    let mut model = FormModel::new();
    model.update_settings(SettingsPatch {
        default_required: Some(true),
        ..SettingsPatch::default()
    });
    assert_eq!(model.add_field(FieldType::Email, None).props.required, Some(true));
    assert_eq!(model.add_field(FieldType::Heading, None).props.required, None);
}

#[test]
fn add_field_tag_rejects_unknown_type_without_history() {
    let mut model = FormModel::new();
    assert!(matches!(
        model.add_field_tag("carousel", None),
        Err(FormError::UnknownFieldType(t)) if t == "carousel"
    ));
    assert!(!model.can_undo());
    assert_eq!(model.add_field_tag("radio", None).unwrap().options.len(), 3);
}

#[test]
fn ids_are_never_reused() {
    let (mut model, ids) = model_with(&[FieldType::Text, FieldType::Text]);
    model.remove_field(ids[1]).unwrap();
    let next = model.add_field(FieldType::Text, None);
    assert_eq!(next.id, FieldId(3));
}

#[test]
fn remove_missing_field_is_an_error() {
    let (mut model, _) = model_with(&[FieldType::Text]);
    let depth = model.history().undo_depth();
    assert!(matches!(
        model.remove_field(FieldId(42)),
        Err(FormError::FieldNotFound(FieldId(42)))
    ));
    assert_eq!(model.history().undo_depth(), depth);
}

#[test]
fn update_field_merges_patch() {
    let (mut model, ids) = model_with(&[FieldType::Text]);
    model
        .update_field(
            ids[0],
            FieldProps {
                label: Some("Full name".to_string()),
                required: Some(true),
                ..FieldProps::default()
            },
        )
        .unwrap();
    let field = model.document().field(ids[0]).unwrap();
    assert_eq!(field.props.label.as_deref(), Some("Full name"));
    assert_eq!(field.props.placeholder.as_deref(), Some("Enter text..."));
    assert!(field.is_required());
}

#[test]
fn move_field_at_edges_is_noop() {
    let (mut model, ids) = model_with(&[FieldType::Text, FieldType::Email]);
    let depth = model.history().undo_depth();

    assert!(!model.move_field(ids[0], MoveDirection::Up).unwrap());
    assert!(!model.move_field(ids[1], MoveDirection::Down).unwrap());
    assert_eq!(model.history().undo_depth(), depth);

    assert!(model.move_field(ids[0], MoveDirection::Down).unwrap());
    assert_eq!(order(&model), vec![ids[1], ids[0]]);
}

#[test]
fn move_field_to_reorders() {
    let (mut model, ids) = model_with(&[FieldType::Text, FieldType::Email, FieldType::Url]);
    assert!(model.move_field_to(ids[0], 10).unwrap());
    assert_eq!(order(&model), vec![ids[1], ids[2], ids[0]]);
    assert!(!model.move_field_to(ids[0], 2).unwrap());
    assert!(model.move_field_to(ids[0], 0).unwrap());
    assert_eq!(order(&model), ids);
}

#[test]
fn duplicate_inserts_independent_copy_after_source() {
    let (mut model, ids) = model_with(&[FieldType::Select, FieldType::Text]);
    let copy = model.duplicate_field(ids[0]).unwrap();

    assert_eq!(order(&model), vec![ids[0], copy.id, ids[1]]);
    assert_ne!(copy.id, ids[0]);
    assert_eq!(copy.props.label.as_deref(), Some("Select Option (Copy)"));

    model
        .update_option(
            copy.id,
            0,
            OptionPatch {
                label: Some("Changed".to_string()),
                ..OptionPatch::default()
            },
        )
        .unwrap();
    let original = model.document().field(ids[0]).unwrap();
    assert_eq!(original.options[0].label, "Option 1");
}

#[test]
fn duplicate_marks_layout_fields_without_label() {
    let (mut model, ids) =
        model_with(&[FieldType::Section, FieldType::Heading, FieldType::Paragraph]);

    let section = model.duplicate_field(ids[0]).unwrap();
    assert_eq!(section.props.title.as_deref(), Some("Section Title (Copy)"));
    assert_eq!(section.props.label, None);

    let heading = model.duplicate_field(ids[1]).unwrap();
    assert_eq!(heading.props.text.as_deref(), Some("Heading (Copy)"));

    let paragraph = model.duplicate_field(ids[2]).unwrap();
    assert_eq!(
        paragraph.props.text.as_deref(),
        Some("Enter paragraph text here... (Copy)")
    );

    let original = model.document().field(ids[1]).unwrap();
    assert_eq!(original.props.text.as_deref(), Some("Heading"));
}

#[test]
fn options_lifecycle() {
    let (mut model, ids) = model_with(&[FieldType::Select]);
    let added = model.add_option(ids[0]).unwrap();
    assert_eq!(added.value, "option4");
    assert_eq!(added.label, "Option 4");

    assert!(matches!(
        model.remove_option(ids[0], 9),
        Err(FormError::OptionNotFound { index: 9, .. })
    ));
    for _ in 0..3 {
        assert!(model.remove_option(ids[0], 0).unwrap());
    }
    assert!(!model.remove_option(ids[0], 0).unwrap());
    assert_eq!(model.document().fields[0].options, vec![added]);
}

#[test]
fn option_operations_require_choice_field() {
    let (mut model, ids) = model_with(&[FieldType::Text]);
    assert!(matches!(
        model.add_option(ids[0]),
        Err(FormError::NotAChoiceField(_))
    ));
    assert!(matches!(
        model.update_option(ids[0], 0, OptionPatch::default()),
        Err(FormError::NotAChoiceField(_))
    ));
    assert!(matches!(
        model.add_option(FieldId(9)),
        Err(FormError::FieldNotFound(_))
    ));
}

#[test]
fn checked_applies_to_checkbox_only() {
    let (mut model, ids) = model_with(&[FieldType::Checkbox, FieldType::Radio]);
    let checked = OptionPatch {
        checked: Some(true),
        ..OptionPatch::default()
    };
    model.update_option(ids[0], 1, checked.clone()).unwrap();
    model.update_option(ids[1], 1, checked).unwrap();

    assert_eq!(model.document().fields[0].options[1].checked, Some(true));
    assert_eq!(model.document().fields[1].options[1].checked, None);
}

#[test]
fn update_form_without_changes_records_nothing() {
    let mut model = FormModel::new();
    model.update_form(None, None);
    assert!(!model.can_undo());

    model.update_form(Some("Signup".to_string()), None);
    assert_eq!(model.document().title, "Signup");
    assert_eq!(model.document().description, "");
    assert!(model.can_undo());
}

#[test]
fn undo_redo_restores_snapshots() {
    let (mut model, ids) = model_with(&[FieldType::Text]);
    model.remove_field(ids[0]).unwrap();
    assert!(model.document().is_empty());

    assert!(model.undo());
    assert_eq!(order(&model), ids);
    assert!(model.can_redo());

    assert!(model.redo());
    assert!(model.document().is_empty());
    assert!(!model.redo());
}

#[test]
fn new_edit_clears_redo() {
    let (mut model, _) = model_with(&[FieldType::Text]);
    assert!(model.undo());
    assert!(model.can_redo());
    model.add_field(FieldType::Email, None);
    assert!(!model.can_redo());
}

#[test]
fn history_is_bounded() {
    let mut model = FormModel::new();
    for _ in 0..60 {
        model.add_field(FieldType::Text, None);
    }
    assert_eq!(model.history().undo_depth(), DEFAULT_HISTORY_LIMIT);

    let mut undone = 0;
    while model.undo() {
        undone += 1;
    }
    assert_eq!(undone, 50);
    assert_eq!(model.document().len(), 10);
}

#[test]
fn clear_returns_removed_count() {
    let mut model = FormModel::new();
    assert_eq!(model.clear(), 0);
    assert!(!model.can_undo());

    let (mut model, _) = model_with(&[FieldType::Text, FieldType::Email]);
    assert_eq!(model.clear(), 2);
    assert!(model.document().is_empty());
    assert!(model.undo());
    assert_eq!(model.document().len(), 2);
}

#[test]
fn replace_document_keeps_id_generator_ahead() {
    let mut ids = FieldIdGen::new();
    ids.observe(FieldId(40));
    let imported = FormDocument {
        fields: vec![schema::instantiate(FieldType::Text, &mut ids)],
        ..FormDocument::default()
    };

    let mut model = FormModel::new();
    model.replace_document(imported.clone());
    assert_eq!(model.document(), &imported);
    assert_eq!(model.add_field(FieldType::Text, None).id, FieldId(42));
    assert!(model.undo());
    assert!(model.undo());
    assert!(model.document().is_empty());
}

#[test]
fn with_document_starts_without_history() {
    let mut ids = FieldIdGen::new();
    let doc = FormDocument {
        fields: vec![schema::instantiate(FieldType::Email, &mut ids)],
        ..FormDocument::default()
    };
    let mut model = FormModel::with_document(doc);
    assert!(!model.can_undo());
    assert_eq!(model.add_field(FieldType::Text, None).id, FieldId(2));
}

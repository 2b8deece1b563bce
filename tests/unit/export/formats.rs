use super::*;
use crate::models::{FieldId, FieldIdGen, FieldType, FormSettings};
use crate::schema::instantiate;
use chrono::{TimeZone, Utc};

fn document(types: &[FieldType]) -> FormDocument {
    let mut ids = FieldIdGen::new();
    FormDocument {
        fields: types.iter().map(|t| instantiate(*t, &mut ids)).collect(),
        ..FormDocument::default()
    }
}

#[test]
fn format_names_and_extensions() {
    let exts: Vec<_> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
    assert_eq!(exts, ["html", "json", "jsx", "vue"]);
    assert_eq!(ExportFormat::React.to_string(), "React");
    assert_eq!(
        ExportFormat::Html.file_name("Contact Form"),
        "contact-form.html"
    );
    assert_eq!(ExportFormat::Vue.file_name(""), "form.vue");
}

#[test]
fn parse_format() {
    assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
    assert_eq!(" jsx ".parse::<ExportFormat>().unwrap(), ExportFormat::React);
    assert_eq!("react".parse::<ExportFormat>().unwrap(), ExportFormat::React);
    assert_eq!("vue".parse::<ExportFormat>().unwrap(), ExportFormat::Vue);
    assert!(matches!(
        "pdf".parse::<ExportFormat>(),
        Err(FormError::ExportFailure(msg)) if msg.contains("pdf")
    ));
}

#[test]
fn json_export_has_timestamp_and_round_trips() {
    let mut doc = document(&[FieldType::Text, FieldType::Checkbox, FieldType::Range]);
    doc.title = "Survey".to_string();
    doc.settings.show_labels = false;
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let json = export_json_at(&doc, at).unwrap();
    assert!(json.contains("\"exportedAt\": \"2024-01-02T03:04:05.000Z\""));
    assert!(json.contains("\"showLabels\": false"));
    assert!(json.contains("\"type\": \"checkbox\""));

    assert_eq!(import_json(&json).unwrap(), doc);
}

#[test]
fn import_bare_field_array_uses_default_settings() {
    let json = r#"[
        {"id": 3, "type": "text", "label": "Name"},
        {"id": 7, "type": "radio", "label": "Size",
         "options": [{"value": "s", "label": "Small"}]}
    ]"#;
    let doc = import_json(json).unwrap();
    assert_eq!(doc.title, "Untitled Form");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.fields[1].options[0].label, "Small");
    assert_eq!(doc.settings, FormSettings::default());
}

#[test]
fn import_rejects_invalid_documents() {
    assert!(matches!(import_json("42"), Err(FormError::InvalidImport(_))));
    assert!(matches!(import_json("{not json"), Err(FormError::InvalidImport(_))));
    assert!(matches!(
        import_json(r#"[{"id": 1, "type": "text"}, {"id": 1, "type": "email"}]"#),
        Err(FormError::InvalidImport(msg)) if msg.contains("duplicate")
    ));
    assert!(matches!(
        import_json(r#"[{"id": 1, "type": "select"}]"#),
        Err(FormError::InvalidImport(msg)) if msg.contains("no options")
    ));
    assert!(matches!(
        import_json(r#"[{"id": 1, "type": "carousel"}]"#),
        Err(FormError::InvalidImport(_))
    ));
}

#[test]
fn import_rejects_id_at_the_end_of_the_range() {
    let json = format!(r#"{{"fields": [{{"id": {}, "type": "text"}}]}}"#, u64::MAX);
    assert!(matches!(
        import_json(&json),
        Err(FormError::InvalidImport(msg)) if msg.contains("out of range")
    ));

    let json = format!(r#"[{{"id": {}, "type": "text"}}]"#, u64::MAX - 1);
    assert_eq!(import_json(&json).unwrap().fields[0].id, FieldId(u64::MAX - 1));
}

#[test]
fn html_skips_structural_fields_and_escapes_text() {
    let mut doc = document(&[FieldType::Divider, FieldType::Text, FieldType::Spacer]);
    doc.title = "Q&A <form>".to_string();
    let html = export_html(&doc);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Q&amp;A &lt;form&gt;</h1>"));
    assert!(!html.contains("<hr"));
    assert!(!html.contains("field_1"));
    assert!(!html.contains("field_3"));
    assert!(html.contains("name=\"field_2\""));
    assert!(html.contains("placeholder=\"Enter text...\""));
}

#[test]
fn html_marks_only_checked_checkbox_options() {
    let mut doc = document(&[FieldType::Checkbox]);
    doc.fields[0].options[1].checked = Some(true);
    let html = export_html(&doc);
    assert_eq!(html.matches(" checked").count(), 1);
    assert!(html.contains("value=\"option2\" checked"));
}

#[test]
fn html_respects_validation_setting() {
    let mut doc = document(&[FieldType::Email]);
    doc.fields[0].props.required = Some(true);
    assert!(export_html(&doc).contains(" required>"));

    doc.settings.validation = false;
    assert!(!export_html(&doc).contains(" required"));
}

#[test]
fn react_binds_controlled_inputs() {
    let doc = document(&[FieldType::Text, FieldType::Checkbox, FieldType::Divider]);
    let jsx = export_react(&doc);

    assert!(jsx.contains("import React, { useState } from 'react';"));
    assert!(jsx.contains("field_1: \"\""));
    assert!(jsx.contains("field_2: []"));
    assert!(!jsx.contains("field_3"));
    assert!(jsx.contains("value={formData.field_1}"));
    assert!(jsx.contains("onChange={handleCheckboxChange}"));
    assert!(jsx.contains("setSubmitted(true);"));
}

#[test]
fn vue_binds_with_v_model() {
    let mut doc = document(&[FieldType::Number, FieldType::File]);
    doc.title = "Use {{ braces }}".to_string();
    let sfc = export_vue(&doc);

    assert!(sfc.starts_with("<template>"));
    assert!(sfc.contains("v-model.number=\"formData.field_1\""));
    assert!(sfc.contains("@change=\"handleFileChange\""));
    assert!(sfc.contains("field_2: null,"));
    assert!(sfc.contains("<h1>Use &#123;&#123; braces &#125;&#125;</h1>"));
    assert!(sfc.contains("<style scoped>"));
}

#[test]
fn export_as_dispatches_by_format() {
    let doc = document(&[FieldType::Text]);
    for format in ExportFormat::ALL {
        let out = export_as(&doc, format).unwrap();
        let expected = match format {
            ExportFormat::Json => "\"id\": 1",
            _ => "field_1",
        };
        assert!(out.contains(expected), "{format} output missing field");
    }
}

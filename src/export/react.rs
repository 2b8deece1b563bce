//! React 函数组件导出（受控输入）

use std::fmt::Write;

use crate::models::{FormDocument, SubmitAction};
use crate::render::{render_preview, Constraints, PreviewItem, PreviewTree, Widget};

use super::markup::{binding_literal, js_string, number, submit_action_js};

const I3: &str = "      ";

pub fn export_react(document: &FormDocument) -> String {
    let preview = render_preview(document);
    let settings = &document.settings;
    let palette = settings.theme.palette();
    let items: Vec<&PreviewItem> = preview
        .items
        .iter()
        .filter(|i| !i.widget.is_structural())
        .collect();

    let mut out = String::new();
    out.push_str("import React, { useState } from 'react';\n\n");
    out.push_str("export default function GeneratedForm() {\n");
    write_initial_state(&mut out, &items);
    out.push_str("  const [submitted, setSubmitted] = useState(false);\n\n");

    out.push_str("  const handleChange = (event) => {\n");
    out.push_str("    const { name, value } = event.target;\n");
    out.push_str("    setFormData((prev) => ({ ...prev, [name]: value }));\n");
    out.push_str("  };\n\n");
    out.push_str("  const handleCheckboxChange = (event) => {\n");
    out.push_str("    const { name, value, checked } = event.target;\n");
    out.push_str("    setFormData((prev) => ({\n");
    out.push_str("      ...prev,\n");
    out.push_str("      [name]: checked ? [...prev[name], value] : prev[name].filter((v) => v !== value),\n");
    out.push_str("    }));\n");
    out.push_str("  };\n\n");
    out.push_str("  const handleFileChange = (event) => {\n");
    out.push_str("    const { name, files } = event.target;\n");
    out.push_str("    setFormData((prev) => ({ ...prev, [name]: files }));\n");
    out.push_str("  };\n\n");
    out.push_str("  const handleSubmit = (event) => {\n");
    out.push_str("    event.preventDefault();\n");
    out.push_str("    console.log('Form submitted:', formData);\n");
    if settings.submit_action == SubmitAction::Message {
        out.push_str("    setSubmitted(true);\n");
    }
    out.push_str(&submit_action_js(settings, &preview.title, "formData", "    "));
    out.push_str("  };\n\n");

    let _ = writeln!(
        out,
        "  const containerStyle = {{ maxWidth: '{}px', margin: '40px auto', padding: '{}px', background: '{}', color: '{}', borderRadius: '{}px' }};",
        settings.width, settings.padding, palette.background, palette.foreground, settings.border_radius
    );
    let _ = writeln!(
        out,
        "  const groupStyle = {{ marginBottom: '{}px' }};",
        settings.spacing
    );
    let _ = writeln!(
        out,
        "  const controlStyle = {{ width: '100%', padding: '10px 12px', border: '1px solid {}', borderRadius: '{}px' }};\n",
        palette.border, settings.border_radius
    );

    out.push_str("  if (submitted) {\n");
    let _ = writeln!(
        out,
        "    return <div style={{containerStyle}}>{{{}}}</div>;",
        js_string(&preview.success_message)
    );
    out.push_str("  }\n\n");

    write_form(&mut out, &preview, &items, palette.accent, settings.border_radius);
    out.push_str("}\n");
    out
}

fn write_initial_state(out: &mut String, items: &[&PreviewItem]) {
    out.push_str("  const [formData, setFormData] = useState({\n");
    for item in items {
        if let (Some(name), Some(value)) = (item.widget.name(), item.widget.binding()) {
            let _ = writeln!(out, "    {}: {},", name, binding_literal(&value));
        }
    }
    out.push_str("  });\n");
}

fn write_form(
    out: &mut String,
    preview: &PreviewTree,
    items: &[&PreviewItem],
    accent: &str,
    radius: u32,
) {
    out.push_str("  return (\n");
    out.push_str("    <form onSubmit={handleSubmit} style={containerStyle}>\n");
    let _ = writeln!(out, "      <h1>{{{}}}</h1>", js_string(&preview.title));
    if !preview.description.is_empty() {
        let _ = writeln!(out, "      <p>{{{}}}</p>", js_string(&preview.description));
    }
    for item in items {
        write_item(out, item);
    }
    let _ = writeln!(
        out,
        "      <button type=\"submit\" style={{{{ background: '{accent}', color: '#ffffff', border: 'none', padding: '12px 24px', borderRadius: '{radius}px' }}}}>{}</button>",
        preview.submit_label
    );
    out.push_str("    </form>\n");
    out.push_str("  );\n");
}

fn write_item(out: &mut String, item: &PreviewItem) {
    match &item.widget {
        Widget::Section { title, description } => {
            let _ = writeln!(out, "{I3}<div className=\"form-section\">");
            let _ = writeln!(out, "{I3}  <h3>{{{}}}</h3>", js_string(title));
            if !description.is_empty() {
                let _ = writeln!(out, "{I3}  <p>{{{}}}</p>", js_string(description));
            }
            let _ = writeln!(out, "{I3}</div>");
            return;
        }
        Widget::Columns { count } => {
            let _ = writeln!(
                out,
                "{I3}<div className=\"form-columns\" style={{{{ display: 'grid', gridTemplateColumns: 'repeat({count}, 1fr)' }}}} />"
            );
            return;
        }
        Widget::Heading { level, text } => {
            let _ = writeln!(out, "{I3}<h{level}>{{{}}}</h{level}>", js_string(text));
            return;
        }
        Widget::Paragraph { text } => {
            let _ = writeln!(out, "{I3}<p>{{{}}}</p>", js_string(text));
            return;
        }
        _ => {}
    }

    let _ = writeln!(out, "{I3}<div style={{groupStyle}}>");
    if let Some(label) = &item.label {
        let star = if item.required {
            " <span style={{ color: '#ef4444' }}>*</span>"
        } else {
            ""
        };
        let html_for = match (&item.widget, item.widget.name()) {
            (Widget::CheckboxGroup(_) | Widget::RadioGroup(_), _) | (_, None) => String::new(),
            (_, Some(name)) => format!(" htmlFor=\"{name}\""),
        };
        let _ = writeln!(
            out,
            "{I3}  <label{html_for} style={{{{ display: 'block', fontWeight: 600 }}}}>{{{}}}{star}</label>",
            js_string(label)
        );
    }
    write_widget(out, &item.widget);
    if let Some(description) = &item.description {
        let _ = writeln!(out, "{I3}  <small>{{{}}}</small>", js_string(description));
    }
    let _ = writeln!(out, "{I3}</div>");
}

fn write_widget(out: &mut String, widget: &Widget) {
    let pad = format!("{I3}  ");
    match widget {
        Widget::Input(w) => {
            let _ = write!(
                out,
                "{pad}<input type=\"{}\" id=\"{}\" name=\"{}\" value={{formData.{}}} onChange={{handleChange}} style={{controlStyle}}",
                w.input_type, w.name, w.name, w.name
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder={{{}}}", js_string(p));
            }
            write_constraints(out, &w.constraints);
            if w.required {
                out.push_str(" required");
            }
            out.push_str(" />\n");
        }
        Widget::TextArea(w) => {
            let _ = write!(
                out,
                "{pad}<textarea id=\"{}\" name=\"{}\" rows={{{}}} value={{formData.{}}} onChange={{handleChange}} style={{controlStyle}}",
                w.name, w.name, w.rows, w.name
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder={{{}}}", js_string(p));
            }
            write_constraints(out, &w.constraints);
            if w.required {
                out.push_str(" required");
            }
            out.push_str(" />\n");
        }
        Widget::Select(w) => {
            let _ = write!(
                out,
                "{pad}<select id=\"{}\" name=\"{}\" value={{formData.{}}} onChange={{handleChange}} style={{controlStyle}}",
                w.name, w.name, w.name
            );
            if w.required {
                out.push_str(" required");
            }
            out.push_str(">\n");
            let _ = writeln!(
                out,
                "{pad}  <option value=\"\">{{{}}}</option>",
                js_string(w.placeholder.as_deref().unwrap_or(""))
            );
            for opt in &w.options {
                let _ = writeln!(
                    out,
                    "{pad}  <option value={{{}}}>{{{}}}</option>",
                    js_string(&opt.value),
                    js_string(&opt.label)
                );
            }
            let _ = writeln!(out, "{pad}</select>");
        }
        Widget::CheckboxGroup(w) => {
            for opt in &w.options {
                let value = js_string(&opt.value);
                let _ = writeln!(
                    out,
                    "{pad}<label style={{{{ display: 'block' }}}}><input type=\"checkbox\" name=\"{}\" value={{{value}}} checked={{formData.{}.includes({value})}} onChange={{handleCheckboxChange}} /> {{{}}}</label>",
                    w.name,
                    w.name,
                    js_string(&opt.label)
                );
            }
        }
        Widget::RadioGroup(w) => {
            let required = if w.required { " required" } else { "" };
            for opt in &w.options {
                let value = js_string(&opt.value);
                let _ = writeln!(
                    out,
                    "{pad}<label style={{{{ display: 'block' }}}}><input type=\"radio\" name=\"{}\" value={{{value}}} checked={{formData.{} === {value}}} onChange={{handleChange}}{required} /> {{{}}}</label>",
                    w.name,
                    w.name,
                    js_string(&opt.label)
                );
            }
        }
        Widget::Range(w) => {
            let _ = writeln!(
                out,
                "{pad}<input type=\"range\" id=\"{}\" name=\"{}\" min=\"{}\" max=\"{}\" step=\"{}\" value={{formData.{}}} onChange={{handleChange}} />",
                w.name,
                w.name,
                number(w.min),
                number(w.max),
                number(w.step),
                w.name
            );
        }
        Widget::File(w) => {
            let _ = write!(
                out,
                "{pad}<input type=\"file\" id=\"{}\" name=\"{}\" onChange={{handleFileChange}}",
                w.name, w.name
            );
            if let Some(accept) = &w.accept {
                let _ = write!(out, " accept={{{}}}", js_string(accept));
            }
            if w.multiple {
                out.push_str(" multiple");
            }
            if w.required {
                out.push_str(" required");
            }
            out.push_str(" />\n");
        }
        Widget::Section { .. }
        | Widget::Columns { .. }
        | Widget::Heading { .. }
        | Widget::Paragraph { .. }
        | Widget::Divider
        | Widget::Spacer { .. } => {}
    }
}

fn write_constraints(out: &mut String, c: &Constraints) {
    if let Some(v) = c.min_length {
        let _ = write!(out, " minLength={{{v}}}");
    }
    if let Some(v) = c.max_length {
        let _ = write!(out, " maxLength={{{v}}}");
    }
    if let Some(v) = &c.pattern {
        let _ = write!(out, " pattern={{{}}}", js_string(v));
    }
    if let Some(v) = c.min {
        let _ = write!(out, " min={{{}}}", number(v));
    }
    if let Some(v) = c.max {
        let _ = write!(out, " max={{{}}}", number(v));
    }
    if let Some(v) = c.step {
        let _ = write!(out, " step={{{}}}", number(v));
    }
}

//! Vue 单文件组件导出（v-model 绑定）

use std::fmt::Write;

use crate::models::{FormDocument, SubmitAction};
use crate::render::{render_preview, Constraints, PreviewItem, Widget};

use super::markup::{binding_literal, escape_html, number, stylesheet, submit_action_js};

const PAD: &str = "        ";

/// 模板文本：HTML 转义，再把花括号转成实体，避免被当成插值
fn text(s: &str) -> String {
    escape_html(s).replace('{', "&#123;").replace('}', "&#125;")
}

pub fn export_vue(document: &FormDocument) -> String {
    let preview = render_preview(document);
    let settings = &document.settings;
    let items: Vec<&PreviewItem> = preview
        .items
        .iter()
        .filter(|i| !i.widget.is_structural())
        .collect();

    let mut out = String::new();
    out.push_str("<template>\n");
    out.push_str("  <div class=\"form-container\">\n");
    let _ = writeln!(out, "    <h1>{}</h1>", text(&preview.title));
    if !preview.description.is_empty() {
        let _ = writeln!(
            out,
            "    <p class=\"form-description\">{}</p>",
            text(&preview.description)
        );
    }
    out.push_str("    <form v-if=\"!submitted\" @submit.prevent=\"handleSubmit\">\n");
    for item in &items {
        write_item(&mut out, item);
    }
    let _ = writeln!(
        out,
        "      <button type=\"submit\" class=\"form-submit\">{}</button>",
        preview.submit_label
    );
    out.push_str("    </form>\n");
    let _ = writeln!(
        out,
        "    <div v-else class=\"success-message\">{}</div>",
        text(&preview.success_message)
    );
    out.push_str("  </div>\n</template>\n\n");

    out.push_str("<script>\nexport default {\n");
    out.push_str("  name: 'GeneratedForm',\n");
    out.push_str("  data() {\n    return {\n      submitted: false,\n      formData: {\n");
    for item in &items {
        if let (Some(name), Some(value)) = (item.widget.name(), item.widget.binding()) {
            let _ = writeln!(out, "        {}: {},", name, binding_literal(&value));
        }
    }
    out.push_str("      },\n    };\n  },\n");
    out.push_str("  methods: {\n");
    out.push_str("    handleFileChange(event) {\n");
    out.push_str("      this.formData[event.target.name] = event.target.files;\n");
    out.push_str("    },\n");
    out.push_str("    handleSubmit() {\n");
    out.push_str("      const formData = this.formData;\n");
    out.push_str("      console.log('Form submitted:', formData);\n");
    if settings.submit_action == SubmitAction::Message {
        out.push_str("      this.submitted = true;\n");
    }
    out.push_str(&submit_action_js(settings, &preview.title, "formData", "      "));
    out.push_str("    },\n  },\n};\n</script>\n\n");

    out.push_str("<style scoped>\n");
    out.push_str(&stylesheet(settings));
    out.push_str("</style>\n");
    out
}

fn write_item(out: &mut String, item: &PreviewItem) {
    match &item.widget {
        Widget::Section { title, description } => {
            out.push_str("      <div class=\"form-section\">\n");
            let _ = writeln!(out, "        <h3>{}</h3>", text(title));
            if !description.is_empty() {
                let _ = writeln!(out, "        <p>{}</p>", text(description));
            }
            out.push_str("      </div>\n");
            return;
        }
        Widget::Columns { count } => {
            let _ = writeln!(
                out,
                "      <div class=\"form-columns\" style=\"grid-template-columns: repeat({count}, 1fr);\"></div>"
            );
            return;
        }
        Widget::Heading { level, text: t } => {
            let _ = writeln!(out, "      <h{level}>{}</h{level}>", text(t));
            return;
        }
        Widget::Paragraph { text: t } => {
            let _ = writeln!(out, "      <p>{}</p>", text(t));
            return;
        }
        _ => {}
    }

    out.push_str("      <div class=\"form-group\">\n");
    if let Some(label) = &item.label {
        let required = if item.required {
            " <span class=\"required\">*</span>"
        } else {
            ""
        };
        match (&item.widget, item.widget.name()) {
            (Widget::CheckboxGroup(_) | Widget::RadioGroup(_), _) | (_, None) => {
                let _ = writeln!(out, "        <label>{}{required}</label>", text(label));
            }
            (_, Some(name)) => {
                let _ = writeln!(
                    out,
                    "        <label for=\"{name}\">{}{required}</label>",
                    text(label)
                );
            }
        }
    }
    write_widget(out, &item.widget);
    if let Some(description) = &item.description {
        let _ = writeln!(out, "        <small class=\"help\">{}</small>", text(description));
    }
    out.push_str("      </div>\n");
}

fn write_widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::Input(w) => {
            let model = if w.input_type == "number" {
                "v-model.number"
            } else {
                "v-model"
            };
            let _ = write!(
                out,
                "{PAD}<input type=\"{}\" id=\"{}\" name=\"{}\" class=\"form-control\" {model}=\"formData.{}\"",
                w.input_type, w.name, w.name, w.name
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape_html(p));
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
                "{PAD}<textarea id=\"{}\" name=\"{}\" class=\"form-control\" rows=\"{}\" v-model=\"formData.{}\"",
                w.name, w.name, w.rows, w.name
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape_html(p));
            }
            write_constraints(out, &w.constraints);
            if w.required {
                out.push_str(" required");
            }
            out.push_str("></textarea>\n");
        }
        Widget::Select(w) => {
            let _ = write!(
                out,
                "{PAD}<select id=\"{}\" name=\"{}\" class=\"form-control\" v-model=\"formData.{}\"",
                w.name, w.name, w.name
            );
            if w.required {
                out.push_str(" required");
            }
            out.push_str(">\n");
            let _ = writeln!(
                out,
                "{PAD}  <option value=\"\">{}</option>",
                text(w.placeholder.as_deref().unwrap_or(""))
            );
            for opt in &w.options {
                let _ = writeln!(
                    out,
                    "{PAD}  <option value=\"{}\">{}</option>",
                    escape_html(&opt.value),
                    text(&opt.label)
                );
            }
            let _ = writeln!(out, "{PAD}</select>");
        }
        Widget::CheckboxGroup(w) => {
            for opt in &w.options {
                let _ = writeln!(
                    out,
                    "{PAD}<label class=\"choice\"><input type=\"checkbox\" name=\"{}\" value=\"{}\" v-model=\"formData.{}\" /> {}</label>",
                    w.name,
                    escape_html(&opt.value),
                    w.name,
                    text(&opt.label)
                );
            }
        }
        Widget::RadioGroup(w) => {
            let required = if w.required { " required" } else { "" };
            for opt in &w.options {
                let _ = writeln!(
                    out,
                    "{PAD}<label class=\"choice\"><input type=\"radio\" name=\"{}\" value=\"{}\" v-model=\"formData.{}\"{required} /> {}</label>",
                    w.name,
                    escape_html(&opt.value),
                    w.name,
                    text(&opt.label)
                );
            }
        }
        Widget::Range(w) => {
            let _ = writeln!(
                out,
                "{PAD}<input type=\"range\" id=\"{}\" name=\"{}\" min=\"{}\" max=\"{}\" step=\"{}\" v-model.number=\"formData.{}\" />",
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
                "{PAD}<input type=\"file\" id=\"{}\" name=\"{}\" @change=\"handleFileChange\"",
                w.name, w.name
            );
            if let Some(accept) = &w.accept {
                let _ = write!(out, " accept=\"{}\"", escape_html(accept));
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
        let _ = write!(out, " minlength=\"{v}\"");
    }
    if let Some(v) = c.max_length {
        let _ = write!(out, " maxlength=\"{v}\"");
    }
    if let Some(v) = &c.pattern {
        let _ = write!(out, " pattern=\"{}\"", escape_html(v));
    }
    if let Some(v) = c.min {
        let _ = write!(out, " min=\"{}\"", number(v));
    }
    if let Some(v) = c.max {
        let _ = write!(out, " max=\"{}\"", number(v));
    }
    if let Some(v) = c.step {
        let _ = write!(out, " step=\"{}\"", number(v));
    }
}

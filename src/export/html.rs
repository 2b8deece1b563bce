//! 独立 HTML 文档导出

use std::fmt::Write;

use crate::models::{FormDocument, SubmitAction};
use crate::render::{render_preview, Constraints, PreviewItem, Widget};

use super::markup::{escape_html, number, stylesheet, submit_action_js};

pub fn export_html(document: &FormDocument) -> String {
    let preview = render_preview(document);
    let settings = &document.settings;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&preview.title));
    out.push_str("<style>\nbody { margin: 0; padding: 16px; background: #f3f4f6; }\n");
    out.push_str(&stylesheet(settings));
    out.push_str("</style>\n</head>\n<body>\n<div class=\"form-container\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&preview.title));
    if !preview.description.is_empty() {
        let _ = writeln!(
            out,
            "<p class=\"form-description\">{}</p>",
            escape_html(&preview.description)
        );
    }

    out.push_str("<form id=\"generated-form\">\n");
    for item in preview.items.iter().filter(|i| !i.widget.is_structural()) {
        write_item(&mut out, item);
    }
    let _ = writeln!(
        out,
        "<button type=\"submit\" class=\"form-submit\">{}</button>",
        preview.submit_label
    );
    out.push_str("</form>\n");
    let _ = writeln!(
        out,
        "<div class=\"success-message\" id=\"success-message\" style=\"display: none;\">{}</div>",
        escape_html(&preview.success_message)
    );
    out.push_str("</div>\n");

    out.push_str("<script>\n");
    out.push_str("document.getElementById('generated-form').addEventListener('submit', function (event) {\n");
    out.push_str("  event.preventDefault();\n");
    out.push_str("  const data = {};\n");
    out.push_str("  for (const [key, value] of new FormData(this).entries()) {\n");
    out.push_str("    data[key] = key in data ? [].concat(data[key], value) : value;\n");
    out.push_str("  }\n");
    out.push_str("  console.log('Form submitted:', data);\n");
    if settings.submit_action == SubmitAction::Message {
        out.push_str("  this.style.display = 'none';\n");
        out.push_str("  document.getElementById('success-message').style.display = 'block';\n");
    }
    out.push_str(&submit_action_js(settings, &preview.title, "data", "  "));
    out.push_str("});\n</script>\n</body>\n</html>\n");
    out
}

fn write_item(out: &mut String, item: &PreviewItem) {
    match &item.widget {
        Widget::Section { title, description } => {
            out.push_str("<div class=\"form-section\">\n");
            let _ = writeln!(out, "<h3>{}</h3>", escape_html(title));
            if !description.is_empty() {
                let _ = writeln!(out, "<p>{}</p>", escape_html(description));
            }
            out.push_str("</div>\n");
            return;
        }
        Widget::Columns { count } => {
            let _ = writeln!(
                out,
                "<div class=\"form-columns\" style=\"grid-template-columns: repeat({count}, 1fr);\">"
            );
            for _ in 0..*count {
                out.push_str("<div class=\"form-column\"></div>\n");
            }
            out.push_str("</div>\n");
            return;
        }
        Widget::Heading { level, text } => {
            let _ = writeln!(out, "<h{level}>{}</h{level}>", escape_html(text));
            return;
        }
        Widget::Paragraph { text } => {
            let _ = writeln!(out, "<p>{}</p>", escape_html(text));
            return;
        }
        _ => {}
    }

    out.push_str("<div class=\"form-group\">\n");
    if let Some(label) = &item.label {
        let required = if item.required {
            " <span class=\"required\">*</span>"
        } else {
            ""
        };
        match item.widget.name() {
            Some(name) if labels_single_control(&item.widget) => {
                let _ = writeln!(
                    out,
                    "<label for=\"{}\">{}{required}</label>",
                    escape_html(name),
                    escape_html(label)
                );
            }
            _ => {
                let _ = writeln!(out, "<label>{}{required}</label>", escape_html(label));
            }
        }
    }
    write_widget(out, &item.widget);
    if let Some(description) = &item.description {
        let _ = writeln!(out, "<small class=\"help\">{}</small>", escape_html(description));
    }
    out.push_str("</div>\n");
}

fn labels_single_control(widget: &Widget) -> bool {
    !matches!(widget, Widget::CheckboxGroup(_) | Widget::RadioGroup(_))
}

fn write_widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::Input(w) => {
            let name = escape_html(&w.name);
            let _ = write!(
                out,
                "<input type=\"{}\" id=\"{name}\" name=\"{name}\" class=\"form-control\"",
                w.input_type
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape_html(p));
            }
            if let Some(v) = &w.value {
                let _ = write!(out, " value=\"{}\"", escape_html(v));
            }
            write_constraints(out, &w.constraints);
            if w.required {
                out.push_str(" required");
            }
            out.push_str(">\n");
        }
        Widget::TextArea(w) => {
            let name = escape_html(&w.name);
            let _ = write!(
                out,
                "<textarea id=\"{name}\" name=\"{name}\" class=\"form-control\" rows=\"{}\"",
                w.rows
            );
            if let Some(p) = &w.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape_html(p));
            }
            write_constraints(out, &w.constraints);
            if w.required {
                out.push_str(" required");
            }
            let _ = writeln!(
                out,
                ">{}</textarea>",
                escape_html(w.value.as_deref().unwrap_or(""))
            );
        }
        Widget::Select(w) => {
            let name = escape_html(&w.name);
            let _ = write!(out, "<select id=\"{name}\" name=\"{name}\" class=\"form-control\"");
            if w.required {
                out.push_str(" required");
            }
            out.push_str(">\n");
            let _ = writeln!(
                out,
                "<option value=\"\">{}</option>",
                escape_html(w.placeholder.as_deref().unwrap_or(""))
            );
            for opt in &w.options {
                let _ = writeln!(
                    out,
                    "<option value=\"{}\">{}</option>",
                    escape_html(&opt.value),
                    escape_html(&opt.label)
                );
            }
            out.push_str("</select>\n");
        }
        Widget::CheckboxGroup(w) => {
            for opt in &w.options {
                let _ = write!(
                    out,
                    "<label class=\"choice\"><input type=\"checkbox\" name=\"{}\" value=\"{}\"",
                    escape_html(&w.name),
                    escape_html(&opt.value)
                );
                if opt.is_checked() {
                    out.push_str(" checked");
                }
                let _ = writeln!(out, "> {}</label>", escape_html(&opt.label));
            }
        }
        Widget::RadioGroup(w) => {
            for opt in &w.options {
                let _ = write!(
                    out,
                    "<label class=\"choice\"><input type=\"radio\" name=\"{}\" value=\"{}\"",
                    escape_html(&w.name),
                    escape_html(&opt.value)
                );
                if w.required {
                    out.push_str(" required");
                }
                let _ = writeln!(out, "> {}</label>", escape_html(&opt.label));
            }
        }
        Widget::Range(w) => {
            let name = escape_html(&w.name);
            let _ = writeln!(
                out,
                "<input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\">",
                number(w.min),
                number(w.max),
                number(w.step),
                number(w.value)
            );
        }
        Widget::File(w) => {
            let name = escape_html(&w.name);
            let _ = write!(out, "<input type=\"file\" id=\"{name}\" name=\"{name}\"");
            if let Some(accept) = &w.accept {
                let _ = write!(out, " accept=\"{}\"", escape_html(accept));
            }
            if w.multiple {
                out.push_str(" multiple");
            }
            if w.required {
                out.push_str(" required");
            }
            out.push_str(">\n");
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

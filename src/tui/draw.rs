use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::services::ports::{DocumentStorage, Severity};
use crate::kernel::{DropTarget, ViewMode};
use crate::models::{Category, FieldOption};
use crate::render::{render_canvas, render_preview, CanvasBlock, Widget};

use super::app::{App, Focus, PropertyRow};

struct UiTheme;

impl UiTheme {
    const ACCENT: Color = Color::Rgb(99, 102, 241);
    const MUTED: Color = Color::DarkGray;
    const SELECTED_BG: Color = Color::Rgb(49, 46, 129);
    const REQUIRED: Color = Color::Rgb(239, 68, 68);
    const DROP: Color = Color::Yellow;
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Info => Color::Cyan,
    }
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(UiTheme::ACCENT)
    } else {
        Style::default().fg(UiTheme::MUTED)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

impl<S: DocumentStorage> App<S> {
    pub(super) fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Min(30),
                Constraint::Length(38),
            ])
            .split(rows[1]);

        self.render_header(frame, rows[0]);
        self.render_palette(frame, cols[0]);
        match self.view() {
            ViewMode::Canvas => self.render_canvas(frame, cols[1]),
            ViewMode::Preview => self.render_preview(frame, cols[1]),
        }
        self.render_properties(frame, cols[2]);
        self.render_status(frame, rows[2]);
        self.render_toasts(frame, area);
        self.render_prompt(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let history = state.model.history();
        let view = match state.view {
            ViewMode::Canvas => "canvas",
            ViewMode::Preview => "preview",
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", state.document().title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} field(s)  [{view}]  undo {} / redo {}",
                    state.document().len(),
                    history.undo_depth(),
                    history.redo_depth()
                ),
                Style::default().fg(UiTheme::MUTED),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_palette(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Palette;
        let block = panel("Elements", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let palette = &self.state().palette;
        let mut lines = Vec::new();

        let mut tabs = vec![tab_span("All", palette.category.is_none())];
        for category in Category::ALL {
            tabs.push(Span::raw(" "));
            tabs.push(tab_span(category.label(), palette.category == Some(category)));
        }
        lines.push(Line::from(tabs));

        let query = if palette.query.is_empty() {
            Span::styled("/ search", Style::default().fg(UiTheme::MUTED))
        } else {
            Span::raw(format!("/ {}", palette.query))
        };
        lines.push(Line::from(query));
        lines.push(Line::default());

        let items = palette.items();
        if items.is_empty() {
            lines.push(Line::from(Span::styled(
                "No matching elements",
                Style::default().fg(UiTheme::MUTED),
            )));
        }
        for (i, spec) in items.iter().enumerate() {
            let style = if focused && i == self.palette_cursor {
                Style::default().bg(UiTheme::SELECTED_BG)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {}", spec.icon, spec.name),
                style,
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let block = panel("Canvas", self.focus == Focus::Canvas);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tree = render_canvas(state.document(), state.selection.selected());
        if tree.is_empty() && !state.drag.is_dragging() {
            let hint = vec![
                Line::default(),
                Line::from(Span::styled(
                    "Drag elements here or press Enter in the element list",
                    Style::default().fg(UiTheme::MUTED),
                )),
            ];
            frame.render_widget(Paragraph::new(hint), inner);
            return;
        }

        let drop_at = state.drag.is_dragging().then(|| match state.drag.over() {
            Some(DropTarget::CanvasSlot { index }) => index,
            Some(DropTarget::CanvasEnd) | None => tree.blocks.len(),
        });

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_line = 0usize;
        for (i, block) in tree.blocks.iter().enumerate() {
            if drop_at == Some(i) {
                lines.push(drop_line());
            }
            if block.selected {
                selected_line = lines.len();
            }
            lines.extend(block_lines(block));
            lines.push(Line::default());
        }
        if drop_at == Some(tree.blocks.len()) {
            lines.push(drop_line());
        }

        // 选中的块保持在可视范围内
        let height = inner.height as usize;
        let scroll = (selected_line + 4).saturating_sub(height);
        frame.render_widget(
            Paragraph::new(lines).scroll((scroll.min(u16::MAX as usize) as u16, 0)),
            inner,
        );
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let block = panel("Preview", self.focus == Focus::Canvas);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tree = render_preview(self.state().document());
        let mut lines = vec![Line::from(Span::styled(
            tree.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if !tree.description.is_empty() {
            lines.push(Line::from(Span::styled(
                tree.description.clone(),
                Style::default().fg(UiTheme::MUTED),
            )));
        }
        lines.push(Line::default());

        for item in &tree.items {
            if let Some(label) = &item.label {
                let mut spans = vec![Span::styled(
                    label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if item.required {
                    spans.push(Span::styled(" *", Style::default().fg(UiTheme::REQUIRED)));
                }
                lines.push(Line::from(spans));
            }
            lines.extend(widget_lines(&item.widget));
            if let Some(description) = &item.description {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(UiTheme::MUTED),
                )));
            }
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", tree.submit_label),
            Style::default().fg(Color::White).bg(UiTheme::ACCENT),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_properties(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Properties;
        let state = self.state();
        let field = state
            .selection
            .selected()
            .and_then(|id| state.document().field(id));
        let title = match field {
            Some(f) => format!("Properties: {}", f.field_type),
            None => "Form Settings".to_string(),
        };
        let block = panel(&title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, row) in self.property_rows().into_iter().enumerate() {
            let style = if focused && i == self.property_cursor {
                Style::default().bg(UiTheme::SELECTED_BG)
            } else {
                Style::default()
            };
            let text = match (&row, field) {
                (PropertyRow::Editor(editor), Some(field)) => {
                    format!("{}: {}", editor.label, property_text(editor.key.read(&field.props)))
                }
                (PropertyRow::Option(index), Some(field)) => match field.options.get(*index) {
                    Some(opt) => format!("  {} {}", option_marker(opt), opt.label),
                    None => continue,
                },
                (PropertyRow::AddOption, _) => "  + Add Option".to_string(),
                (PropertyRow::Setting(key), _) => {
                    format!("{}: {}", key.label(), key.value(&state.document().settings))
                }
                _ => continue,
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.prompt.is_some() {
            "Enter confirm  Esc cancel"
        } else if self.state().drag.is_dragging() {
            "↑/↓ choose slot  Enter drop  Esc cancel"
        } else {
            match self.focus {
                Focus::Palette => "Enter add  m drag  / search  ←/→ category  Tab focus  q quit",
                Focus::Canvas => {
                    "↑/↓ select  J/K move  m drag  d duplicate  x delete  p preview  u/r undo/redo  e export  c copy  i import"
                }
                Focus::Properties => "Enter edit  Space toggle  a add option  x remove option  Esc back",
            }
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(UiTheme::MUTED))),
            area,
        );
    }

    fn render_toasts(&self, frame: &mut Frame, area: Rect) {
        let mut y = area.y.saturating_add(1);
        for toast in self.toasts.iter() {
            let text = format!(" {} ", toast.notice.message);
            let width = (text.width() as u16).min(area.width);
            if y >= area.bottom() {
                break;
            }
            let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 1);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(severity_color(toast.notice.severity)),
                )),
                rect,
            );
            y = y.saturating_add(1);
        }
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let Some(prompt) = &self.prompt else {
            return;
        };
        let width = area.width.saturating_sub(8).min(70);
        if width < 4 || area.height < 3 {
            return;
        }
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height / 3,
            width,
            3,
        );
        let block = panel(&prompt.kind.title(), true);
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        // 输入太长时只显示光标附近
        let column = prompt.cursor_column() as u16;
        let scroll = column.saturating_sub(inner.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(prompt.text()).scroll((0, scroll)), inner);
        frame.set_cursor_position((inner.x + column - scroll, inner.y));
    }
}

fn tab_span(label: &str, active: bool) -> Span<'_> {
    if active {
        Span::styled(
            label,
            Style::default()
                .fg(UiTheme::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        Span::styled(label, Style::default().fg(UiTheme::MUTED))
    }
}

fn drop_line() -> Line<'static> {
    Line::from(Span::styled(
        "──────── drop here ────────",
        Style::default().fg(UiTheme::DROP),
    ))
}

fn property_text(value: crate::schema::PropertyValue) -> String {
    use crate::schema::PropertyValue;
    match value {
        PropertyValue::Text(s) => s,
        PropertyValue::Number(Some(n)) => n.to_string(),
        PropertyValue::Number(None) => "-".to_string(),
        PropertyValue::Toggle(true) => "on".to_string(),
        PropertyValue::Toggle(false) => "off".to_string(),
    }
}

fn option_marker(option: &FieldOption) -> &'static str {
    if option.is_checked() {
        "☑"
    } else {
        "☐"
    }
}

fn block_lines(block: &CanvasBlock) -> Vec<Line<'static>> {
    let marker = if block.selected { "▌" } else { " " };
    let title_style = if block.selected {
        Style::default()
            .fg(UiTheme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::raw(label)
        } else {
            Span::styled(label, Style::default().fg(UiTheme::MUTED))
        }
    };

    let mut header = vec![
        Span::styled(marker, Style::default().fg(UiTheme::ACCENT)),
        Span::raw(format!("{} ", block.header.icon)),
        Span::styled(block.header.title.clone(), title_style),
    ];
    if block.header.required {
        header.push(Span::styled(" *", Style::default().fg(UiTheme::REQUIRED)));
    }
    header.push(Span::styled(
        format!("  {}  ", block.header.type_name),
        Style::default().fg(UiTheme::MUTED),
    ));
    if block.selected {
        header.push(control("↑", block.controls.move_up));
        header.push(Span::raw(" "));
        header.push(control("↓", block.controls.move_down));
        header.push(Span::raw(" "));
        header.push(control("⧉", block.controls.duplicate));
        header.push(Span::raw(" "));
        header.push(control("✕", block.controls.delete));
    }

    let mut lines = vec![Line::from(header)];
    for line in widget_lines(&block.widget) {
        let mut spans = vec![Span::raw(format!("{marker} "))];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    lines
}

/// 控件的文字示意
fn widget_lines(widget: &Widget) -> Vec<Line<'static>> {
    let muted = Style::default().fg(UiTheme::MUTED);
    let boxed = |text: String, hint: String| {
        Line::from(vec![
            Span::raw("[ "),
            Span::styled(format!("{text:<24}"), muted),
            Span::raw(" ]"),
            Span::styled(hint, muted),
        ])
    };
    match widget {
        Widget::Input(w) => {
            let text = w
                .value
                .clone()
                .or_else(|| w.placeholder.clone())
                .unwrap_or_default();
            vec![boxed(text, format!(" {}", w.input_type))]
        }
        Widget::TextArea(w) => {
            let text = w
                .value
                .clone()
                .or_else(|| w.placeholder.clone())
                .unwrap_or_default();
            let mut lines = vec![boxed(text, String::new())];
            for _ in 1..w.rows.min(3) {
                lines.push(boxed(String::new(), String::new()));
            }
            lines
        }
        Widget::Select(w) => {
            let text = w.placeholder.clone().unwrap_or_default();
            vec![boxed(text, format!(" ▾ {} option(s)", w.options.len()))]
        }
        Widget::CheckboxGroup(w) => w
            .options
            .iter()
            .map(|o| Line::from(format!("{} {}", option_marker(o), o.label)))
            .collect(),
        Widget::RadioGroup(w) => w
            .options
            .iter()
            .map(|o| Line::from(format!("◯ {}", o.label)))
            .collect(),
        Widget::Range(w) => {
            let span = (w.max - w.min).max(f64::EPSILON);
            let pos = (((w.value - w.min) / span) * 20.0).round() as usize;
            let track: String = (0..=20).map(|i| if i == pos { '●' } else { '─' }).collect();
            vec![Line::from(vec![
                Span::styled(format!("{} ", w.min), muted),
                Span::raw(track),
                Span::styled(format!(" {}  ({})", w.max, w.value), muted),
            ])]
        }
        Widget::File(w) => {
            let hint = match &w.accept {
                Some(accept) => format!(" {accept}"),
                None => String::new(),
            };
            vec![Line::from(vec![
                Span::raw("[ Choose file ]"),
                Span::styled(hint, muted),
            ])]
        }
        Widget::Section { title, description } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))];
            if !description.is_empty() {
                lines.push(Line::from(Span::styled(description.clone(), muted)));
            }
            lines
        }
        Widget::Columns { count } => {
            let cells = vec!["  column  "; *count as usize].join("│");
            vec![Line::from(Span::styled(format!("│{cells}│"), muted))]
        }
        Widget::Divider => vec![Line::from(Span::styled("─".repeat(30), muted))],
        Widget::Spacer { height } => {
            vec![Line::from(Span::styled(format!("↕ {height}px"), muted))]
        }
        Widget::Heading { level, text } => vec![Line::from(Span::styled(
            format!("{} {text}", "#".repeat(*level as usize)),
            Style::default().add_modifier(Modifier::BOLD),
        ))],
        Widget::Paragraph { text } => vec![Line::from(text.clone())],
    }
}

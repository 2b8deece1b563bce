//! 字段类型注册表
//!
//! 每种字段类型只在这里注册一次：显示名、面板分组、默认模板、属性面板条目，
//! 以及画布/预览/导出共用的控件映射。新增字段类型不需要改动渲染器或导出器。

pub mod property;
pub mod templates;

use crate::error::FormError;
use crate::models::{Category, Field, FieldIdGen, FieldType};
use crate::render::widget::{project, Widget};

pub use property::{EditorKind, PropertyKey, PropertyValue};
pub use templates::FieldTemplate;

use PropertyKey as P;

pub struct FieldTypeSpec {
    pub field_type: FieldType,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub template: fn() -> FieldTemplate,
    pub widget: fn(&Field) -> Widget,
    pub properties: &'static [PropertyKey],
}

impl std::fmt::Debug for FieldTypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTypeSpec")
            .field("field_type", &self.field_type)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

const TEXT_PROPS: &[PropertyKey] = &[
    P::Label,
    P::Placeholder,
    P::DefaultValue,
    P::Description,
    P::Required,
    P::MinLength,
    P::MaxLength,
    P::Pattern,
];
const TEXTAREA_PROPS: &[PropertyKey] = &[
    P::Label,
    P::Placeholder,
    P::DefaultValue,
    P::Description,
    P::Required,
    P::Rows,
    P::MinLength,
    P::MaxLength,
];
const PLAIN_INPUT_PROPS: &[PropertyKey] = &[
    P::Label,
    P::Placeholder,
    P::DefaultValue,
    P::Description,
    P::Required,
];
const NUMBER_PROPS: &[PropertyKey] = &[
    P::Label,
    P::Placeholder,
    P::DefaultValue,
    P::Description,
    P::Required,
    P::Min,
    P::Max,
    P::Step,
];
const PASSWORD_PROPS: &[PropertyKey] = &[
    P::Label,
    P::Placeholder,
    P::Description,
    P::Required,
    P::MinLength,
    P::MaxLength,
];
const SELECT_PROPS: &[PropertyKey] = &[P::Label, P::Placeholder, P::Description, P::Required];
const CHOICE_PROPS: &[PropertyKey] = &[P::Label, P::Description, P::Required];
const DATE_PROPS: &[PropertyKey] = &[P::Label, P::DefaultValue, P::Description, P::Required];
const FILE_PROPS: &[PropertyKey] = &[P::Label, P::Description, P::Required, P::Accept, P::Multiple];
const RANGE_PROPS: &[PropertyKey] = &[
    P::Label,
    P::DefaultValue,
    P::Description,
    P::Min,
    P::Max,
    P::Step,
];
const COLOR_PROPS: &[PropertyKey] = &[P::Label, P::DefaultValue, P::Description];
const SECTION_PROPS: &[PropertyKey] = &[P::Title, P::Description];
const COLUMNS_PROPS: &[PropertyKey] = &[P::Columns];
const DIVIDER_PROPS: &[PropertyKey] = &[];
const SPACER_PROPS: &[PropertyKey] = &[P::Height];
const HEADING_PROPS: &[PropertyKey] = &[P::Text, P::Level];
const PARAGRAPH_PROPS: &[PropertyKey] = &[P::Text];

macro_rules! register {
    ($ty:ident, $name:literal, $icon:literal, $cat:ident, $tpl:ident, $props:ident) => {
        FieldTypeSpec {
            field_type: FieldType::$ty,
            name: $name,
            icon: $icon,
            category: Category::$cat,
            template: templates::$tpl,
            widget: project::$tpl,
            properties: $props,
        }
    };
}

/// 按 `FieldType` 的声明顺序排列
pub static REGISTRY: [FieldTypeSpec; 20] = [
    register!(Text, "Text Input", "T", Basic, text, TEXT_PROPS),
    register!(Textarea, "Text Area", "¶", Basic, textarea, TEXTAREA_PROPS),
    register!(Email, "Email", "@", Basic, email, PLAIN_INPUT_PROPS),
    register!(Number, "Number", "#", Basic, number, NUMBER_PROPS),
    register!(Select, "Dropdown", "▾", Choice, select, SELECT_PROPS),
    register!(Checkbox, "Checkboxes", "☑", Choice, checkbox, CHOICE_PROPS),
    register!(Radio, "Radio Buttons", "◉", Choice, radio, CHOICE_PROPS),
    register!(Date, "Date Picker", "◷", Advanced, date, DATE_PROPS),
    register!(File, "File Upload", "⇪", Advanced, file, FILE_PROPS),
    register!(Range, "Range Slider", "↔", Advanced, range, RANGE_PROPS),
    register!(Color, "Color Picker", "◐", Advanced, color, COLOR_PROPS),
    register!(Password, "Password", "*", Basic, password, PASSWORD_PROPS),
    register!(Tel, "Phone", "☎", Basic, tel, PLAIN_INPUT_PROPS),
    register!(Url, "URL", "⌘", Basic, url, PLAIN_INPUT_PROPS),
    register!(Section, "Section", "§", Layout, section, SECTION_PROPS),
    register!(Columns, "Columns", "▥", Layout, columns, COLUMNS_PROPS),
    register!(Divider, "Divider", "―", Layout, divider, DIVIDER_PROPS),
    register!(Spacer, "Spacer", "␣", Layout, spacer, SPACER_PROPS),
    register!(Heading, "Heading", "H", Content, heading, HEADING_PROPS),
    register!(Paragraph, "Paragraph", "≡", Content, paragraph, PARAGRAPH_PROPS),
];

pub fn spec_for(field_type: FieldType) -> &'static FieldTypeSpec {
    &REGISTRY[field_type.index()]
}

/// 按类型实例化一个新字段（模板的深拷贝 + 新 ID）
pub fn instantiate(field_type: FieldType, ids: &mut FieldIdGen) -> Field {
    let template = (spec_for(field_type).template)();
    Field {
        id: ids.next_id(),
        field_type,
        props: template.props,
        options: template.options,
    }
}

pub fn instantiate_tag(tag: &str, ids: &mut FieldIdGen) -> Result<Field, FormError> {
    let field_type: FieldType = tag.parse()?;
    Ok(instantiate(field_type, ids))
}

/// 字段对应的控件（画布、预览、导出共用）
pub fn widget_for(field: &Field) -> Widget {
    (spec_for(field.field_type).widget)(field)
}

/// 元素面板：按分组和搜索词过滤
pub fn palette(category: Option<Category>, query: &str) -> Vec<&'static FieldTypeSpec> {
    let query = query.trim().to_lowercase();
    REGISTRY
        .iter()
        .filter(|spec| category.map_or(true, |c| spec.category == c))
        .filter(|spec| {
            query.is_empty()
                || spec.name.to_lowercase().contains(&query)
                || spec.field_type.as_str().contains(&query)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/schema/registry.rs"]
mod tests;

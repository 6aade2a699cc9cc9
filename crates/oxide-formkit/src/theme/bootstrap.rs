//! Bootstrap 5 theme.

use super::TemplateKind;
use crate::field::FieldType;

const FORM: &str = r#"<form name="{{ form.name }}"{% if form.id %} id="{{ form.id }}"{% endif %} method="{{ form.method }}" action="{{ form.action }}"{% if form.style %} style="{{ form.style }}"{% endif %}{% if form.multipart %} enctype="multipart/form-data"{% endif %}{% if form.classes %} class="{{ form.classes }}"{% endif %}>
<div class="row" id="row_main">
{{ elements | safe }}</div>
</form>
"#;

const LABEL: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
<label{% if field.id %} id="{{ field.id }}"{% endif %} class="control-label{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}>{{ field.value }}</label>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const TEXT_LABEL: &str = r#"<div id="group_{{ field.name }}" class="{% if field.group_classes %}{{ field.group_classes }} {% endif %}row">
<label{% if field.id %} for="static_{{ field.id }}"{% endif %} class="col-sm-2 col-form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}">{{ field.label }}</label>
<div class="col-sm-10">
<input type="text" readonly class="form-control-plaintext{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %} name="static_{{ field.name }}"{% if field.id %} id="static_{{ field.id }}"{% endif %} value="{{ field.value }}">
</div>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const TEXT: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="text" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="form-control{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% if field.value %} value="{{ field.value }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const PASSWORD: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="password" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="form-control{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const SELECT: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<select name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="form-select{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>
{% for option in field.options %}<option value="{{ option.key }}"{% if option.selected %} selected{% endif %}>{{ option.value }}</option>
{% endfor %}</select>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const RADIO: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}">{{ field.label }}</label>
{% endif %}{% for option in field.options %}<div class="form-check">
<input class="form-check-input{% if field.classes %} {{ field.classes }}{% endif %}" type="radio" name="{{ field.name }}" id="{{ field.id }}_{{ option.key }}" value="{{ option.key }}"{% if option.selected %} checked{% endif %}>
<label class="form-check-label" for="{{ field.id }}_{{ option.key }}">{{ option.value }}</label>
</div>
{% endfor %}{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const TEXTAREA: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<textarea name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="form-control{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %} rows="6">{{ field.value }}</textarea>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const CHECKBOX: &str = r#"<div id="group_{{ field.name }}" class="form-check{% if field.group_classes %} {{ field.group_classes }}{% endif %}">
<input type="checkbox" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} value="{{ field.value }}" class="form-check-input{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>
{% if field.label %}<label class="form-check-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const FILE: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="form-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="file" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="form-control{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const HIDDEN: &str = r#"<input type="hidden" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.value %} value="{{ field.value }}"{% endif %}>
"#;

const BUTTON: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="control-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<button type="button" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="btn{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{{ field.value }}</button>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

const SUBMIT: &str = r#"<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% if field.label %}<label class="control-label{% if field.label_classes %} {{ field.label_classes }}{% endif %}"{% if field.id %} for="{{ field.id }}"{% endif %}>{{ field.label }}</label>
{% endif %}<button type="submit" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} class="btn{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{{ field.value }}</button>
{% if field.help_text %}<small id="{{ field.id }}Help" class="form-text text-muted">{{ field.help_text }}</small>
{% endif %}</div>
"#;

// Closes the current row container and opens the next one.
const ROW: &str = r#"</div>
<div class="row" id="row_{{ field.id }}">
"#;

pub(super) fn template(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Form => FORM,
        TemplateKind::Field(field_type) => match field_type {
            FieldType::Label => LABEL,
            FieldType::Text => TEXT,
            FieldType::TextLabel => TEXT_LABEL,
            FieldType::Password => PASSWORD,
            FieldType::Select => SELECT,
            FieldType::Radio => RADIO,
            FieldType::Textarea => TEXTAREA,
            FieldType::Checkbox => CHECKBOX,
            FieldType::File => FILE,
            FieldType::Hidden => HIDDEN,
            FieldType::Button => BUTTON,
            FieldType::Submit => SUBMIT,
            FieldType::Row => ROW,
        },
    }
}

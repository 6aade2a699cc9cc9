//! Plain HTML theme.
//!
//! No framework classes. A field is wrapped in a group `<div>` only when it
//! ends up with group classes.

use super::TemplateKind;
use crate::field::FieldType;

macro_rules! grouped {
    ($body:literal) => {
        concat!(
            r#"{% if field.group_classes %}<div id="group_{{ field.name }}" class="{{ field.group_classes }}">
{% endif %}"#,
            $body,
            r#"{% if field.group_classes %}
</div>{% endif %}
"#
        )
    };
}

const FORM: &str = r#"<form name="{{ form.name }}"{% if form.id %} id="{{ form.id }}"{% endif %} method="{{ form.method }}" action="{{ form.action }}"{% if form.style %} style="{{ form.style }}"{% endif %}{% if form.multipart %} enctype="multipart/form-data"{% endif %}{% if form.classes %} class="{{ form.classes }}"{% endif %}>
{{ elements | safe }}</form>
"#;

const LABEL: &str = grouped!(
    r#"<label{% if field.id %} id="{{ field.id }}"{% endif %} class="control-label{% if field.classes %} {{ field.classes }}{% endif %}"{% if field.style %} style="{{ field.style }}"{% endif %}>{{ field.value }}</label>"#
);

const TEXT_LABEL: &str = grouped!(
    r#"<label{% if field.id %} for="static_{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
<input type="text" readonly{% if field.id %} id="static_{{ field.id }}"{% endif %} name="static_{{ field.name }}"{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %} value="{{ field.value }}">"#
);

const TEXT: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="text" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% if field.value %} value="{{ field.value }}"{% endif %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const PASSWORD: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="password" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const SELECT: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<select name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>
{% for option in field.options %}<option value="{{ option.key }}"{% if option.selected %} selected{% endif %}>{{ option.value }}</option>
{% endfor %}</select>{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const RADIO: &str = grouped!(
    r#"{% if field.label %}<span{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</span><br />
{% endif %}{% for option in field.options %}<input type="radio" name="{{ field.name }}" id="{{ field.id }}_{{ option.key }}" value="{{ option.key }}"{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if option.selected %} checked{% endif %}> <label for="{{ field.id }}_{{ option.key }}">{{ option.value }}</label><br />
{% endfor %}{% if field.help_text %}<small>{{ field.help_text }}</small>{% endif %}"#
);

const TEXTAREA: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<textarea name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %} rows="6">{{ field.value }}</textarea>{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const CHECKBOX: &str = grouped!(
    r#"<input type="checkbox" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %} value="{{ field.value }}"{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{% if field.label %}
<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>{% endif %}{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const FILE: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<input type="file" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{% if field.help_text %}
<small>{{ field.help_text }}</small>{% endif %}"#
);

const HIDDEN: &str = r#"<input type="hidden" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.value %} value="{{ field.value }}"{% endif %}>
"#;

const BUTTON: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<button type="button" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{{ field.value }}</button>"#
);

const SUBMIT: &str = grouped!(
    r#"{% if field.label %}<label{% if field.id %} for="{{ field.id }}"{% endif %}{% if field.label_classes %} class="{{ field.label_classes }}"{% endif %}>{{ field.label }}</label>
{% endif %}<button type="submit" name="{{ field.name }}"{% if field.id %} id="{{ field.id }}"{% endif %}{% if field.classes %} class="{{ field.classes }}"{% endif %}{% if field.style %} style="{{ field.style }}"{% endif %}{% for attr in field.attributes %} {{ attr.name }}="{{ attr.value }}"{% endfor %}>{{ field.value }}</button>"#
);

const ROW: &str = "<br />\n";

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

//! Jinja templates for the HTML view. Names end in `.html` so that
//! `minijinja` auto-escapes interpolated values.

pub const MESSAGE_NAME: &str = "message_content.html";
pub const MESSAGE: &str = concat!(
    r#"<div class="self-end message-content w-full flex flex-col gap-2">"#,
    "{% for node in nodes %}{{ node|safe }}{% endfor %}",
    "</div>",
);

pub const CONTENT_NAME: &str = "content_block.html";
pub const CONTENT: &str = concat!(
    r#"<div class="flex flex-col gap-4">"#,
    "{% if input %}{{ input|safe }}{% endif %}",
    "{% if output %}",
    r#"{% if output.label %}<div class="font-medium">{{ output.label }}</div>{% endif %}"#,
    "{{ output.html|safe }}",
    "{% endif %}",
    "</div>",
);

pub const TIMESTAMP_NAME: &str = "timestamp.html";
pub const TIMESTAMP: &str =
    r#"<div class="text-xs text-muted-foreground mt-1 {{ align }}">{{ text }}</div>"#;

pub const INLINED_NAME: &str = "inlined_elements.html";
pub const INLINED: &str = concat!(
    r#"<div class="inlined-elements flex flex-col gap-2">"#,
    "{% for element in elements %}",
    r#"{% if element.type == "image" and element.url %}"#,
    r#"<img class="inline-image" src="{{ element.url }}" alt="{{ element.name }}">"#,
    "{% elif element.url %}",
    r#"<a class="inline-element" href="{{ element.url }}">{{ element.name }}</a>"#,
    "{% else %}",
    r#"<span class="inline-element">{{ element.name }}</span>"#,
    "{% endif %}",
    "{% endfor %}",
    "</div>",
);

//! Materialize schema fragments from form records.
//!
//! Each generator turns one submitted form into a widget schema carrying the
//! styles and data mappings the form describes. Ids are assigned here, once,
//! and survive every later conversion.

use crate::binding::RefPath;
use crate::schema::style::put;
use crate::schema::{
    DataMappingEntry, DataMappingOperation, DataMappingOperator, EventEffect, EventSchema,
    EventSource, EventTarget, LinkageType, StyleEntry, StyleMap, TriggerType, ValueType,
    WidgetSchema, WidgetType,
};

use super::data::{
    Alignment, ContainerFormData, EventFormData, FontFormData, ImageFormData, Layout,
    LinkFormData, ListFormData, Positioning, TextFormData,
};

/// An interpolate operation for a picked field path, if one was picked.
fn source_ref(path: &Option<Vec<String>>, output: Option<ValueType>) -> Option<DataMappingOperation> {
    path.as_ref()
        .filter(|path| !path.is_empty())
        .map(|path| DataMappingOperation::interpolate(RefPath::from_fields(path).to_string(), output))
}

/// The font style entries shared by text-bearing widgets. Bold maps to
/// weight 600, regular to 400.
fn font_styles(font: &FontFormData, include_color: bool) -> StyleMap {
    let mut styles = StyleMap::new();
    put(&mut styles, StyleEntry::px("font-size", font.font_size));
    put(&mut styles, StyleEntry::plain("font-family", font.font_family.clone()));
    put(&mut styles, StyleEntry::px("line-height", font.line_height));
    put(
        &mut styles,
        StyleEntry::plain("font-weight", if font.font_weight { 600.0 } else { 400.0 }),
    );
    if include_color {
        put(&mut styles, StyleEntry::plain("color", font.color.clone()));
    }
    styles
}

/// A sizing entry: pixel value when set, `initial` when the form left it at
/// zero.
fn size_entry(name: &str, value: f64) -> StyleEntry {
    if value != 0.0 {
        StyleEntry::px(name, value)
    } else {
        StyleEntry::plain(name, "initial")
    }
}

/// Generate a text widget schema: literal content plus optional data-source
/// and state bindings on the `text` slot.
pub fn generate_text_schema(form: &TextFormData) -> WidgetSchema {
    let mut schema = WidgetSchema::new(WidgetType::Text, &form.name, &form.desc);
    schema.data_mapping.insert(
        "text".into(),
        DataMappingEntry::literal(form.text.clone())
            .with_state(source_ref(&form.text_state, Some(ValueType::String)))
            .with_operation(source_ref(&form.text_data_source, Some(ValueType::String))),
    );
    schema.styles = font_styles(&form.font, true);
    schema
}

/// Generate a link widget schema: `title`, `target`, and `url` slots.
pub fn generate_link_schema(form: &LinkFormData) -> WidgetSchema {
    let mut schema = WidgetSchema::new(WidgetType::Link, &form.name, &form.desc);
    schema.data_mapping.insert(
        "title".into(),
        DataMappingEntry::literal(form.title.clone())
            .with_operation(source_ref(&form.title_data_source, Some(ValueType::String))),
    );
    schema.data_mapping.insert(
        "target".into(),
        DataMappingEntry::literal(form.target.as_str()),
    );
    schema.data_mapping.insert(
        "url".into(),
        DataMappingEntry::literal(form.url.clone())
            .with_operation(source_ref(&form.url_data_source, Some(ValueType::String))),
    );
    schema.styles = font_styles(&form.font, false);
    schema
}

/// Generate an image widget schema: `src` slot plus fit and size styles.
pub fn generate_image_schema(form: &ImageFormData) -> WidgetSchema {
    let mut schema = WidgetSchema::new(WidgetType::Image, &form.name, &form.desc);
    schema.data_mapping.insert(
        "src".into(),
        DataMappingEntry::literal(form.src.clone())
            .with_operation(source_ref(&form.src_data_source, Some(ValueType::String))),
    );
    put(&mut schema.styles, StyleEntry::plain("object-fit", form.object_fit.as_str()));
    put(&mut schema.styles, StyleEntry::px("width", form.width));
    put(&mut schema.styles, StyleEntry::px("height", form.height));
    schema
}

/// Generate a container-family widget schema with the full layout
/// derivation.
///
/// Positioning: offsets and `z-index` only exist off `static`; offsets are
/// honored only when the raw form text is non-empty and numeric. Sizing
/// falls back to `initial` for unset values. Column layout switches to flex
/// only when an alignment demands it; row layout always does, with the
/// alignment axes swapped.
pub fn generate_container_schema(form: &ContainerFormData, widget_type: WidgetType) -> WidgetSchema {
    let mut schema = WidgetSchema::new(widget_type, &form.name, &form.desc);
    let styles = &mut schema.styles;

    put(styles, StyleEntry::plain("display", "block"));
    put(styles, StyleEntry::plain("overflow", "auto"));
    put(styles, StyleEntry::plain("position", form.positioning.as_str()));
    if form.positioning != Positioning::Static {
        put(styles, StyleEntry::plain("z-index", form.z_index));
    }
    put(styles, StyleEntry::px("margin", form.margin));
    put(styles, StyleEntry::px("padding", form.padding));
    put(styles, size_entry("width", form.width));
    put(styles, size_entry("max-width", form.max_width));
    put(styles, size_entry("min-width", form.min_width));
    put(styles, size_entry("height", form.height));
    put(styles, size_entry("max-height", form.max_height));
    put(styles, size_entry("min-height", form.min_height));
    put(styles, StyleEntry::px("border-width", form.border_width));
    put(styles, StyleEntry::plain("border-style", form.border_style.as_str()));
    put(styles, StyleEntry::plain("border-color", form.border_color.clone()));
    put(styles, StyleEntry::px("border-radius", form.border_radius));
    put(
        styles,
        StyleEntry::plain("background-color", form.background_color.clone()),
    );

    // Offsets are meaningless under static positioning.
    if form.positioning != Positioning::Static {
        let offsets = [
            ("top", &form.top),
            ("right", &form.right),
            ("bottom", &form.bottom),
            ("left", &form.left),
        ];
        for (name, raw) in offsets {
            if raw.is_empty() {
                continue;
            }
            if let Ok(offset) = raw.trim().parse::<f64>() {
                put(styles, StyleEntry::px(name, offset));
            }
        }
    }

    match form.layout {
        Layout::Column => {
            // Left-aligned, top-aligned column is what normal flow already
            // does; anything else needs flex.
            if form.horizontal_alignment != Alignment::Left
                || form.vertical_alignment != Alignment::Top
            {
                put(styles, StyleEntry::plain("display", "flex"));
                put(styles, StyleEntry::plain("flex-direction", "column"));
            }
            if form.vertical_alignment != Alignment::Top {
                put(
                    styles,
                    StyleEntry::plain("justify-content", form.vertical_alignment.flex_value()),
                );
            }
            if form.horizontal_alignment != Alignment::Left {
                put(
                    styles,
                    StyleEntry::plain("align-items", form.horizontal_alignment.flex_value()),
                );
            }
        }
        Layout::Row => {
            put(styles, StyleEntry::plain("display", "flex"));
            put(styles, StyleEntry::plain("flex-direction", "row"));
            if form.vertical_alignment != Alignment::Top {
                put(
                    styles,
                    StyleEntry::plain("align-items", form.vertical_alignment.flex_value()),
                );
            }
            if form.horizontal_alignment != Alignment::Left {
                put(
                    styles,
                    StyleEntry::plain("justify-content", form.horizontal_alignment.flex_value()),
                );
            }
        }
    }

    schema
}

/// Generate a list widget schema: a container whose `list` slot carries the
/// repeating-item binding. The `map` operator marks it for the presentation
/// layer; the interpolate evaluator does not run it.
pub fn generate_list_schema(form: &ListFormData) -> WidgetSchema {
    let mut schema = generate_container_schema(&form.container, WidgetType::List);
    schema.data_mapping.insert(
        "list".into(),
        DataMappingEntry::default().with_operation(Some(DataMappingOperation {
            ref_path: RefPath::from_fields(&form.list_data_source).to_string(),
            operator: DataMappingOperator::Map,
            output: None,
        })),
    );
    schema
}

/// Export an event schema from the event form. Both sides are wired as
/// isolated widgets.
pub fn export_event_schema(form: &EventFormData) -> EventSchema {
    let mut effect = EventEffect::default();
    if let Some(state_name) = &form.state_name {
        effect.states.push(state_name.clone());
    }
    EventSchema {
        name: form.name.clone(),
        event_type: form.event_type,
        source_widget: EventSource {
            id: form.source_widget.as_str().into(),
            trigger: TriggerType::Isolated,
        },
        target_widget: EventTarget {
            id: form.target_widget.as_str().into(),
            linkage: LinkageType::Isolated,
        },
        effect,
    }
}

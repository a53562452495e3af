//! Form records and schema materialization.
//!
//! The editor surface submits flat key/value payloads; this module types
//! them ([`data`]) and turns them into widget schema fragments
//! ([`generate`]). State forms go through [`crate::calc`] instead, since
//! they need the active data-source schema.

pub mod data;
pub mod generate;

use serde::Deserialize;

use crate::schema::{WidgetSchema, WidgetType};

pub use data::{
    Alignment, BorderStyle, ContainerFormData, EventFormData, FontFormData, ImageFormData,
    Layout, LinkFormData, LinkTarget, ListFormData, ObjectFit, Positioning, StateFormData,
    TextFormData,
};
pub use generate::{
    export_event_schema, generate_container_schema, generate_image_schema, generate_link_schema,
    generate_list_schema, generate_text_schema,
};

/// A widget form payload, dispatched on its `widgetType` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "widgetType", rename_all = "lowercase")]
pub enum WidgetFormData {
    Container(ContainerFormData),
    Text(TextFormData),
    Link(LinkFormData),
    Image(ImageFormData),
    List(ListFormData),
}

/// Materialize the schema fragment a widget form describes.
pub fn form_to_schema(form: &WidgetFormData) -> WidgetSchema {
    match form {
        WidgetFormData::Container(form) => {
            generate_container_schema(form, WidgetType::Container)
        }
        WidgetFormData::Text(form) => generate_text_schema(form),
        WidgetFormData::Link(form) => generate_link_schema(form),
        WidgetFormData::Image(form) => generate_image_schema(form),
        WidgetFormData::List(form) => generate_list_schema(form),
    }
}

//! The component envelope: widget tree, props, and declared states.

use serde::{Deserialize, Serialize};

use super::state::StateCollection;
use super::widget::WidgetSchema;
use crate::source::DataSourceSchema;

/// Component-level props. The data-source schema is the one every mapping
/// and state calculation on this component resolves against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentProps {
    #[serde(
        rename = "dataSourceSchema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data_source_schema: Option<DataSourceSchema>,
}

/// A persisted component: the widget-family root plus its data context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetSchema>,
    #[serde(default)]
    pub props: ComponentProps,
    #[serde(default)]
    pub states: StateCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ValueType, WidgetType};
    use serde_json::json;

    #[test]
    fn empty_component_round_trips() {
        let component = ComponentSchema::default();
        let text = serde_json::to_string(&component).unwrap();
        let back: ComponentSchema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn carries_widget_and_source() {
        let component = ComponentSchema {
            widget: Some(WidgetSchema::new(WidgetType::Container, "root", "")),
            props: ComponentProps {
                data_source_schema: Some(DataSourceSchema {
                    name: "data".into(),
                    value_type: ValueType::Object,
                    example: json!({}),
                    fields: None,
                }),
            },
            states: StateCollection::new(),
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["widget"]["type"], "container");
        assert_eq!(json["props"]["dataSourceSchema"]["name"], "data");
    }
}

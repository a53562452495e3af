//! Event wiring schemas: a named trigger on one widget linked to an effect on
//! another, optionally pushing state recalculations.

use serde::{Deserialize, Serialize};

use super::widget::WidgetId;

/// The kind of interaction that fires the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    Click,
    Mouseenter,
    Mouseleave,
    Interval,
    Exposure,
    RefreshData,
}

/// How the triggering side is scoped. Only isolated widgets are wired today;
/// list-item and row/column triggers are declared for schema compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Isolated,
}

/// How the receiving side is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkageType {
    Isolated,
}

/// The widget an event originates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSource {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub trigger: TriggerType,
}

/// The widget an event acts upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTarget {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub linkage: LinkageType,
}

/// What happens when the event fires: the named states to recompute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEffect {
    #[serde(default)]
    pub states: Vec<String>,
}

/// A complete event wiring between two widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSchema {
    pub name: String,
    #[serde(rename = "eventType")]
    pub event_type: EventType,
    #[serde(rename = "sourceWidget")]
    pub source_widget: EventSource,
    #[serde(rename = "targetWidget")]
    pub target_widget: EventTarget,
    pub effect: EventEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let event = EventSchema {
            name: "openDetail".into(),
            event_type: EventType::Click,
            source_widget: EventSource {
                id: "src".into(),
                trigger: TriggerType::Isolated,
            },
            target_widget: EventTarget {
                id: "dst".into(),
                linkage: LinkageType::Isolated,
            },
            effect: EventEffect {
                states: vec!["detailRows".into()],
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "click");
        assert_eq!(json["sourceWidget"]["type"], "isolated");
        assert_eq!(json["effect"]["states"][0], "detailRows");
    }

    #[test]
    fn refresh_data_keeps_its_casing() {
        assert_eq!(
            serde_json::to_string(&EventType::RefreshData).unwrap(),
            "\"refreshData\""
        );
    }
}

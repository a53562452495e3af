//! Schema types: widget-family schemas, styles, data mappings, states,
//! events, and the component envelope.

pub mod component;
pub mod event;
pub mod mapping;
pub mod state;
pub mod style;
pub mod value;
pub mod widget;

pub use component::{ComponentProps, ComponentSchema};
pub use event::{EventEffect, EventSchema, EventSource, EventTarget, EventType, LinkageType, TriggerType};
pub use mapping::{DataMappingEntry, DataMappingMap, DataMappingOperation, DataMappingOperator};
pub use state::{StateCalculation, StateCollection, StateOperator, StateSchema};
pub use style::{StyleEntry, StyleMap, StyleUnit, StyleValue};
pub use value::ValueType;
pub use widget::{WidgetId, WidgetKind, WidgetSchema, WidgetType};

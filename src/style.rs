//! Style compilation: structured style maps → concrete style strings.

use indexmap::IndexMap;

use crate::schema::WidgetSchema;

/// Compile a widget's style entries into `property → "value+unit"` strings.
///
/// Returns an empty map when the widget carries no styles. Iteration order
/// is the entry insertion order, so compiling the same schema twice yields
/// byte-identical output.
pub fn compile_styles(schema: &WidgetSchema) -> IndexMap<String, String> {
    schema
        .styles
        .iter()
        .map(|(name, entry)| (name.clone(), entry.render()))
        .collect()
}

/// Compile a widget's styles into one inline style string:
/// `name: value; name: value;`.
pub fn compile_style_str(schema: &WidgetSchema) -> String {
    compile_styles(schema)
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Category catalog display formatting

use crate::models::CategoryCatalog;

/// Format the built-in category catalog as a table
pub fn format_catalog(catalog: &CategoryCatalog) -> String {
    if catalog.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let key_width = catalog
        .defs()
        .iter()
        .map(|d| d.key.len())
        .max()
        .unwrap_or(3)
        .max(3);
    let name_width = catalog
        .defs()
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<key_width$}  {:<name_width$}  {:<7}  {}\n",
        "Key",
        "Name",
        "Color",
        "Kind",
        key_width = key_width,
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<key_width$}  {:-<name_width$}  {:-<7}  {:-<7}\n",
        "",
        "",
        "",
        "",
        key_width = key_width,
        name_width = name_width,
    ));

    for def in catalog.defs() {
        output.push_str(&format!(
            "{:<key_width$}  {:<name_width$}  {:<7}  {}\n",
            def.key,
            def.name,
            def.color,
            def.kind,
            key_width = key_width,
            name_width = name_width,
        ));
    }

    output
}

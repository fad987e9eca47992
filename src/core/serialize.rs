//! Render a [`LocaleResource`] back to text.

use crate::core::LocaleResource;

/// Serialize entries in order, each with the exact text it was parsed from.
pub fn serialize(resource: &LocaleResource) -> String {
    let mut out = String::new();
    for entry in &resource.entries {
        entry.write_to(&mut out);
    }
    out
}

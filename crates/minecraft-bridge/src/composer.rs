//! Styled text composition
//!
//! Converts the orchestrator's descriptor JSON into protocol-ready styled
//! components. Validation is per-element and non-fatal where possible:
//! malformed entries are warned about and dropped rather than failing the
//! whole batch, so the audit trail lives in the logs.

use chat_agent_core::{BridgeError, Result, StyledComponent, TextColor};
use serde_json::Value;
use tracing::warn;

/// A single styled-text descriptor as supplied by the orchestrator
///
/// Unset style flags mean "inherit the server default", which is distinct
/// from an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub text: String,
    /// Palette color name; validated against the palette in [`compose`]
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
}

/// Parse descriptor JSON into typed descriptors.
///
/// Fails with `InvalidInput` when the JSON is not a list; elements that
/// are not objects are skipped with a warning. Unknown and malformed
/// attributes inside an object are warned about and ignored.
pub fn parse_descriptors(json: &str) -> Result<Vec<StyleDescriptor>> {
    let values: Vec<Value> = serde_json::from_str(json).map_err(|e| {
        BridgeError::InvalidInput(format!("rich text JSON must be a list of segment objects: {e}"))
    })?;

    let mut descriptors = Vec::with_capacity(values.len());
    for value in &values {
        match value {
            Value::Object(map) => descriptors.push(descriptor_from_map(map)),
            other => warn!("Skipping rich text segment that is not an object: {}", other),
        }
    }

    Ok(descriptors)
}

fn descriptor_from_map(map: &serde_json::Map<String, Value>) -> StyleDescriptor {
    let mut descriptor = StyleDescriptor::default();

    for (key, value) in map {
        match key.as_str() {
            "text" => match value.as_str() {
                Some(text) => descriptor.text = text.to_string(),
                None => warn!("Rich text 'text' must be a string, got {}", value),
            },
            "color" => match value.as_str() {
                Some(color) => descriptor.color = Some(color.to_string()),
                None => warn!("Rich text 'color' must be a string, got {}", value),
            },
            "bold" | "italic" | "underlined" | "strikethrough" | "obfuscated" => {
                match value.as_bool() {
                    Some(flag) => {
                        let slot = match key.as_str() {
                            "bold" => &mut descriptor.bold,
                            "italic" => &mut descriptor.italic,
                            "underlined" => &mut descriptor.underlined,
                            "strikethrough" => &mut descriptor.strikethrough,
                            _ => &mut descriptor.obfuscated,
                        };
                        *slot = Some(flag);
                    }
                    None => warn!("Rich text style '{}' must be a boolean, got {}", key, value),
                }
            }
            other => warn!("Ignoring unknown rich text attribute '{}'", other),
        }
    }

    descriptor
}

/// Convert descriptors into wire-ready components, in input order.
///
/// An unknown color name drops the color attribute with a warning instead
/// of failing. Fails with `EmptyResult` when nothing valid remains.
pub fn compose(descriptors: &[StyleDescriptor]) -> Result<Vec<StyledComponent>> {
    let mut components = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let color = descriptor.color.as_deref().and_then(|name| {
            let parsed = TextColor::parse(name);
            if parsed.is_none() {
                warn!("Unknown text color '{}', falling back to default", name);
            }
            parsed
        });

        components.push(StyledComponent {
            text: descriptor.text.clone(),
            color,
            bold: descriptor.bold,
            italic: descriptor.italic,
            underlined: descriptor.underlined,
            strikethrough: descriptor.strikethrough,
            obfuscated: descriptor.obfuscated,
            extra: Vec::new(),
        });
    }

    if components.is_empty() {
        return Err(BridgeError::EmptyResult(
            "no valid rich text segments to send".to_string(),
        ));
    }

    Ok(components)
}

/// Plain-text projection of composed components, used for logging and
/// history even though the wire send uses the styled form.
pub fn plain_text_of(components: &[StyledComponent]) -> String {
    components.iter().map(|c| c.text.as_str()).collect()
}

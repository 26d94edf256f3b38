use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("recording is not a valid Recorder export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the JSON text of a Chrome DevTools Recorder export.
pub fn parse_recording(content: &str) -> Result<UserFlow, ParseError> {
    Ok(serde_json::from_str(content)?)
}

/// A recording exported from the Chrome DevTools Recorder panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFlow {
    pub title: String,
    /// DOM attribute the recorder was told to prefer when capturing selectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_attribute: Option<String>,
    pub steps: Vec<Step>,
}

/// One recorded user or browser action, tagged by the Recorder's `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    SetViewport(SetViewportStep),
    Navigate(NavigateStep),
    Click(ClickStep),
    DoubleClick(ClickStep),
    Hover(HoverStep),
    KeyDown(KeyStep),
    KeyUp(KeyStep),
    Scroll(ScrollStep),
    WaitForElement(WaitForElementStep),
    Change(ChangeStep),
    EmulateNetworkConditions(EmulateNetworkConditionsStep),
    WaitForExpression(WaitForExpressionStep),
    Close(CloseStep),
    CustomStep(CustomStep),
}

impl Step {
    /// The schema tag this step carries on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            Step::SetViewport(_) => "setViewport",
            Step::Navigate(_) => "navigate",
            Step::Click(_) => "click",
            Step::DoubleClick(_) => "doubleClick",
            Step::Hover(_) => "hover",
            Step::KeyDown(_) => "keyDown",
            Step::KeyUp(_) => "keyUp",
            Step::Scroll(_) => "scroll",
            Step::WaitForElement(_) => "waitForElement",
            Step::Change(_) => "change",
            Step::EmulateNetworkConditions(_) => "emulateNetworkConditions",
            Step::WaitForExpression(_) => "waitForExpression",
            Step::Close(_) => "close",
            Step::CustomStep(_) => "customStep",
        }
    }
}

/// One way of addressing a DOM element: a single selector string, or an
/// ordered list of alternatives where the first is the preferred spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    Single(String),
    Parts(Vec<String>),
}

impl Selector {
    /// First selector string of the group, if the group is non-empty.
    pub fn first(&self) -> Option<&str> {
        match self {
            Selector::Single(value) => Some(value),
            Selector::Parts(parts) => parts.first().map(String::as_str),
        }
    }
}

/// Mouse button designations the Recorder emits on click steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
}

/// Page event the recorder observed right after a step (navigation, etc).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertedEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewportStep {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub device_scale_factor: Option<f64>,
    #[serde(default)]
    pub is_mobile: Option<bool>,
    #[serde(default)]
    pub has_touch: Option<bool>,
    #[serde(default)]
    pub is_landscape: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateStep {
    pub url: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asserted_events: Vec<AssertedEvent>,
}

/// Shared by `click` and `doubleClick`, which carry the same fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickStep {
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub button: Option<MouseButton>,
    #[serde(default)]
    pub offset_x: Option<f64>,
    #[serde(default)]
    pub offset_y: Option<f64>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asserted_events: Vec<AssertedEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverStep {
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub target: Option<String>,
}

/// Shared by `keyDown` and `keyUp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStep {
    pub key: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asserted_events: Vec<AssertedEvent>,
}

/// A scroll either targets an element (selectors present) or absolute
/// page coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<Selector>>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitForElementStep {
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStep {
    pub selectors: Vec<Selector>,
    pub value: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmulateNetworkConditionsStep {
    pub download: f64,
    pub upload: f64,
    pub latency: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitForExpressionStep {
    pub expression: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseStep {
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomStep {
    pub name: String,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

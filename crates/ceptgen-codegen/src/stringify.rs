//! Step-to-code emission and scenario scaffolding.
//!
//! Every supported recorder step maps to one `I.*` call. Steps that cannot
//! be exported (unsupported type, no usable selector) are skipped with a
//! diagnostic; emission itself never fails.

use ceptgen_common::diagnostics::Diagnostics;
use ceptgen_common::schema::{
    ClickStep, HoverStep, KeyStep, MouseButton, NavigateStep, ScrollStep, SetViewportStep, Step,
    UserFlow, WaitForElementStep,
};

use crate::keys::canonical_key;
use crate::selector::{self, js_literal};
use crate::writer::LineWriter;

/// Indent unit of generated scenarios.
pub const INDENT: &str = "  ";

/// Emit the feature header, the empty setup hook, and the scenario opener,
/// then enter the scenario body block.
pub fn before_all_steps(out: &mut LineWriter, flow: &UserFlow) {
    out.append_line(&format!("Feature('{}');\n", js_literal(&flow.title)));
    out.append_line("Before(() => {\n\n    });\n");
    out.append_line(&format!(
        "Scenario(({}), async ({{ I }}) => {{\n          ",
        js_literal(&flow.title)
    ));
    out.start_block();
}

/// Close the scenario body and leave its block.
pub fn after_all_steps(out: &mut LineWriter) {
    out.append_line("});");
    out.end_block();
}

/// Emit the line (or lines) for one step. `flow` supplies the selector
/// attribute preference when the step belongs to a full recording; ad-hoc
/// steps pass `None`.
pub fn stringify_step(
    out: &mut LineWriter,
    step: &Step,
    flow: Option<&UserFlow>,
    diags: &mut Diagnostics,
) {
    let attribute = flow.and_then(|f| f.selector_attribute.as_deref());

    match step {
        Step::SetViewport(s) => append_viewport_step(out, s),
        Step::Navigate(s) => append_navigate_step(out, s),
        Step::Click(s) => append_click_step(out, s, attribute, diags),
        Step::DoubleClick(s) => append_double_click_step(out, s, attribute, diags),
        Step::Hover(s) => append_hover_step(out, s, attribute, diags),
        Step::KeyDown(s) => append_key_down_step(out, s),
        Step::KeyUp(s) => append_key_up_step(out, s),
        Step::Scroll(s) => append_scroll_step(out, s, attribute, diags),
        Step::WaitForElement(s) => append_wait_for_element_step(out, s, attribute, diags),
        Step::Change(_)
        | Step::EmulateNetworkConditions(_)
        | Step::WaitForExpression(_)
        | Step::Close(_)
        | Step::CustomStep(_) => {
            diags.warn(format!(
                "CodeceptJS export does not handle steps of type {}",
                step.type_name()
            ));
        }
    }
}

/// Convert a whole flow into a CodeceptJS scenario.
pub fn stringify(flow: &UserFlow, diags: &mut Diagnostics) -> String {
    let mut out = LineWriter::new(INDENT);
    {
        let mut scenario = ScenarioScope::open(&mut out, flow);
        for step in &flow.steps {
            scenario.append_step(step, flow, diags);
        }
    }
    out.finish()
}

/// Convert one step outside any flow, without selector preference.
pub fn stringify_single_step(step: &Step, diags: &mut Diagnostics) -> String {
    let mut out = LineWriter::new(INDENT);
    stringify_step(&mut out, step, None, diags);
    out.finish()
}

/// Scoped handle over an open scenario body. Releasing it closes the body
/// and restores indentation on every exit path.
pub struct ScenarioScope<'w> {
    out: &'w mut LineWriter,
}

impl<'w> ScenarioScope<'w> {
    pub fn open(out: &'w mut LineWriter, flow: &UserFlow) -> Self {
        before_all_steps(out, flow);
        ScenarioScope { out }
    }

    pub fn append_step(&mut self, step: &Step, flow: &UserFlow, diags: &mut Diagnostics) {
        stringify_step(self.out, step, Some(flow), diags);
    }
}

impl Drop for ScenarioScope<'_> {
    fn drop(&mut self) {
        after_all_steps(self.out);
    }
}

fn append_viewport_step(out: &mut LineWriter, step: &SetViewportStep) {
    out.append_line(&format!("I.resizeWindow({}, {})", step.width, step.height));
}

fn append_navigate_step(out: &mut LineWriter, step: &NavigateStep) {
    out.append_line(&format!("I.amOnPage({})", js_literal(&step.url)));
}

fn append_click_step(
    out: &mut LineWriter,
    step: &ClickStep,
    attribute: Option<&str>,
    diags: &mut Diagnostics,
) {
    match selector::resolve(&step.selectors, attribute) {
        Some(sel) => {
            if step.button == Some(MouseButton::Secondary) {
                out.append_line(&format!("I.rightClick({sel})"));
            } else {
                out.append_line(&format!("I.click({sel})"));
            }
        }
        None => diags.warn(format!(
            "the click on {} could not be exported to CodeceptJS, adjust the selectors and try again",
            selector::describe(&step.selectors)
        )),
    }
}

fn append_double_click_step(
    out: &mut LineWriter,
    step: &ClickStep,
    attribute: Option<&str>,
    diags: &mut Diagnostics,
) {
    match selector::resolve(&step.selectors, attribute) {
        Some(sel) => {
            out.append_line(&format!("I.doubleClick({sel})"));
        }
        None => diags.warn(format!(
            "the double click on {} could not be exported to CodeceptJS, adjust the selectors and try again",
            selector::describe(&step.selectors)
        )),
    }
}

fn append_hover_step(
    out: &mut LineWriter,
    step: &HoverStep,
    attribute: Option<&str>,
    diags: &mut Diagnostics,
) {
    match selector::resolve(&step.selectors, attribute) {
        Some(sel) => {
            out.append_line(&format!("I.moveCursorTo({sel}, 0, 0)"));
        }
        None => diags.warn(format!(
            "the hover on {} could not be exported to CodeceptJS, adjust the selectors and try again",
            selector::describe(&step.selectors)
        )),
    }
}

fn append_key_down_step(out: &mut LineWriter, step: &KeyStep) {
    if let Some(key) = canonical_key(&step.key) {
        out.append_line(&format!("I.pressKeyDown('{key}')"));
    }
}

fn append_key_up_step(out: &mut LineWriter, step: &KeyStep) {
    if let Some(key) = canonical_key(&step.key) {
        out.append_line(&format!("I.pressKeyUp('{key}')"));
    }
}

fn append_scroll_step(
    out: &mut LineWriter,
    step: &ScrollStep,
    attribute: Option<&str>,
    diags: &mut Diagnostics,
) {
    if let Some(selectors) = &step.selectors {
        match selector::resolve(selectors, attribute) {
            Some(sel) => {
                out.append_line(&format!("I.scrollTo({sel}, 0, 0)"));
            }
            None => diags.warn(format!(
                "the scroll to {} could not be exported to CodeceptJS, adjust the selectors and try again",
                selector::describe(selectors)
            )),
        }
    } else {
        out.append_line(&format!("I.scrollTo({}, {})", step.x, step.y));
    }
}

fn append_wait_for_element_step(
    out: &mut LineWriter,
    step: &WaitForElementStep,
    attribute: Option<&str>,
    diags: &mut Diagnostics,
) {
    match selector::resolve(&step.selectors, attribute) {
        Some(sel) => {
            out.append_line(&format!("\n      I.waitForElement({sel})"));
        }
        None => diags.warn(format!(
            "the wait for {} could not be exported to CodeceptJS, adjust the selectors and try again",
            selector::describe(&step.selectors)
        )),
    }
}

//! Given steps for message content BDD scenarios.

use super::world::MessageWorld;
use chatview::message_content::domain::{
    ContentSection, ElementDisplay, MessageElement, SectionSelector, ShowInput, Step,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a "{kind}" step with output "{output}""#)]
fn step_with_output(world: &mut MessageWorld, kind: String, output: String) {
    world.step = Some(Step::new("step-1", kind).with_output(output));
}

#[given(r#"a "{kind}" step with no output"#)]
fn step_without_output(world: &mut MessageWorld, kind: String) {
    world.step = Some(Step::new("step-1", kind));
}

#[given(r#"the step was created at "{created_at}""#)]
fn step_created_at(world: &mut MessageWorld, created_at: String) -> Result<(), eyre::Report> {
    let step = world.step_mut()?;
    step.created_at = Some(created_at.into());
    Ok(())
}

#[given("the message was written by the user")]
fn written_by_user(world: &mut MessageWorld) {
    world.is_user_message = true;
}

#[given(r#"the step input "{input}" is shown as "{language}""#)]
fn visible_input(
    world: &mut MessageWorld,
    input: String,
    language: String,
) -> Result<(), eyre::Report> {
    let step = world.step_mut()?;
    step.input = input;
    step.show_input = ShowInput::from_language(language);
    Ok(())
}

#[given(r#"the step input "{input}" is hidden"#)]
fn hidden_input(world: &mut MessageWorld, input: String) -> Result<(), eyre::Report> {
    let step = world.step_mut()?;
    step.input = input;
    step.show_input = ShowInput::Hidden;
    Ok(())
}

#[given("the step is still streaming")]
fn still_streaming(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    world.step_mut()?.streaming = true;
    Ok(())
}

#[given(r#"only the "{section_name}" section is selected"#)]
fn only_section(world: &mut MessageWorld, section_name: String) -> Result<(), eyre::Report> {
    let section: ContentSection = serde_json::from_value(serde_json::Value::String(section_name))
        .wrap_err("decode section name")?;
    world.sections = Some(SectionSelector::only(section));
    Ok(())
}

#[given(r#"a "{display_name}" element named "{name}" is attached to the step"#)]
fn attached_element(
    world: &mut MessageWorld,
    display_name: String,
    name: String,
) -> Result<(), eyre::Report> {
    let display: ElementDisplay = serde_json::from_value(serde_json::Value::String(display_name))
        .wrap_err("decode element display")?;
    let step_id = world.step_mut()?.id.clone();
    let id = format!("el-{}", world.elements.len() + 1);
    world
        .elements
        .push(MessageElement::new(id, name, display).with_for_id(step_id));
    Ok(())
}

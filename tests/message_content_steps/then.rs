//! Then steps for message content BDD scenarios.

use super::world::MessageWorld;
use chatview::message_content::domain::{Alignment, CURSOR_PLACEHOLDER, OutputSection};
use eyre::{ensure, eyre};
use rstest_bdd_macros::then;

fn output_section(world: &MessageWorld) -> Result<&OutputSection, eyre::Report> {
    world
        .tree()?
        .content()
        .and_then(|block| block.output.as_ref())
        .ok_or_else(|| eyre!("expected an output section"))
}

#[then(r#"the output section shows "{text}" without a label"#)]
fn output_without_label(world: &MessageWorld, text: String) -> Result<(), eyre::Report> {
    let output = output_section(world)?;
    ensure!(
        output.markdown.text == text,
        "unexpected output text: {:?}",
        output.markdown.text
    );
    ensure!(output.label.is_none(), "unexpected label: {:?}", output.label);
    Ok(())
}

#[then(r#"the output section is labelled "{label}""#)]
fn output_with_label(world: &MessageWorld, label: String) -> Result<(), eyre::Report> {
    let output = output_section(world)?;
    ensure!(
        output.label.as_deref() == Some(label.as_str()),
        "unexpected label: {:?}",
        output.label
    );
    Ok(())
}

#[then("the output section ends with the cursor placeholder")]
fn output_ends_with_cursor(world: &MessageWorld) -> Result<(), eyre::Report> {
    let output = output_section(world)?;
    ensure!(
        output.markdown.text.ends_with(CURSOR_PLACEHOLDER),
        "output does not end with the cursor: {:?}",
        output.markdown.text
    );
    Ok(())
}

#[then("the rendered HTML contains a cursor element")]
fn html_has_cursor(world: &MessageWorld) -> Result<(), eyre::Report> {
    let html = world
        .html
        .as_deref()
        .ok_or_else(|| eyre!("message content was not rendered to HTML"))?;
    ensure!(
        html.contains("<span class=\"cursor\"></span>"),
        "no cursor element in {html}"
    );
    ensure!(!html.contains(CURSOR_PLACEHOLDER), "placeholder leaked into {html}");
    Ok(())
}

#[then(r#"the input section is fenced as "{language}""#)]
fn input_fenced(world: &MessageWorld, language: String) -> Result<(), eyre::Report> {
    let input = world
        .tree()?
        .content()
        .and_then(|block| block.input.as_ref())
        .ok_or_else(|| eyre!("expected an input section"))?;
    let fence = format!("```{language}\n");
    ensure!(
        input.text.starts_with(&fence) && input.text.ends_with("\n```"),
        "input is not fenced as {language}: {:?}",
        input.text
    );
    Ok(())
}

#[then("no input section is shown")]
fn no_input(world: &MessageWorld) -> Result<(), eyre::Report> {
    let input = world.tree()?.content().and_then(|block| block.input.as_ref());
    ensure!(input.is_none(), "unexpected input section: {input:?}");
    Ok(())
}

#[then("no content block is shown")]
fn no_content(world: &MessageWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.tree()?.content().is_none(),
        "unexpected content block"
    );
    Ok(())
}

#[then("an empty inlined elements slot is shown")]
fn empty_inlined_slot(world: &MessageWorld) -> Result<(), eyre::Report> {
    let inlined = world
        .tree()?
        .inlined_elements()
        .ok_or_else(|| eyre!("expected an inlined elements slot"))?;
    ensure!(inlined.is_empty(), "unexpected inlined elements: {inlined:?}");
    Ok(())
}

#[then(r#"the inlined elements are "{names}""#)]
fn inlined_elements(world: &MessageWorld, names: String) -> Result<(), eyre::Report> {
    let inlined = world
        .tree()?
        .inlined_elements()
        .ok_or_else(|| eyre!("expected an inlined elements slot"))?;
    let actual: Vec<&str> = inlined.iter().map(|element| element.name.as_str()).collect();
    let expected: Vec<&str> = names.split(", ").collect();
    ensure!(actual == expected, "unexpected inlined elements: {actual:?}");
    Ok(())
}

#[then(r#"the timestamp reads "{text}" aligned to the "{side}""#)]
fn timestamp_reads(world: &MessageWorld, text: String, side: String) -> Result<(), eyre::Report> {
    let timestamp = world
        .tree()?
        .timestamp()
        .ok_or_else(|| eyre!("expected a timestamp"))?;
    let alignment = match side.as_str() {
        "start" => Alignment::Start,
        "end" => Alignment::End,
        other => return Err(eyre!("unknown alignment {other}")),
    };
    ensure!(timestamp.text == text, "unexpected timestamp {:?}", timestamp.text);
    ensure!(
        timestamp.alignment == alignment,
        "unexpected alignment {:?}",
        timestamp.alignment
    );
    Ok(())
}

#[then("no timestamp is shown")]
fn no_timestamp(world: &MessageWorld) -> Result<(), eyre::Report> {
    let timestamp = world.tree()?.timestamp();
    ensure!(timestamp.is_none(), "unexpected timestamp: {timestamp:?}");
    Ok(())
}

#[then("the view was computed {count:usize} times")]
fn computed_times(world: &MessageWorld, count: usize) -> Result<(), eyre::Report> {
    ensure!(
        world.render_count == Some(count),
        "unexpected render count {:?}",
        world.render_count
    );
    Ok(())
}

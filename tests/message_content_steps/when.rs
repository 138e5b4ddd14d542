//! When steps for message content BDD scenarios.

use super::world::MessageWorld;
use chatview::message_content::{
    adapters::HtmlViewRenderer, ports::ViewRenderer, services::MemoizedMessageContent,
};
use chrono::Utc;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the message content is rendered")]
fn render_message_content(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let props = world.props()?;
    let tree = world.service.render(&props, &Utc);
    let renderer = HtmlViewRenderer::with_defaults().wrap_err("compile view templates")?;
    let html = renderer.render(&tree).wrap_err("render view tree")?;
    world.tree = Some(tree);
    world.html = Some(html);
    Ok(())
}

#[when("the memoized view receives the same props twice")]
fn render_same_props_twice(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let props = world.props()?;
    let mut memo = MemoizedMessageContent::new(world.service.clone(), Utc);
    memo.render(props.clone());
    let tree = memo.render(props).clone();
    world.render_count = Some(memo.render_count());
    world.tree = Some(tree);
    Ok(())
}

#[when(r#"the memoized view receives the props and then the output "{output}""#)]
fn render_changed_output(world: &mut MessageWorld, output: String) -> Result<(), eyre::Report> {
    let first = world.props()?;
    let mut second = first.clone();
    second.message.output = output;
    let mut memo = MemoizedMessageContent::new(world.service.clone(), Utc);
    memo.render(first);
    let tree = memo.render(second).clone();
    world.render_count = Some(memo.render_count());
    world.tree = Some(tree);
    Ok(())
}

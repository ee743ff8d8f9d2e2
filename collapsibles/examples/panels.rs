use std::fs::File;

use collapsibles::{
    find_element, find_element_mut, CollapsibleController, Element, Event, Style,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("panels.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = page();
    let mut controller = CollapsibleController::new();
    controller.bind_all(&root)?;
    controller.expand_first();

    let events = [
        Event::Load,
        Event::click("scores-title"),
        Event::Resize {
            width: 60,
            height: 40,
        },
        Event::click("settings"),
    ];

    for event in &events {
        if let Event::Resize { width, .. } = event {
            // Narrower viewport: content wraps and grows
            reflow(&mut root, *width);
            controller.update_all_heights(&mut root)?;
        } else {
            controller.handle_event(&mut root, event)?;
        }
        println!("after {event:?}");
        print_panels(&controller, &root);
    }

    Ok(())
}

fn page() -> Element {
    Element::col()
        .id("root")
        .child(section("profile", "Profile", 100))
        .child(
            Element::box_()
                .id("scores")
                .class("collapsible")
                .child(Element::text("Scores").id("scores-title")),
        )
        .child(Element::box_().id("scores-body").scroll_height(200))
        .child(
            Element::text("Settings")
                .id("settings")
                .class("collapsible")
                .data("controls", "settings-body"),
        )
        .child(Element::text("Footer").id("footer"))
        .child(
            Element::box_()
                .id("settings-body")
                .scroll_height(50)
                .style(Style::new().opacity(0.0)),
        )
}

fn section(id: &str, title: &str, height: u32) -> Element {
    Element::col()
        .id(format!("{id}-section"))
        .child(Element::text(title).id(id).class("collapsible"))
        .child(Element::box_().id(format!("{id}-body")).scroll_height(height))
}

fn reflow(root: &mut Element, width: u16) {
    if width == 0 {
        return;
    }
    for id in ["profile-body", "scores-body", "settings-body"] {
        if let Some(body) = find_element_mut(root, id) {
            body.scroll_height = body.scroll_height * 80 / u32::from(width);
        }
    }
}

fn print_panels(controller: &CollapsibleController, root: &Element) {
    for panel in controller.panels() {
        let style = find_element(root, &panel.content)
            .map(|e| e.style)
            .unwrap_or_default();
        println!(
            "  {:<10} {:?} max_height={:?} opacity={:?}",
            panel.trigger, panel.state, style.max_height, style.opacity
        );
    }
}

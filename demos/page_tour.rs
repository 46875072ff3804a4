//! Page Tour
//!
//! This example walks a three-screen page group through every transition
//! kind, printing the element model a host binding would apply.
//!
//! Key concepts:
//! - Attaching through the registry with an options object
//! - The Setup / Trigger / Settle phases of animated kinds
//! - Completion notifications bubbling up from the pages
//! - Rest invariants and snapshots between transitions
//!
//! Run with: RUST_LOG=page_transit=trace cargo run --example page_tour

use page_transit::checkpoint::Snapshot;
use page_transit::controller::{ElementId, Mount, PageController, Registry, TransitOutcome};
use page_transit::core::{NodeRef, Page, Size};
use page_transit::engine::TransitionEnd;
use serde_json::json;
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn print_stage(pages: &PageController) {
    let stage = pages.stage();
    println!(
        "    container: [{}] {{{}}}",
        stage.container.classes,
        stage.container.style.to_css()
    );
    for page in &stage.pages {
        println!(
            "    {:<8} [{}] {{{}}}",
            page.identifier(&pages.options().data_name).unwrap_or("?"),
            page.element.classes,
            page.element.style.to_css()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Page Tour ===\n");

    let mut registry = Registry::new();
    let id = ElementId::new();
    let mount = Mount {
        id,
        size: Size::new(375.0, 667.0),
        pages: ["inbox", "thread", "compose"]
            .iter()
            .map(|name| Page::tagged("screen", name))
            .collect(),
    };
    registry.attach_with_args(mount, &[json!({"identifierAttributeName": "screen"})])?;

    let tour = [
        ("thread", "slide-in-from-right"),
        ("compose", "slide-in-from-bottom"),
        ("thread", "slide-in-from-top"),
        ("inbox", "slide-in-from-left"),
        ("compose", "flip-towards-left"),
        ("inbox", "flip-towards-right"),
        ("thread", "none"),
    ];

    let Some(pages) = registry.lookup_mut(id) else {
        return Err("controller vanished after attach".into());
    };
    println!("Attached:");
    print_stage(pages);

    for (target, kind) in tour {
        println!("\n-> {target} ({kind})");
        match pages.transit_args(&[json!(target), json!(kind)])? {
            TransitOutcome::Completed(record) => {
                println!("  switched in {}ms", record.elapsed().as_millis());
            }
            TransitOutcome::Pending(subscription) => {
                println!("  triggered, waiting on {subscription}:");
                print_stage(pages);

                // The event fires on a page and bubbles to the container.
                let event = TransitionEnd::new(NodeRef::Page(0), "transform");
                if let Some(record) = pages.notify(&event) {
                    println!("  settled after {}ms", record.elapsed().as_millis());
                }
            }
        }
        print_stage(pages);

        if let Validation::Failure(violations) = pages.verify_rest() {
            println!("  not at rest: {violations:?}");
        }
    }

    println!("\nHistory:");
    for step in pages.history().path() {
        println!("  {}", step.unwrap_or("(none)"));
    }

    // Freeze mid-transition and resume elsewhere.
    pages.transit_named("compose", "flip-towards-left")?;
    let json = pages.snapshot().to_json()?;
    println!("\nSnapshot taken mid-flip ({} bytes of JSON)", json.len());

    let mut resumed = PageController::restore(Snapshot::from_json(&json)?)?;
    resumed.notify(&TransitionEnd::container());
    println!("Resumed and settled:");
    print_stage(&resumed);

    if let Some(stage) = registry.detach(id) {
        println!("\nDetached; {} pages left behind", stage.pages.len());
    }

    println!("\n=== Tour Complete ===");
    Ok(())
}

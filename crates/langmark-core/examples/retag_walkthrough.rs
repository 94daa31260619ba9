//! Retag walkthrough
//!
//! Tags parts of a sentence the way a host UI would: resolve the selected text, apply a tag,
//! print the resulting segments.

use langmark_core::{TagCommand, TaggingStateManager};

fn main() {
    let mut manager = TaggingStateManager::with_default_tags(
        "Haz clic en cualquier parte de este texto y selecciona un idioma para etiquetarlo.",
    );

    manager.subscribe(|change| {
        println!(
            "  change {:?} (version {} -> {}) at {:?}",
            change.change_type, change.old_version, change.new_version, change.affected_region
        );
    });

    let tags = manager.document().tag_set().clone();
    let steps = [
        ("Haz clic", "español"),
        ("este texto", "español"),
        ("texto y selecciona", "español"),
        ("idioma", "italiano"),
    ];

    for (selected, label) in steps {
        let Some(tag) = tags.tag(label) else {
            continue;
        };
        println!("tag {:?} as {}", selected, label);
        if let Err(err) = manager.execute(TagCommand::RetagSelection {
            selected_text: selected.to_string(),
            tag,
        }) {
            println!("  failed: {}", err);
        }
    }

    println!("\nsegments:");
    for record in manager.document().export() {
        println!("  [{}] {:?}", record.tag, record.text);
    }

    match manager.document().to_json(true) {
        Ok(json) => println!("\n{}", json),
        Err(err) => println!("\nexport failed: {}", err),
    }
}

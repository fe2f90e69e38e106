use legend_core::classify::classify;
use legend_core::error::LegendError;
use legend_core::keywords::{builtin, load_lookup, GenusLookup};
use legend_core::model::Category;
use std::path::Path;

pub fn list() -> Result<(), LegendError> {
    println!("Available keyword tables:\n");
    for name in builtin::PRESETS {
        let lookup = builtin::load_preset(name)?;
        let marker = if *name == builtin::DEFAULT_PRESET {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<18} {}{} - {} keywords",
            name,
            lookup.name(),
            marker,
            lookup.keyword_count()
        );
        println!();
        print_table(&lookup);
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LegendError> {
    let lookup = load_lookup(file)?;

    println!("Keyword table '{}' is valid.", lookup.name());
    print_table(&lookup);

    let empty: Vec<&str> = lookup
        .iter()
        .filter(|(_, words)| words.is_empty())
        .map(|(c, _)| c.as_str())
        .collect();
    if !empty.is_empty() {
        println!("\nWarnings:");
        println!(
            "  - no keywords for {}; such plants fall back to a heading or the default category",
            empty.join(", ")
        );
    }
    Ok(())
}

pub fn classify_name(name: &str, keywords: Option<&Path>) -> Result<(), LegendError> {
    let lookup = match keywords {
        Some(path) => load_lookup(path)?,
        None => GenusLookup::default(),
    };
    let lower = name.to_lowercase();
    let hit = lookup
        .iter()
        .find_map(|(_, words)| words.iter().find(|w| lower.contains(w.as_str())));

    let category = classify(name, Category::default(), &lookup);
    match hit {
        Some(keyword) => println!("{}  (keyword '{}')", category, keyword),
        None => println!("{}  (no keyword matched, default category)", category),
    }
    Ok(())
}

fn print_table(lookup: &GenusLookup) {
    for (category, words) in lookup.iter() {
        if words.is_empty() {
            println!("  {:<12} -", category.as_str());
        } else {
            println!("  {:<12} {}", category.as_str(), words.join(", "));
        }
    }
}

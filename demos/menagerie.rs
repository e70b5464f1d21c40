use polymap::{MapError, PolyMap};

fn main() -> Result<(), MapError> {
    let mut shelter: PolyMap<String, String> = PolyMap::new();

    // Intake, tagged by species and temperament
    shelter.set_grouped(
        "tom".to_string(),
        "grey tabby".to_string(),
        ["cat".to_string(), "grumpy".to_string()],
    );
    shelter.set_grouped(
        "odie".to_string(),
        "beagle".to_string(),
        ["dog".to_string(), "friendly".to_string()],
    );
    shelter.set_grouped(
        "garfield".to_string(),
        "orange tabby".to_string(),
        ["cat".to_string(), "friendly".to_string()],
    );

    println!("Residents by group:");
    for (group, residents) in shelter.grouped() {
        println!("  {}:", group);
        for (name, description) in residents {
            println!("    {} ({})", name, description);
        }
    }

    // Tom mellows out: replace his tags in one step
    shelter.set_groups(
        &"tom".to_string(),
        ["cat".to_string(), "friendly".to_string()],
    )?;

    let friendly: Vec<_> = shelter.group_keys(&"friendly".to_string()).collect();
    println!("Friendly residents: {:?}", friendly);

    // Odie gets adopted; every group forgets him
    shelter.remove(&"odie".to_string())?;
    println!(
        "Dogs still here: {}",
        shelter.group_keys(&"dog".to_string()).count()
    );

    Ok(())
}

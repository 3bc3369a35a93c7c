// Simple pipeline example
// Author: Gabriel Demetrios Lafis

use record_pipeline::{
    data::UserRecord,
    processing::{FilterStage, MapStage, ProjectStage, RecordPipeline, WriterConsumer},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some records
    let users = vec![
        UserRecord::new("Neo", "Thomas Anderson"),
        UserRecord::new("Zero Cool", "Dade Murphy"),
        UserRecord::new(" Acid Burn", "Kate Libby"),
        UserRecord::new("Lord Nikon", "Paul Cook"),
    ];

    // Print original records
    println!("Original records:");
    print_records(&users);

    // Reference pipeline: tags with an inner space, real names, uppercased
    let reference = RecordPipeline::reference("reference");

    println!("\n{:?}:", reference);
    let summary = reference.run(&users, &mut WriterConsumer::stdout())?;
    println!("({} of {} records delivered)", summary.delivered, summary.input);

    // Custom pipeline built from named stages
    let custom = RecordPipeline::from_stages(
        "custom",
        FilterStage::tag_contains("o"),
        ProjectStage::gamer_tag(),
        MapStage::trim(),
    );

    println!("\n{:?}:", custom);
    for value in custom.iter(&users) {
        println!("{}", value);
    }

    Ok(())
}

// Helper function to print records
fn print_records(users: &[UserRecord]) {
    println!("{:<12} | {}", "gamerTag", "realName");
    println!("{}-+-{}", "-".repeat(12), "-".repeat(16));

    for user in users {
        println!("{:<12} | {}", format!("'{}'", user.gamer_tag()), user.real_name());
    }
}

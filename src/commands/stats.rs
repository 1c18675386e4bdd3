use crate::core::{command_init::CommandContext, error::Result, print_field, print_section_header};

pub fn execute_stats(context: &CommandContext) -> Result<()> {
    let cache = context.cache();
    let stats = cache.stats();

    let languages = if stats.languages_learned.is_empty() {
        "-".to_string()
    } else {
        stats.languages_learned.join(", ")
    };

    print_section_header("Learning stats");
    print_field("Total messages", &stats.total_messages.to_string());
    print_field("In history", &stats.messages_count.to_string());
    print_field("Languages", &languages);
    print_field("Joined", &stats.join_date.format("%Y-%m-%d").to_string());
    print_field("Days active", &stats.days_active.to_string());
    println!();
    Ok(())
}

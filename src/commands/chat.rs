use crate::core::{
    command_init::CommandContext, error::Result, print_chat_message, print_info,
    print_section_header, print_success,
};

pub fn execute_chat_add(context: &CommandContext, user_message: &str, bot_reply: &str) -> Result<()> {
    let mut cache = context.cache();
    cache.add_chat_message(user_message, bot_reply);
    print_success(&format!(
        "Recorded message ({} in history)\n",
        cache.state().chat_history.len()
    ));
    Ok(())
}

pub fn execute_chat_history(context: &CommandContext, limit: Option<usize>) -> Result<()> {
    let cache = context.cache();
    let limit = limit.unwrap_or(context.config.default_history_limit);
    let history = cache.chat_history(limit);

    if history.is_empty() {
        print_info("No chat history");
        return Ok(());
    }

    print_section_header("Chat history");
    for (i, message) in history.iter().enumerate() {
        print_chat_message(i + 1, message);
    }
    println!();
    Ok(())
}

pub fn execute_chat_clear(context: &CommandContext) -> Result<()> {
    let mut cache = context.cache();
    let removed = cache.state().chat_history.len();
    cache.clear_chat_history();
    print_success(&format!("Cleared {removed} messages from history\n"));
    Ok(())
}

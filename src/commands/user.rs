use crate::core::{
    command_init::CommandContext, error::Result, print_field, print_info, print_section_header,
    print_success,
};

pub fn execute_user_login(context: &CommandContext, username: &str, email: &str) -> Result<()> {
    let mut cache = context.cache();
    cache.set_user(username, email);
    context.session().remember(username)?;

    print_success(&format!("Logged in as {username}\n"));
    Ok(())
}

pub fn execute_user_show(context: &CommandContext) -> Result<()> {
    let cache = context.cache();
    let user = cache.user();

    if !user.is_logged_in() {
        print_info("No user logged in");
        return Ok(());
    }

    print_section_header("User");
    print_field("Username", user.username.as_deref().unwrap_or("-"));
    print_field("Email", user.email.as_deref().unwrap_or("-"));
    let last_login = user
        .last_login
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());
    print_field("Last login", &last_login);

    let remembered = context.session().recall()?;
    print_field("Remembered login", remembered.as_deref().unwrap_or("-"));
    println!();
    Ok(())
}

pub fn execute_user_logout(context: &CommandContext) -> Result<()> {
    let mut cache = context.cache();
    let previous = cache.user().username.clone();
    cache.clear_user();
    context.session().forget()?;

    match previous {
        Some(username) => print_success(&format!("Logged out {username}\n")),
        None => print_info("No user logged in"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command_init::CommandInit;
    use tempfile::TempDir;

    #[test]
    fn test_login_then_logout() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let context = CommandInit::initialize(Some(temp_dir.path().to_path_buf()))?;

        execute_user_login(&context, "ana", "ana@example.com")?;
        assert_eq!(context.cache().user().email.as_deref(), Some("ana@example.com"));
        assert_eq!(context.session().recall()?.as_deref(), Some("ana"));

        execute_user_logout(&context)?;
        assert!(!context.cache().user().is_logged_in());
        assert_eq!(context.session().recall()?, None);
        Ok(())
    }

    #[test]
    fn test_logout_keeps_preferences() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let context = CommandInit::initialize(Some(temp_dir.path().to_path_buf()))?;

        execute_user_login(&context, "ana", "ana@example.com")?;
        context.cache().set_languages("English", "Italian");
        execute_user_logout(&context)?;

        assert_eq!(context.cache().preferences().target_lang(), "Italian");
        Ok(())
    }
}

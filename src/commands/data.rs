use crate::core::{
    command_init::CommandContext,
    error::{LinguaSparkError, Result},
    print_info, print_section_header, print_success,
};
use colored::*;
use std::io::{self, Write};
use std::path::Path;

pub fn execute_export(context: &CommandContext, output: Option<&Path>) -> Result<()> {
    let cache = context.cache();
    let snapshot = cache.export_data();
    let json = serde_json::to_string_pretty(&snapshot)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            print_success(&format!("Exported state to {}\n", path.display()));
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn execute_import(context: &CommandContext, input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let data: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LinguaSparkError::import_not_json(input, e))?;

    let mut cache = context.cache();
    cache.try_import_data(data)?;

    print_success(&format!(
        "Imported state from {} ({} messages in history)\n",
        input.display(),
        cache.state().chat_history.len()
    ));
    Ok(())
}

pub fn execute_reset(context: &CommandContext, yes: bool) -> Result<()> {
    if !yes && !confirm_reset() {
        print_info("Reset canceled");
        return Ok(());
    }

    let mut cache = context.cache();
    cache.clear_all();
    context.session().forget()?;

    print_success("All local data cleared\n");
    Ok(())
}

fn confirm_reset() -> bool {
    print_section_header("Reset");
    println!("   {}. Delete the stored user, preferences and chat history", "1".bright_black());
    println!("   {}. Forget the remembered login", "2".bright_black());

    print!("\n{} ", "Proceed with reset? [y/N]:".blue());
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command_init::CommandInit;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_into_another_directory() -> Result<()> {
        let source_dir = TempDir::new()?;
        let target_dir = TempDir::new()?;
        let source = CommandInit::initialize(Some(source_dir.path().to_path_buf()))?;
        let target = CommandInit::initialize(Some(target_dir.path().to_path_buf()))?;

        source.cache().set_languages("English", "Portuguese");
        source.cache().add_chat_message("olá", "Olá!");

        let export_file = source_dir.path().join("export.json");
        execute_export(&source, Some(&export_file))?;
        execute_import(&target, &export_file)?;

        let imported = target.cache();
        assert_eq!(imported.preferences().target_lang(), "Portuguese");
        assert_eq!(imported.chat_history(10)[0].user, "olá");
        Ok(())
    }

    #[test]
    fn test_import_rejects_malformed_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let context = CommandInit::initialize(Some(temp_dir.path().to_path_buf()))?;
        let file = temp_dir.path().join("bad.json");
        std::fs::write(&file, "not json")?;

        let err = execute_import(&context, &file).unwrap_err();
        assert!(matches!(err, LinguaSparkError::ImportNotJson { .. }));
        assert!(err.to_string().contains("is not valid JSON"));
        Ok(())
    }

    #[test]
    fn test_reset_with_yes_clears_state() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let context = CommandInit::initialize(Some(temp_dir.path().to_path_buf()))?;
        context.cache().add_chat_message("a", "b");
        context.session().remember("ana")?;

        execute_reset(&context, true)?;

        assert_eq!(context.cache().stats().total_messages, 0);
        assert_eq!(context.session().recall()?, None);
        Ok(())
    }
}

use crate::core::{
    command_init::CommandContext,
    error::{LinguaSparkError, Result},
    print_success,
};
use serde_json::Value;

/// Interpret a CLI value as JSON, falling back to a plain string.
///
/// `true`, `14` and `{"a":1}` keep their JSON types; `dark` becomes `"dark"`.
pub fn parse_preference_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn execute_pref_set(context: &CommandContext, key: &str, raw_value: &str) -> Result<()> {
    let value = parse_preference_value(raw_value);
    let mut cache = context.cache();
    let shown = value.to_string();
    cache.set_preference(key, value);

    print_success(&format!("Set {key} = {shown}\n"));
    Ok(())
}

pub fn execute_pref_get(context: &CommandContext, key: &str) -> Result<()> {
    let cache = context.cache();
    match cache.preference(key) {
        Some(Value::String(s)) => println!("{s}"),
        Some(value) => println!("{value}"),
        None => return Err(LinguaSparkError::preference_not_set(key)),
    }
    Ok(())
}

pub fn execute_languages(context: &CommandContext, user_lang: &str, target_lang: &str) -> Result<()> {
    let mut cache = context.cache();
    cache.set_languages(user_lang, target_lang);
    print_success(&format!("Learning {target_lang} from {user_lang}\n"));
    Ok(())
}

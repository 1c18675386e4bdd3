//! Common predicates for command output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn is_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

pub fn has_field(label: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{label}:")).and(predicates::str::contains(value.to_string()))
}

pub fn has_history_entry(position: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{position}]"))
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for console completion symbols and input accumulation.

use armpit_common::console::{defined_names, paren_depth, PendingInput, SymbolSet};

// =============================================================================
// paren_depth tests
// =============================================================================

#[test]
fn test_paren_depth_balanced() {
    assert_eq!(paren_depth("(define (f x) (* x x))"), 0);
}

#[test]
fn test_paren_depth_open() {
    assert_eq!(paren_depth("(define (f x)"), 1);
}

#[test]
fn test_paren_depth_ignores_strings() {
    assert_eq!(paren_depth("(display \"((\")"), 0);
    assert_eq!(paren_depth("(display \"\\\"(\")"), 0);
}

#[test]
fn test_paren_depth_ignores_comments_and_chars() {
    assert_eq!(paren_depth("(a ; (((\n)"), 0);
    assert_eq!(paren_depth("(char->integer #\\()"), 0);
}

// =============================================================================
// defined_names tests
// =============================================================================

#[test]
fn test_defined_names_variable_and_procedure() {
    assert_eq!(
        defined_names("(define led 25) (define (blink n) n) (set! led 26)"),
        vec!["led", "blink", "led"]
    );
}

#[test]
fn test_defined_names_ignores_similar_forms() {
    assert!(defined_names("(define-syntax foo) (defined x) (set!x 1)").is_empty());
}

#[test]
fn test_defined_names_multiline() {
    assert_eq!(defined_names("(define\n  counter\n  0)"), vec!["counter"]);
}

// =============================================================================
// SymbolSet tests
// =============================================================================

#[test]
fn test_symbols_seeded_with_builtins() {
    let symbols = SymbolSet::with_builtins();
    assert!(symbols.contains("define"));
    assert!(symbols.contains("files"));
    assert!(!symbols.contains("blink"));
}

#[test]
fn test_symbols_learn_counts_new_names() {
    let mut symbols = SymbolSet::with_builtins();
    assert_eq!(symbols.learn("(define (blink n) n) (set! car 1)"), 1);
    assert!(symbols.contains("blink"));
    assert_eq!(symbols.learn("(define (blink n) n)"), 0);
}

#[test]
fn test_completions_sorted_prefix_matches() {
    let mut symbols = SymbolSet::new();
    symbols.insert("led-on");
    symbols.insert("let");
    symbols.insert("led-off");
    symbols.insert("length");
    assert_eq!(symbols.completions("led"), vec!["led-off", "led-on"]);
    assert_eq!(symbols.completions("le").len(), 4);
    assert!(symbols.completions("x").is_empty());
}

// =============================================================================
// PendingInput tests
// =============================================================================

#[test]
fn test_pending_complete_line() {
    let mut pending = PendingInput::new();
    assert_eq!(pending.push("(+ 1 2)"), Some("(+ 1 2)".to_string()));
    assert!(!pending.is_pending());
}

#[test]
fn test_pending_accumulates_until_balanced() {
    let mut pending = PendingInput::new();
    assert_eq!(pending.push("(define (f x)"), None);
    assert!(pending.is_pending());
    assert_eq!(pending.push("  (* x x)"), None);
    assert_eq!(
        pending.push(")"),
        Some("(define (f x)\n  (* x x)\n)".to_string())
    );
    assert!(!pending.is_pending());
}

#[test]
fn test_pending_blank_line_is_ignored() {
    let mut pending = PendingInput::new();
    assert_eq!(pending.push("   "), None);
    assert!(!pending.is_pending());
}

#[test]
fn test_pending_clear() {
    let mut pending = PendingInput::new();
    pending.push("(begin");
    pending.clear();
    assert!(!pending.is_pending());
    assert_eq!(pending.push("42"), Some("42".to_string()));
}

//! Process-wide registry of loaded grammars.
//!
//! Grammars are syntect syntax definitions taken from the syntax set that the
//! build script serialises into the binary. The set itself is deserialised once,
//! the first time any code is highlighted; individual languages are then resolved
//! and recorded on demand, keyed by their normalised language id. Entries are only
//! ever added, so a language resolved once stays resolved for the rest of the
//! process.

use anyhow::{anyhow, Result};
use log::debug;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use syntect::parsing::{SyntaxReference, SyntaxSet};

static GLOBAL: LazyLock<GrammarRegistry> =
    LazyLock::new(|| GrammarRegistry::new(load_syntax_set()));

/// Deserialise the syntax set bundled at build time.
pub fn load_syntax_set() -> SyntaxSet {
    bincode::serde::decode_from_slice(super::SERIALIZED_SYNTAX, bincode::config::standard())
        .expect("can deserialise syntax set")
        .0
}

/// Append-only mapping from normalised language id to a loaded grammar.
pub struct GrammarRegistry {
    syntaxes: SyntaxSet,
    /// language id -> index into `syntaxes.syntaxes()`
    loaded: RwLock<HashMap<String, usize>>,
}

impl GrammarRegistry {
    pub fn new(syntaxes: SyntaxSet) -> GrammarRegistry {
        GrammarRegistry {
            syntaxes,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// The registry shared by every highlighter in the process.
    pub fn global() -> &'static GrammarRegistry {
        &GLOBAL
    }

    /// The syntax set grammars are drawn from; the tokenizer needs it alongside
    /// the grammar itself.
    pub fn syntaxes(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Returns the grammar registered for `id`, if it has been loaded.
    pub fn grammar(&self, id: &str) -> Option<&SyntaxReference> {
        let index = *self
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)?;
        self.syntaxes.syntaxes().get(index)
    }

    /// Make sure a grammar for `id` is registered, loading it if necessary.
    ///
    /// Returns `false` if no grammar could be found for the language. Loading the
    /// same language more than once is harmless: the first registration wins and
    /// later ones resolve to the same grammar anyway.
    pub fn ensure_loaded(&self, id: &str) -> bool {
        if self.is_loaded(id) {
            return true;
        }

        match self.resolve(id) {
            Ok(index) => {
                debug!(
                    "Loaded grammar `{}` for language `{id}`",
                    self.syntaxes.syntaxes()[index].name
                );
                self.loaded
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(id.to_string())
                    .or_insert(index);
                true
            }
            Err(e) => {
                debug!("{e:#}");
                false
            }
        }
    }

    fn resolve(&self, id: &str) -> Result<usize> {
        let found = candidate_tokens(id).iter().find_map(|token| match *token {
            PLAIN_TEXT => self.syntaxes.find_syntax_by_name(PLAIN_TEXT),
            token => self.syntaxes.find_syntax_by_token(token),
        });

        found
            .and_then(|syntax| {
                self.syntaxes
                    .syntaxes()
                    .iter()
                    .position(|s| std::ptr::eq(s, syntax))
            })
            .ok_or_else(|| anyhow!("No grammar available for language `{id}`"))
    }
}

const PLAIN_TEXT: &str = "Plain Text";

/// Syntect lookup tokens to try, in order, for a normalised language id.
///
/// Most ids match a syntect token (file extension or lower-cased syntax name)
/// directly; the rest are mapped here.
fn candidate_tokens(id: &str) -> Vec<&str> {
    match id {
        "markup" => vec!["html"],
        "typescript" => vec!["ts", "typescript", "javascript"],
        "plaintext" | "plain" | "text" | "txt" => vec![PLAIN_TEXT],
        "shell" => vec!["sh", "bash"],
        "csharp" => vec!["cs"],
        _ => vec![id],
    }
}

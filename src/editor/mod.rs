//! Editor-session layer: per-instance observers and the external host contract.
//!
//! An [`EditorSession`] owns one script buffer. Every [`EditorSession::set_source`] re-runs
//! the full analysis (tokenize + parse; nothing incremental) and notifies the observers
//! registered **on that session** — there is no process-wide event bus, so two sessions never
//! see each other's changes.
//!
//! Compiling and saving are delegated to a [`ScriptHost`], the abstract boundary toward the
//! external rule engine. The host's rejection is surfaced as a formatted status line for the
//! editor's status pane; it is never retried automatically.

use driven_syntax::ast::Span;
use driven_syntax::diagnostics::ScriptError;
use driven_syntax::lexer::{self, TokenKind};
use driven_syntax::parser;
use thiserror::Error;

/// Error surface of the external rule engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("compile failed: {0}")]
    Compile(String),
    #[error("save failed: {0}")]
    Save(String),
}

/// The external service that compiles and persists scripts.
///
/// The transport (HTTP, queue, in-process engine) is the embedder's concern; this crate only
/// submits the source text verbatim and reports the outcome.
#[allow(async_fn_in_trait)]
pub trait ScriptHost {
    async fn compile(&self, source: &str) -> Result<(), HostError>;
    async fn save(&self, source: &str) -> Result<(), HostError>;
}

/// The result of analyzing one buffer state. Owned (no borrows into the buffer) so observers
/// can hold onto it.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Token classifications with their spans, in source order.
    pub tokens: Vec<(TokenKind, Span)>,
    /// Lexical and structural diagnostics, empty for a clean script.
    pub diagnostics: Vec<ScriptError>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Analyze one buffer state from scratch.
pub fn analyze(source: &str) -> Analysis {
    let tokens = lexer::lex(source)
        .iter()
        .map(|t| (t.kind, t.span))
        .collect();
    let diagnostics = match parser::parse(source) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    };
    Analysis { tokens, diagnostics }
}

type Observer = Box<dyn FnMut(&Analysis) + Send>;

/// One editor instance: a buffer, its latest analysis, and the observers interested in it.
pub struct EditorSession<H: ScriptHost> {
    host: H,
    source: String,
    analysis: Analysis,
    observers: Vec<Observer>,
    status: Option<String>,
}

impl<H: ScriptHost> EditorSession<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            source: String::new(),
            analysis: Analysis::default(),
            observers: Vec::new(),
            status: None,
        }
    }

    /// Register an observer for this session. It fires on every subsequent buffer change.
    pub fn on_change(&mut self, observer: impl FnMut(&Analysis) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the buffer, re-analyze it, and notify this session's observers.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.analysis = analyze(&self.source);
        for observer in &mut self.observers {
            observer(&self.analysis);
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// The last compile/save outcome, formatted for a status pane.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Submit the buffer to the host's compiler. Returns whether it was accepted; the
    /// formatted outcome is available via [`status`](Self::status) either way.
    pub async fn compile(&mut self) -> bool {
        match self.host.compile(&self.source).await {
            Ok(()) => {
                self.status = Some("compiled".to_string());
                true
            }
            Err(e) => {
                self.status = Some(e.to_string());
                false
            }
        }
    }

    /// Persist the buffer through the host. Same status convention as [`compile`](Self::compile).
    pub async fn save(&mut self) -> bool {
        match self.host.save(&self.source).await {
            Ok(()) => {
                self.status = Some("saved".to_string());
                true
            }
            Err(e) => {
                self.status = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Host stub with scripted outcomes.
    struct FakeHost {
        accept_compile: bool,
        accept_save: bool,
    }

    impl ScriptHost for FakeHost {
        async fn compile(&self, source: &str) -> Result<(), HostError> {
            if self.accept_compile {
                Ok(())
            } else {
                Err(HostError::Compile(format!("line 1: bad rule in {} bytes", source.len())))
            }
        }

        async fn save(&self, _source: &str) -> Result<(), HostError> {
            if self.accept_save {
                Ok(())
            } else {
                Err(HostError::Save("storage unavailable".to_string()))
            }
        }
    }

    fn accepting_host() -> FakeHost {
        FakeHost {
            accept_compile: true,
            accept_save: true,
        }
    }

    #[test]
    fn observers_fire_per_change_on_their_own_session() {
        let fires = Arc::new(AtomicUsize::new(0));

        let mut session = EditorSession::new(accepting_host());
        let counter = Arc::clone(&fires);
        session.on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // A second session must not reach the first session's observer.
        let mut other = EditorSession::new(accepting_host());
        other.set_source("MODULE [Other]:\nEND\n");

        session.set_source("MODULE [A]:\nEND\n");
        session.set_source("MODULE [B]:\nEND\n");
        assert_eq!(fires.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn analysis_is_recomputed_fully_per_edit() {
        let mut session = EditorSession::new(accepting_host());

        session.set_source("@@");
        assert_eq!(session.analysis().diagnostics.len(), 2);

        session.set_source("MODULE [M]:\nEND\n");
        assert!(session.analysis().is_clean());
        assert!(!session.analysis().tokens.is_empty());
    }

    #[tokio::test]
    async fn rejected_compile_surfaces_as_status() {
        let mut session = EditorSession::new(FakeHost {
            accept_compile: false,
            accept_save: true,
        });
        session.set_source("MODULE [M]:\nEND\n");

        assert!(!session.compile().await);
        let status = session.status().unwrap();
        assert!(status.starts_with("compile failed:"), "{status}");

        assert!(session.save().await);
        assert_eq!(session.status(), Some("saved"));
    }

    #[tokio::test]
    async fn accepted_compile_reports_success() {
        let mut session = EditorSession::new(accepting_host());
        session.set_source("MODULE [M]:\nEND\n");
        assert!(session.compile().await);
        assert_eq!(session.status(), Some("compiled"));
    }
}

#![no_main]

use driven_syntax::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer must cover the input exactly, token by token, on any input.
        let tokens = lexer::lex(s);
        let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(rebuilt, s);

        // The parser may reject, but must never panic.
        let _ = parser::Parser::new(&tokens).parse();
    }
});

use std::collections::HashMap;

use driven_core::lang::delimiters;
use driven_core::lang::expressions;
use driven_core::lang::keywords;
use driven_core::lang::operators;
use driven_core::lang::snippets;

#[test]
fn block_keyword_spellings_unique_and_resolvable() {
    let mut seen: HashMap<String, keywords::BlockKeywordId> = HashMap::new();

    for info in keywords::BLOCK_KEYWORDS {
        assert_eq!(
            keywords::from_word(info.canonical),
            Some(info.id),
            "block keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "block keyword as_str mismatch for {:?}",
            info.id
        );
        // Case-insensitive lookups must resolve to the same id.
        assert_eq!(keywords::from_word(&info.canonical.to_lowercase()), Some(info.id));

        if let Some(prev) = seen.insert(info.canonical.to_uppercase(), info.id) {
            panic!(
                "duplicate block keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
        assert!(!info.description.is_empty(), "missing description for {:?}", info.id);
    }
}

#[test]
fn expression_keyword_spellings_unique_and_case_sensitive() {
    let mut seen: HashMap<&'static str, expressions::ExprKeywordId> = HashMap::new();

    for info in expressions::EXPR_KEYWORDS {
        assert_eq!(
            expressions::from_str(info.canonical),
            Some(info.id),
            "expression keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(expressions::as_str(info.id), info.canonical);

        // The expression sub-language is case-sensitive; lowercase must NOT resolve.
        assert_eq!(
            expressions::from_str(&info.canonical.to_lowercase()),
            None,
            "lowercase {:?} must not resolve to a keyword",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate expression keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
        assert!(!info.description.is_empty(), "missing description for {:?}", info.id);
    }
}

#[test]
fn operator_and_delimiter_classes_are_disjoint() {
    for c in operators::OPERATOR_CHARS.chars() {
        assert!(
            !delimiters::is_delimiter_char(c),
            "{c:?} is in both the operator and delimiter classes"
        );
    }
}

#[test]
fn snippets_cover_every_block_opener() {
    for info in keywords::BLOCK_KEYWORDS {
        let snippet = snippets::for_block(info.id);
        if info.opens_block {
            let snippet = snippet.unwrap_or_else(|| panic!("no snippet for {:?}", info.id));
            assert_eq!(snippet.label, info.canonical);
            assert!(
                snippet.insert_template.starts_with(info.canonical),
                "snippet for {:?} does not start with its keyword",
                info.id
            );
            assert!(
                snippet.insert_template.ends_with("END"),
                "snippet for {:?} does not end with END",
                info.id
            );
            assert!(!snippet.documentation.is_empty());
        } else {
            assert!(snippet.is_none(), "closer {:?} should not have a snippet", info.id);
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::LexError;
use crate::symbols::{SpannedToken, Token};

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r"^(?:(?P<space>\s+)|(?P<symbol><->|<=>|->|=>|[!\~¬\&∧|∨→↔])|(?P<identifier>[[:alpha:]][[:alnum:]]*)|(?P<open>\()|(?P<close>\)))"
    )
    .expect("tokenizer expression is valid");
}

fn symbol_token(symbol: &str) -> Option<Token> {
    match symbol {
        "!" | "~" | "¬" => Some(Token::Not),
        "&" | "∧" => Some(Token::And),
        "|" | "∨" => Some(Token::Or),
        "->" | "=>" | "→" => Some(Token::Implies),
        "<->" | "<=>" | "↔" => Some(Token::Iff),
        _ => None,
    }
}

fn word_token(word: &str) -> Token {
    match word {
        "not" => Token::Not,
        "and" => Token::And,
        "or" => Token::Or,
        "implies" => Token::Implies,
        "iff" => Token::Iff,
        var => Token::Var(var.to_string()),
    }
}

/// Splits `input` into tokens, terminated by a single [`Token::End`].
///
/// Positions are character offsets, so they line up with what a user sees when the formula
/// contains symbols such as `¬` or `↔`.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut result = Vec::new();

    let mut offset = 0;
    let mut position = 0;

    while offset < input.len() {
        let rest = &input[offset..];

        let unexpected = || LexError {
            position,
            unexpected: rest.chars().next().unwrap_or_default(),
        };

        let Some(c) = TOKENIZER.captures(rest) else {
            return Err(unexpected());
        };

        let token = if let Some(symbol) = c.name("symbol") {
            Some(symbol_token(symbol.as_str()).ok_or_else(unexpected)?)
        } else if let Some(identifier) = c.name("identifier") {
            Some(word_token(identifier.as_str()))
        } else if c.name("open").is_some() {
            Some(Token::OpenParen)
        } else if c.name("close").is_some() {
            Some(Token::CloseParen)
        } else {
            None
        };

        if let Some(token) = token {
            result.push(SpannedToken::new(token, position));
        }

        let lexeme = c.get(0).map_or("", |m| m.as_str());
        if lexeme.is_empty() {
            return Err(unexpected());
        }

        offset += lexeme.len();
        position += lexeme.chars().count();
    }

    result.push(SpannedToken::new(Token::End, position));

    log::debug!("tokenized {} tokens from {:?}", result.len(), input);

    Ok(result)
}

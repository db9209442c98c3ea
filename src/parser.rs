use std::fmt::{self, Display};

use crate::error::{EvalError, FormulaError, ParseError, ParseErrorKind};
use crate::eval::Assignment;
use crate::lexer::tokenize;
use crate::symbols::{SpannedToken, Token};
use crate::truth_table::{generate_table, TruthTable, RESULT_KEY};

/// Abstract syntax tree of a propositional formula.
///
/// Every node owns its children, so a formula is always a finite tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Var(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{name}"),
            Self::Not(inner) => write!(f, "!{inner}"),
            Self::And(l, r) => write!(f, "({l} & {r})"),
            Self::Or(l, r) => write!(f, "({l} | {r})"),
            Self::Implies(l, r) => write!(f, "({l} -> {r})"),
            Self::Iff(l, r) => write!(f, "({l} <-> {r})"),
        }
    }
}

/// A formula together with its source text and sorted variable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormula {
    pub source: String,
    pub vars: Vec<String>,
    pub formula: Formula,
}

impl ParsedFormula {
    pub fn new(input: &str) -> Result<Self, FormulaError> {
        let tokens = tokenize(input)?;
        let formula = parse(&tokens)?;
        let vars = formula.sorted_variables();

        log::debug!("parsed {formula} over variables [{}]", vars.join(", "));

        Ok(Self {
            source: input.trim().to_string(),
            vars,
            formula,
        })
    }

    pub fn table(&self) -> Result<TruthTable, EvalError> {
        generate_table(&self.formula, &self.vars)
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        self.formula.eval(assignment)
    }
}

/// Builds a [`Formula`] from a token sequence.
///
/// Precedence from strongest to weakest is `!`, `&`, `|`, `->`, `<->`.
/// `&` and `|` associate to the left, `->` and `<->` to the right.
/// A sequence that lacks the closing [`Token::End`] is treated as if it had one.
pub fn parse(tokens: &[SpannedToken]) -> Result<Formula, ParseError> {
    let terminated: Vec<SpannedToken>;

    let tokens = match tokens.last() {
        Some(last) if last.token == Token::End => tokens,
        last => {
            let position = last.map_or(0, |t| t.position + 1);
            terminated = tokens
                .iter()
                .cloned()
                .chain(std::iter::once(SpannedToken::new(Token::End, position)))
                .collect();
            &terminated
        }
    };

    Parser::new(tokens).parse_formula()
}

/// Deepest nesting the parser accepts, counted both as open groups, negations and
/// right-nested `->`/`<->` while parsing, and as the height of the resulting tree.
pub const MAX_NESTING_DEPTH: usize = 128;

// a formula and the height of its tree, a variable has height 0
struct Node {
    formula: Formula,
    height: usize,
}

impl Node {
    const fn leaf(formula: Formula) -> Self {
        Self { formula, height: 0 }
    }
}

struct Parser<'a> {
    tokens: &'a [SpannedToken],
    cursor: usize,
    nesting: usize,
    open_parens: Vec<usize>,
    previous: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [SpannedToken]) -> Self {
        Self {
            tokens,
            cursor: 0,
            nesting: 0,
            open_parens: Vec::new(),
            previous: None,
        }
    }

    // the token list always ends in End, the cursor never moves past it
    fn peek(&self) -> &'a SpannedToken {
        &self.tokens[self.cursor]
    }

    fn advance(&mut self) {
        self.previous = Some(&self.tokens[self.cursor].token);
        self.cursor = (self.cursor + 1).min(self.tokens.len() - 1);
    }

    fn too_deep(at: &SpannedToken) -> ParseError {
        ParseError::new(
            ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            },
            at.position,
        )
    }

    // consumes the token at the cursor and opens one nesting level
    fn enter(&mut self) -> Result<(), ParseError> {
        let at = self.peek();

        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(Self::too_deep(at));
        }

        self.nesting += 1;
        self.advance();

        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn unary(at: &SpannedToken, inner: Node) -> Result<Node, ParseError> {
        let height = inner.height + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(Self::too_deep(at));
        }

        Ok(Node {
            formula: Formula::Not(Box::new(inner.formula)),
            height,
        })
    }

    fn binary(at: &SpannedToken, left: Node, right: Node) -> Result<Node, ParseError> {
        let height = left.height.max(right.height) + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(Self::too_deep(at));
        }

        let (l, r) = (Box::new(left.formula), Box::new(right.formula));
        let formula = match at.token {
            Token::And => Formula::And(l, r),
            Token::Or => Formula::Or(l, r),
            Token::Implies => Formula::Implies(l, r),
            _ => Formula::Iff(l, r),
        };

        Ok(Node { formula, height })
    }

    fn unexpected(&self, at: &SpannedToken) -> ParseError {
        if at.token == Token::End {
            if let Some(&open) = self.open_parens.last() {
                return ParseError::new(ParseErrorKind::UnbalancedParens, open);
            }
        }

        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: at.token.clone(),
                after: self.previous.cloned(),
            },
            at.position,
        )
    }

    fn parse_formula(&mut self) -> Result<Formula, ParseError> {
        let first = self.peek();
        if first.token == Token::End {
            return Err(ParseError::new(
                ParseErrorKind::EmptyExpression,
                first.position,
            ));
        }

        let result = self.parse_iff()?;

        let next = self.peek();
        match &next.token {
            Token::End => Ok(result.formula),
            Token::CloseParen => Err(ParseError::new(
                ParseErrorKind::UnbalancedParens,
                next.position,
            )),
            other => Err(ParseError::new(
                ParseErrorKind::TrailingInput(other.clone()),
                next.position,
            )),
        }
    }

    fn parse_iff(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_implies()?;

        let op = self.peek();
        if op.token == Token::Iff {
            self.enter()?;
            let right = self.parse_iff();
            self.leave();
            return Self::binary(op, left, right?);
        }

        Ok(left)
    }

    fn parse_implies(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_or()?;

        let op = self.peek();
        if op.token == Token::Implies {
            self.enter()?;
            let right = self.parse_implies();
            self.leave();
            return Self::binary(op, left, right?);
        }

        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_and()?;

        while self.peek().token == Token::Or {
            let op = self.peek();
            self.advance();
            let right = self.parse_and()?;
            left = Self::binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_not()?;

        while self.peek().token == Token::And {
            let op = self.peek();
            self.advance();
            let right = self.parse_not()?;
            left = Self::binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Node, ParseError> {
        let op = self.peek();
        if op.token == Token::Not {
            self.enter()?;
            let negated = self.parse_not();
            self.leave();
            return Self::unary(op, negated?);
        }

        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Node, ParseError> {
        let next = self.peek();

        match &next.token {
            Token::Var(name) if name == RESULT_KEY => Err(ParseError::new(
                ParseErrorKind::ReservedIdentifier(name.clone()),
                next.position,
            )),
            Token::Var(name) => {
                self.advance();
                Ok(Node::leaf(Formula::Var(name.clone())))
            }
            Token::OpenParen => self.parse_parenthesized(next),
            Token::CloseParen if self.open_parens.is_empty() => Err(ParseError::new(
                ParseErrorKind::UnbalancedParens,
                next.position,
            )),
            _ => Err(self.unexpected(next)),
        }
    }

    fn parse_parenthesized(&mut self, open: &SpannedToken) -> Result<Node, ParseError> {
        self.enter()?;
        self.open_parens.push(open.position);

        let inner = self.parse_iff()?;

        let close = self.peek();
        if close.token != Token::CloseParen {
            return Err(self.unexpected(close));
        }

        self.advance();
        self.open_parens.pop();
        self.leave();

        Ok(inner)
    }
}

// syntax:
// a
// a & b
// a and b
// a | b | c == ((a | b) | c)
// a -> b -> c == (a -> (b -> c))
// a <-> b
// !a & b == ((!a) & b)
// not a
// ¬a ∧ b → c
// a | b & c == (a | (b & c))
// ((a)) == a

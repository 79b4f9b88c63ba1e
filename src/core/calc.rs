//! Arithmetic expression evaluator for the `calc` command.
//!
//! A minimal recursive-descent grammar:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/' | '%') factor)*
//! factor     := ('+' | '-') factor | '(' expression ')' | number
//! number     := digits ['.' digits]
//! ```
//!
//! Division/modulo by zero and non-finite results are evaluation
//! failures. The command handler collapses every [`CalcError`] to one
//! generic invalid-expression message; the variants exist for tests.

use crate::core::error::CalcError;

/// Evaluate an arithmetic expression.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    Parser::new(expression).parse()
}

struct Parser {
    input: Vec<char>,
    index: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            index: 0,
        }
    }

    fn parse(mut self) -> Result<f64, CalcError> {
        let value = self.parse_expression()?;
        self.skip_whitespace();
        if !self.is_at_end() {
            return Err(CalcError::UnexpectedToken);
        }
        if !value.is_finite() {
            return Err(CalcError::NonFinite);
        }
        Ok(value)
    }

    fn parse_expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_term()?;
        loop {
            self.skip_whitespace();
            let operator = match self.peek() {
                Some(c @ ('+' | '-')) => c,
                _ => return Ok(value),
            };
            self.index += 1;
            let right = self.parse_term()?;
            value = if operator == '+' { value + right } else { value - right };
        }
    }

    fn parse_term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_factor()?;
        loop {
            self.skip_whitespace();
            let operator = match self.peek() {
                Some(c @ ('*' | '/' | '%')) => c,
                _ => return Ok(value),
            };
            self.index += 1;
            let right = self.parse_factor()?;
            if (operator == '/' || operator == '%') && right == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            value = match operator {
                '*' => value * right,
                '/' => value / right,
                _ => value % right,
            };
        }
    }

    fn parse_factor(&mut self) -> Result<f64, CalcError> {
        self.skip_whitespace();
        match self.peek() {
            Some(operator @ ('+' | '-')) => {
                self.index += 1;
                let value = self.parse_factor()?;
                Ok(if operator == '-' { -value } else { value })
            }
            Some('(') => {
                self.index += 1;
                let value = self.parse_expression()?;
                self.skip_whitespace();
                if self.peek() != Some(')') {
                    return Err(CalcError::UnclosedParenthesis);
                }
                self.index += 1;
                Ok(value)
            }
            _ => self.parse_number(),
        }
    }

    fn parse_number(&mut self) -> Result<f64, CalcError> {
        self.skip_whitespace();
        let start = self.index;
        let mut has_decimal = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.index += 1;
            } else if c == '.' && !has_decimal {
                has_decimal = true;
                self.index += 1;
            } else {
                break;
            }
        }

        if start == self.index {
            return Err(CalcError::ExpectedNumber);
        }

        let literal: String = self.input[start..self.index].iter().collect();
        literal.parse().map_err(|_| CalcError::ExpectedNumber)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.index += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }
}
